//! Hook owning the per-tab focus session lifecycle.
//!
//! Exactly one instance runs per document (the layout owns it); pages reach
//! it through the layout context, so a tab never ticks twice. The hook
//! keeps the authoritative copy in a RefCell the timer callback mutates,
//! mirrors it into component state for rendering, and replays writes from
//! other tabs when the shared storage key changes. Persisted state is the
//! single source of truth; the last writer wins.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{api, auth, storage, utils, Route};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use shared::focus::{FocusState, Progress};
use shared::{keys, FocusSessionRequest};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::StorageEvent;
use yew::prelude::*;
use yew_router::prelude::*;

/// Local countdown period.
const TICK_MS: u32 = 1_000;

/// A navigation (or logout) held back until the user confirms leaving the
/// running session.
#[derive(Clone, PartialEq)]
pub struct ExitRequest {
    pub target: Option<Route>,
    pub logout: bool,
}

/// Shared handle exposed to pages through the layout context.
#[derive(Clone, PartialEq)]
pub struct FocusHandle {
    /// Latest observed state; `None` is Idle.
    pub state: Option<FocusState>,
    /// Begin a session with the given duration in seconds.
    pub start: Callback<u32>,
    /// Flip the paused flag.
    pub toggle_pause: Callback<()>,
    /// Ask to leave the session; the confirmation dialog follows.
    pub request_exit: Callback<ExitRequest>,
}

impl FocusHandle {
    pub fn in_session(&self) -> bool {
        self.state.as_ref().map(|s| s.is_running).unwrap_or(false)
    }
}

/// Return value from the use_focus_session hook.
pub struct UseFocusSession {
    pub handle: FocusHandle,
    /// Exit waiting on the confirmation dialog.
    pub pending_exit: Option<ExitRequest>,
    /// A session just completed while another view was active.
    pub completion_notice: bool,
    pub confirm_exit: Callback<()>,
    pub cancel_exit: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

fn persist(state: &FocusState) {
    storage::set_json(keys::FOCUS_STATE, state);
}

/// Report the finished session to the backend, best-effort. A failed save
/// is logged and the client moves on; session continuity beats strict
/// consistency with the backend records.
fn save_session_to_backend(state: &FocusState) {
    if state.elapsed_seconds == 0 {
        return;
    }
    let Some(bearer) = auth::token() else {
        return;
    };
    let request = FocusSessionRequest {
        duration_minutes: state.duration_minutes(),
        xp_earned: state.earned_xp,
    };
    spawn_local(async move {
        if let Err(err) = api::record_focus_session(&bearer, &request).await {
            log::error!("failed to save focus session: {err}");
        }
    });
}

/// Load the stored record and fold the elapsed wall clock into it.
/// Missing or corrupt records read as Idle.
fn load_reconciled(now_ms: i64) -> (Option<FocusState>, Progress) {
    let Some(raw) = storage::get_string(keys::FOCUS_STATE) else {
        return (None, Progress::Unchanged);
    };
    let mut state: FocusState = match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("discarding corrupt focus state: {err}");
            storage::remove(keys::FOCUS_STATE);
            return (None, Progress::Unchanged);
        }
    };
    if !state.is_running {
        storage::remove(keys::FOCUS_STATE);
        return (None, Progress::Unchanged);
    }
    match state.reconcile(now_ms) {
        Progress::Advanced => {
            // Persist the correction so tabs that load later do not redo it.
            persist(&state);
            (Some(state), Progress::Advanced)
        }
        progress => (Some(state), progress),
    }
}

/// Tear the session down after completion: clear the shared record, go
/// Idle, save, and raise the notice unless the focus view is in front.
fn complete_session(
    state: FocusState,
    cell: &Rc<RefCell<Option<FocusState>>>,
    snapshot: &UseStateHandle<Option<FocusState>>,
    completion_notice: &UseStateHandle<bool>,
) {
    storage::remove(keys::FOCUS_STATE);
    *cell.borrow_mut() = None;
    snapshot.set(None);
    save_session_to_backend(&state);
    if utils::current_path() != Route::Focus.to_path() {
        completion_notice.set(true);
    }
}

/// Apply a freshly loaded record (initial load or another tab's write).
fn adopt_loaded(
    loaded: (Option<FocusState>, Progress),
    cell: &Rc<RefCell<Option<FocusState>>>,
    snapshot: &UseStateHandle<Option<FocusState>>,
    completion_notice: &UseStateHandle<bool>,
) {
    match loaded {
        (Some(state), Progress::Completed) => {
            complete_session(state, cell, snapshot, completion_notice);
        }
        (state, _) => {
            *cell.borrow_mut() = state.clone();
            snapshot.set(state);
        }
    }
}

#[hook]
pub fn use_focus_session() -> UseFocusSession {
    let cell = use_mut_ref(|| None::<FocusState>);
    let snapshot = use_state(|| None::<FocusState>);
    let pending_exit = use_state(|| None::<ExitRequest>);
    let completion_notice = use_state(|| false);
    let navigator = use_navigator();

    // Initial load: reconcile whatever an earlier page view or another tab
    // left behind before rendering anything.
    {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        let completion_notice = completion_notice.clone();
        use_effect_with((), move |_| {
            adopt_loaded(
                load_reconciled(utils::now_ms()),
                &cell,
                &snapshot,
                &completion_notice,
            );
            || ()
        });
    }

    // Cross-tab replication: another tab writing the shared key makes this
    // tab reload and restart or stop its own countdown accordingly.
    {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        let completion_notice = completion_notice.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global window");
            let listener = EventListener::new(&window, "storage", move |event| {
                let Some(event) = event.dyn_ref::<StorageEvent>() else {
                    return;
                };
                if event.key().as_deref() != Some(keys::FOCUS_STATE) {
                    return;
                }
                adopt_loaded(
                    load_reconciled(utils::now_ms()),
                    &cell,
                    &snapshot,
                    &completion_notice,
                );
            });
            move || drop(listener)
        });
    }

    // The countdown itself. Runs while a session exists, paused or not:
    // a paused tick is a no-op, and resume needs no timer restart.
    let in_session = snapshot.as_ref().map(|s| s.is_running).unwrap_or(false);
    {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        let completion_notice = completion_notice.clone();
        use_effect_with(in_session, move |&running| {
            enum Outcome {
                Idle,
                Advanced(FocusState),
                Finished(FocusState),
            }

            let interval = running.then(|| {
                Interval::new(TICK_MS, move || {
                    let outcome = {
                        let mut guard = cell.borrow_mut();
                        match guard.as_mut() {
                            None => Outcome::Idle,
                            Some(state) => match state.tick(utils::now_ms()) {
                                Progress::Unchanged => Outcome::Idle,
                                Progress::Advanced => {
                                    persist(state);
                                    Outcome::Advanced(state.clone())
                                }
                                Progress::Completed => {
                                    let finished = state.clone();
                                    *guard = None;
                                    Outcome::Finished(finished)
                                }
                            },
                        }
                    };
                    match outcome {
                        Outcome::Idle => {}
                        Outcome::Advanced(state) => snapshot.set(Some(state)),
                        Outcome::Finished(state) => {
                            complete_session(state, &cell, &snapshot, &completion_notice);
                        }
                    }
                })
            });
            move || drop(interval)
        });
    }

    let start = {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |duration_secs: u32| {
            let state = FocusState::start(duration_secs, utils::now_ms());
            persist(&state);
            *cell.borrow_mut() = Some(state.clone());
            snapshot.set(Some(state));
        })
    };

    let toggle_pause = {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_| {
            let mut guard = cell.borrow_mut();
            if let Some(state) = guard.as_mut() {
                let paused = !state.is_paused;
                state.set_paused(paused, utils::now_ms());
                persist(state);
                snapshot.set(Some(state.clone()));
            }
        })
    };

    let request_exit = {
        let pending_exit = pending_exit.clone();
        Callback::from(move |request: ExitRequest| pending_exit.set(Some(request)))
    };

    let confirm_exit = {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        let pending_exit = pending_exit.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(request) = (*pending_exit).clone() else {
                return;
            };
            pending_exit.set(None);

            if let Some(state) = cell.borrow_mut().take() {
                save_session_to_backend(&state);
            }
            storage::remove(keys::FOCUS_STATE);
            snapshot.set(None);

            if request.logout {
                auth::logout();
            } else if let (Some(navigator), Some(target)) = (navigator.as_ref(), request.target) {
                navigator.push(&target);
            }
        })
    };

    let cancel_exit = {
        let pending_exit = pending_exit.clone();
        Callback::from(move |_| pending_exit.set(None))
    };

    let dismiss_notice = {
        let completion_notice = completion_notice.clone();
        Callback::from(move |_| completion_notice.set(false))
    };

    UseFocusSession {
        handle: FocusHandle {
            state: (*snapshot).clone(),
            start,
            toggle_pause,
            request_exit,
        },
        pending_exit: (*pending_exit).clone(),
        completion_notice: *completion_notice,
        confirm_exit,
        cancel_exit,
        dismiss_notice,
    }
}
