//! Hook for the in-session token expiry watch.
//!
//! The page-load gate already ran before this hook's host rendered; what is
//! left is catching the token going stale while the page stays open. A
//! repeating check plus a window-focus check flip `expired`, and the layout
//! answers with the blocking re-login modal instead of yanking the user
//! away mid-page.

use crate::auth;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Return value from the use_session_guard hook.
pub struct UseSessionGuard {
    /// The stored token crossed its expiry buffer mid-session.
    pub expired: bool,
    /// Lets API callers surface a 401 through the same modal.
    pub mark_expired: Callback<()>,
}

#[hook]
pub fn use_session_guard() -> UseSessionGuard {
    let expired = use_state(|| false);

    {
        let expired = expired.clone();
        use_effect_with((), move |_| {
            let check = {
                let expired = expired.clone();
                move || {
                    if !auth::session_is_valid() {
                        expired.set(true);
                    }
                }
            };

            let interval = Interval::new(auth::TOKEN_CHECK_INTERVAL_MS, {
                let check = check.clone();
                move || check()
            });

            let window = web_sys::window().expect("no global window");
            let focus_listener = EventListener::new(&window, "focus", move |_| check());

            // Both watchers die with the layout; nothing leaks across
            // navigations.
            move || {
                drop(interval);
                drop(focus_listener);
            }
        });
    }

    let mark_expired = {
        let expired = expired.clone();
        Callback::from(move |_| expired.set(true))
    };

    UseSessionGuard {
        expired: *expired,
        mark_expired,
    }
}
