//! Confirmation dialog shown before leaving a running focus session.
//!
//! Canceling leaves the session exactly as it was; confirming saves the
//! progress, clears the session, and lets the held-back navigation proceed.

use shared::focus::{format_clock, FocusState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExitDialogProps {
    pub state: Option<FocusState>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExitDialog)]
pub fn exit_dialog(props: &ExitDialogProps) -> Html {
    let (elapsed, xp) = props
        .state
        .as_ref()
        .map(|s| (s.elapsed_seconds, s.earned_xp))
        .unwrap_or((0, 0));

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="focus-exit-overlay" onclick={on_cancel.clone()}>
            <div class="focus-exit-dialog" onclick={swallow_click}>
                <div class="focus-exit-icon">
                    <i class="bi bi-exclamation-triangle"></i>
                </div>
                <div class="focus-exit-title">{ "End your focus session?" }</div>
                <div class="focus-exit-text">
                    { "You are about to leave your study session. Your progress will be saved." }
                </div>
                <div class="focus-exit-stats">
                    <div class="focus-exit-stat">
                        <div class="focus-exit-stat-value">{ format_clock(elapsed) }</div>
                        <div class="focus-exit-stat-label">{ "Time" }</div>
                    </div>
                    <div class="focus-exit-stat">
                        <div class="focus-exit-stat-value">{ format!("+{xp}") }</div>
                        <div class="focus-exit-stat-label">{ "XP earned" }</div>
                    </div>
                </div>
                <div class="focus-exit-buttons">
                    <button class="focus-exit-btn cancel" onclick={on_cancel}>
                        { "Keep studying" }
                    </button>
                    <button class="focus-exit-btn confirm" onclick={on_confirm}>
                        { "End and leave" }
                    </button>
                </div>
            </div>
        </div>
    }
}
