//! The dedicated focus timer view.
//!
//! This page is the only place a session is started, paused or resumed; the
//! tracker everywhere else just follows the stored state. Ending a session
//! from here goes through the same confirmation dialog as intercepted
//! navigation, with nowhere to go afterwards.

use crate::components::{AppContext, Layout};
use crate::hooks::ExitRequest;
use crate::nav::NavPage;
use shared::focus::format_clock;
use yew::prelude::*;

const PRESET_MINUTES: [u32; 4] = [15, 25, 45, 60];
const DEFAULT_MINUTES: u32 = 25;

#[function_component(FocusPage)]
pub fn focus_page() -> Html {
    html! {
        <Layout active={NavPage::Focus} title="Focus Mode" subtitle="Distraction-free study time">
            <FocusControls />
        </Layout>
    }
}

#[function_component(FocusControls)]
fn focus_controls() -> Html {
    let ctx = use_context::<AppContext>();
    let selected = use_state(|| DEFAULT_MINUTES);
    let Some(ctx) = ctx else {
        return html! {};
    };
    let focus = ctx.focus;

    let Some(state) = focus.state.clone() else {
        // Idle: pick a duration and go.
        let on_start = {
            let start = focus.start.clone();
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| start.emit(*selected * 60))
        };
        return html! {
            <div class="focus-setup">
                <p class="focus-hint">{ "How long do you want to focus?" }</p>
                <div class="focus-presets">
                    { for PRESET_MINUTES.iter().map(|&minutes| {
                        let class = classes!(
                            "preset-btn",
                            (minutes == *selected).then_some("selected")
                        );
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(minutes))
                        };
                        html! {
                            <button {class} {onclick}>{ format!("{minutes} min") }</button>
                        }
                    }) }
                </div>
                <button class="btn btn-primary focus-start" onclick={on_start}>
                    <i class="bi bi-play-fill"></i>
                    { " Start session" }
                </button>
            </div>
        };
    };

    let on_toggle_pause = {
        let toggle = focus.toggle_pause.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let on_end = {
        let request_exit = focus.request_exit.clone();
        Callback::from(move |_: MouseEvent| {
            request_exit.emit(ExitRequest {
                target: None,
                logout: false,
            })
        })
    };

    let pause_label = if state.is_paused { " Resume" } else { " Pause" };
    let pause_icon = if state.is_paused {
        "bi bi-play-fill"
    } else {
        "bi bi-pause-fill"
    };

    html! {
        <div class="focus-active">
            <div class={classes!("focus-clock", state.is_paused.then_some("paused"))}>
                { format_clock(state.remaining_seconds) }
            </div>
            if state.is_paused {
                <p class="focus-status">{ "Paused" }</p>
            }
            <div class="focus-readouts">
                <div class="focus-readout">
                    <span class="focus-readout-value">{ format_clock(state.elapsed_seconds) }</span>
                    <span class="focus-readout-label">{ "Studied" }</span>
                </div>
                <div class="focus-readout">
                    <span class="focus-readout-value">{ format!("+{}", state.earned_xp) }</span>
                    <span class="focus-readout-label">{ "XP earned" }</span>
                </div>
            </div>
            <div class="focus-controls">
                <button class="btn btn-outline" onclick={on_toggle_pause}>
                    <i class={pause_icon}></i>
                    { pause_label }
                </button>
                <button class="btn btn-danger" onclick={on_end}>
                    <i class="bi bi-stop-fill"></i>
                    { " End session" }
                </button>
            </div>
        </div>
    }
}
