//! Fixed banner shown on every view except the focus page while a session
//! runs: live countdown, earned XP, and a way back to the timer.

use crate::Route;
use shared::focus::{format_clock, FocusState};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FocusBannerProps {
    pub state: FocusState,
}

#[function_component(FocusBanner)]
pub fn focus_banner(props: &FocusBannerProps) -> Html {
    let status = if props.state.is_paused {
        "Focus session paused"
    } else {
        "Focus session running"
    };

    html! {
        <div class="focus-banner">
            <div class="focus-banner-content">
                <div class="focus-banner-left">
                    <div class={classes!("focus-banner-pulse", props.state.is_paused.then_some("paused"))}></div>
                    <i class="bi bi-bullseye"></i>
                    <span class="focus-banner-text">
                        <strong>{ status }</strong>
                        <span class="focus-banner-time">{ format_clock(props.state.remaining_seconds) }</span>
                    </span>
                </div>
                <div class="focus-banner-right">
                    <span class="focus-banner-xp">{ format!("+{} XP", props.state.earned_xp) }</span>
                    <Link<Route> to={Route::Focus} classes="focus-banner-btn">
                        <i class="bi bi-arrow-return-left"></i>
                        { " Back to timer" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
