//! Page header with the streak / XP / level stat chips.
//!
//! The chips render their defaults immediately; the async stats fetch fills
//! them in when (and if) it lands.

use shared::stats::format_compact;
use shared::UserStatsResponse;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopbarProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub stats: Option<UserStatsResponse>,
}

#[function_component(Topbar)]
pub fn topbar(props: &TopbarProps) -> Html {
    let (streak, xp, level) = match &props.stats {
        Some(stats) => (
            stats.current_streak.to_string(),
            format_compact(stats.total_xp),
            stats.level.to_string(),
        ),
        None => ("0".to_string(), "0".to_string(), "1".to_string()),
    };

    html! {
        <div class="page-header">
            <div>
                <h1 class="page-title">{ props.title.clone() }</h1>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p class="page-subtitle">{ subtitle }</p>
                }
            </div>
            <div class="topbar-right">
                <div class="topbar-stat streak" title="Consecutive study days">
                    <i class="bi bi-fire"></i>
                    <span>{ streak }</span>
                </div>
                <div class="topbar-stat xp" title="Total XP">
                    <i class="bi bi-lightning-charge-fill"></i>
                    <span>{ xp }</span>
                </div>
                <div class="topbar-stat level" title="Level">
                    <i class="bi bi-star-fill"></i>
                    <span>{ format!("Lv.{level}") }</span>
                </div>
            </div>
        </div>
    }
}
