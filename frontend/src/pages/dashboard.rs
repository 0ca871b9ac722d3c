//! Landing view: greeting plus stat cards from the gamification endpoint.

use crate::auth;
use crate::components::{AppContext, Layout};
use crate::nav::NavPage;
use shared::stats::format_compact;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <Layout active={NavPage::Dashboard} title="Dashboard" subtitle="Your study overview">
            <DashboardContent />
        </Layout>
    }
}

fn format_study_time(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

#[function_component(DashboardContent)]
fn dashboard_content() -> Html {
    let ctx = use_context::<AppContext>();
    let stats = ctx.and_then(|c| c.stats).unwrap_or_default();
    let user = auth::current_user().unwrap_or_default();

    let progress = stats.level_progress.clamp(0.0, 100.0);

    html! {
        <div class="dashboard">
            <h2 class="greeting">{ format!("Welcome back, {}!", user.display_name()) }</h2>

            <div class="stat-grid">
                <div class="stat-card">
                    <i class="bi bi-lightning-charge-fill stat-icon xp"></i>
                    <div class="stat-value">{ format_compact(stats.total_xp) }</div>
                    <div class="stat-label">{ "Total XP" }</div>
                </div>
                <div class="stat-card">
                    <i class="bi bi-fire stat-icon streak"></i>
                    <div class="stat-value">{ stats.current_streak }</div>
                    <div class="stat-label">{ "Day streak" }</div>
                </div>
                <div class="stat-card">
                    <i class="bi bi-star-fill stat-icon level"></i>
                    <div class="stat-value">{ format!("Level {}", stats.level) }</div>
                    <div class="stat-label">
                        { format!("{} XP to next level", stats.xp_for_next_level) }
                    </div>
                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style={format!("width: {progress:.0}%")}
                        ></div>
                    </div>
                </div>
                <div class="stat-card">
                    <i class="bi bi-clock-history stat-icon time"></i>
                    <div class="stat-value">{ format_study_time(stats.total_study_time_minutes) }</div>
                    <div class="stat-label">
                        { format!("{} focus sessions", stats.focus_sessions_completed) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_study_time() {
        assert_eq!(format_study_time(0), "0m");
        assert_eq!(format_study_time(59), "59m");
        assert_eq!(format_study_time(60), "1h 0m");
        assert_eq!(format_study_time(385), "6h 25m");
    }
}
