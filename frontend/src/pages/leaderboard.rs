//! Leaderboard view. Rankings are computed server-side; the page carries
//! the shared chrome.

use crate::components::Layout;
use crate::nav::NavPage;
use yew::prelude::*;

#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    html! {
        <Layout active={NavPage::Leaderboard} title="Leaderboard" subtitle="See how your class is doing">
            <div class="empty-state">
                <i class="bi bi-trophy empty-icon"></i>
                <p>{ "Rankings appear once your class starts earning XP." }</p>
            </div>
        </Layout>
    }
}
