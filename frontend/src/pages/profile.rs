//! Profile view: the stored display record plus a few lifetime stats.

use crate::auth;
use crate::components::{AppContext, Layout};
use crate::nav::NavPage;
use yew::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    html! {
        <Layout active={NavPage::Profile} title="Profile">
            <ProfileContent />
        </Layout>
    }
}

#[function_component(ProfileContent)]
fn profile_content() -> Html {
    let ctx = use_context::<AppContext>();
    let stats = ctx.and_then(|c| c.stats).unwrap_or_default();
    let user = auth::current_user().unwrap_or_default();

    html! {
        <div class="profile-card">
            <div class="user-avatar large">{ user.initials() }</div>
            <h2>{ user.display_name() }</h2>
            if let Some(email) = &user.email {
                <p class="profile-email">{ email }</p>
            }
            <div class="profile-stats">
                <div class="profile-stat">
                    <span class="profile-stat-value">{ stats.longest_streak }</span>
                    <span class="profile-stat-label">{ "Longest streak" }</span>
                </div>
                <div class="profile-stat">
                    <span class="profile-stat-value">{ stats.quizzes_completed }</span>
                    <span class="profile-stat-label">{ "Quizzes done" }</span>
                </div>
                <div class="profile-stat">
                    <span class="profile-stat-value">{ stats.flashcards_studied }</span>
                    <span class="profile-stat-label">{ "Cards studied" }</span>
                </div>
            </div>
        </div>
    }
}
