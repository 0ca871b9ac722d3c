//! Quiz view. Quiz generation and grading are backend features; the page
//! carries the shared chrome and stays on the focus allow-list.

use crate::components::Layout;
use crate::nav::NavPage;
use yew::prelude::*;

#[function_component(QuizPage)]
pub fn quiz_page() -> Html {
    html! {
        <Layout active={NavPage::Quiz} title="Quiz" subtitle="Test what you know">
            <div class="empty-state">
                <i class="bi bi-patch-question empty-icon"></i>
                <p>{ "Generate a quiz from any of your topics to get started." }</p>
            </div>
        </Layout>
    }
}
