//! AI explanations view. The conversation surface is backend-driven and
//! lives outside this client; the page carries the shared chrome.

use crate::components::Layout;
use crate::nav::NavPage;
use yew::prelude::*;

#[function_component(ExplanationPage)]
pub fn explanation_page() -> Html {
    html! {
        <Layout
            active={NavPage::Explanation}
            title="AI Explanations"
            subtitle="Ask anything about your course material"
        >
            <div class="empty-state">
                <i class="bi bi-chat-dots empty-icon"></i>
                <p>{ "Pick a topic to get a tailored explanation." }</p>
            </div>
        </Layout>
    }
}
