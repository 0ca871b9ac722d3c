//! Flashcards view. Deck content comes from the backend; the page carries
//! the shared chrome and stays on the focus allow-list.

use crate::components::Layout;
use crate::nav::NavPage;
use yew::prelude::*;

#[function_component(FlashcardsPage)]
pub fn flashcards_page() -> Html {
    html! {
        <Layout active={NavPage::Flashcards} title="Flashcards" subtitle="Review your decks">
            <div class="empty-state">
                <i class="bi bi-stack empty-icon"></i>
                <p>{ "Create a deck to start reviewing." }</p>
            </div>
        </Layout>
    }
}
