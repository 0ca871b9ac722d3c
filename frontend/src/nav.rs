//! The fixed navigation surface rendered by the sidebar.

use crate::Route;

/// Sidebar entries, in display order within their sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Dashboard,
    Explanation,
    Quiz,
    Flashcards,
    Focus,
    Profile,
    Leaderboard,
}

impl NavPage {
    pub const STUDY: [NavPage; 5] = [
        NavPage::Dashboard,
        NavPage::Explanation,
        NavPage::Quiz,
        NavPage::Flashcards,
        NavPage::Focus,
    ];

    pub const ACCOUNT: [NavPage; 2] = [NavPage::Profile, NavPage::Leaderboard];

    pub fn route(self) -> Route {
        match self {
            NavPage::Dashboard => Route::Dashboard,
            NavPage::Explanation => Route::Explanation,
            NavPage::Quiz => Route::Quiz,
            NavPage::Flashcards => Route::Flashcards,
            NavPage::Focus => Route::Focus,
            NavPage::Profile => Route::Profile,
            NavPage::Leaderboard => Route::Leaderboard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavPage::Dashboard => "Dashboard",
            NavPage::Explanation => "AI Explanations",
            NavPage::Quiz => "Quiz",
            NavPage::Flashcards => "Flashcards",
            NavPage::Focus => "Focus Mode",
            NavPage::Profile => "Profile",
            NavPage::Leaderboard => "Leaderboard",
        }
    }

    /// Bootstrap-icons class for the entry.
    pub fn icon(self) -> &'static str {
        match self {
            NavPage::Dashboard => "bi-house-door",
            NavPage::Explanation => "bi-chat-dots",
            NavPage::Quiz => "bi-patch-question",
            NavPage::Flashcards => "bi-stack",
            NavPage::Focus => "bi-bullseye",
            NavPage::Profile => "bi-person",
            NavPage::Leaderboard => "bi-trophy",
        }
    }

    /// Pages that may be visited during an active focus session without the
    /// leave-confirmation prompt. Study surfaces stay reachable; everything
    /// else interrupts the session.
    pub fn allowed_during_focus(self) -> bool {
        matches!(
            self,
            NavPage::Focus | NavPage::Quiz | NavPage::Flashcards | NavPage::Explanation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_allow_list() {
        let allowed: Vec<NavPage> = NavPage::STUDY
            .iter()
            .chain(NavPage::ACCOUNT.iter())
            .copied()
            .filter(|p| p.allowed_during_focus())
            .collect();
        assert_eq!(
            allowed,
            vec![
                NavPage::Explanation,
                NavPage::Quiz,
                NavPage::Flashcards,
                NavPage::Focus
            ]
        );
        assert!(!NavPage::Dashboard.allowed_during_focus());
        assert!(!NavPage::Profile.allowed_during_focus());
        assert!(!NavPage::Leaderboard.allowed_during_focus());
    }

    #[test]
    fn test_sections_cover_every_entry_once() {
        let mut all: Vec<NavPage> = NavPage::STUDY
            .iter()
            .chain(NavPage::ACCOUNT.iter())
            .copied()
            .collect();
        all.dedup();
        assert_eq!(all.len(), 7);
    }
}
