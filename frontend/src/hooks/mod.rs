mod use_focus_session;
mod use_session_guard;
mod use_stats;

pub use use_focus_session::{use_focus_session, ExitRequest, FocusHandle, UseFocusSession};
pub use use_session_guard::{use_session_guard, UseSessionGuard};
pub use use_stats::use_stats;
