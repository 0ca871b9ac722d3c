mod exit_dialog;
mod focus_banner;
mod layout;
mod session_expired;
mod sidebar;
mod toast;
mod topbar;

pub use exit_dialog::ExitDialog;
pub use focus_banner::FocusBanner;
pub use layout::{AppContext, Layout};
pub use session_expired::SessionExpiredModal;
pub use sidebar::Sidebar;
pub use toast::Toast;
pub use topbar::Topbar;
