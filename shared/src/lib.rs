// Focus session state machine in separate module
pub mod focus;

// Backend API records
pub mod stats;

// Bearer token inspection
pub mod token;

// Display-only user record
pub mod user;

pub use focus::{FocusState, Progress};
pub use stats::{
    FocusSessionRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UserStatsResponse, XpEventResponse,
};
pub use token::{TokenClaims, TokenError};
pub use user::StoredUser;

/// Well-known browser storage keys. Every tab of the same origin reads and
/// writes these, so the names are part of the stored-data contract.
pub mod keys {
    /// localStorage: bearer token for the backend API.
    pub const TOKEN: &str = "token";
    /// localStorage: display record of the signed-in user.
    pub const USER: &str = "user";
    /// localStorage: focus session state, replicated across tabs.
    pub const FOCUS_STATE: &str = "focusState";
    /// sessionStorage: one-shot notice consumed by the next login view.
    pub const AUTH_NOTICE: &str = "authMessage";
}
