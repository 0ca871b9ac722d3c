//! Credential storage and the page-load session guard.
//!
//! The bearer token and the display record of the signed-in user live in
//! localStorage. Guard checks treat an absent or malformed token the same
//! as an expired one, and near-expiry tokens as already expired (60 s
//! buffer) so a request started now still lands inside the token's life.

use crate::{storage, utils};
use shared::keys;
use shared::token::{decode_claims, TokenClaims, EXPIRY_BUFFER_SECS};
use shared::StoredUser;

/// Period of the repeating expiry check installed by the layout.
pub const TOKEN_CHECK_INTERVAL_MS: u32 = 30_000;

/// Views reachable without a session. Redirecting to the login view from
/// one of these would loop.
const PUBLIC_PATHS: [&str; 2] = ["/login", "/register"];

const LOGIN_PATH: &str = "/login";

pub fn token() -> Option<String> {
    storage::get_string(keys::TOKEN)
}

pub fn current_user() -> Option<StoredUser> {
    storage::get_json(keys::USER)
}

pub fn store_session(token: &str, user: &StoredUser) {
    storage::set_string(keys::TOKEN, token);
    storage::set_json(keys::USER, user);
}

fn clear_credentials() {
    storage::remove(keys::TOKEN);
    storage::remove(keys::USER);
}

/// Claims of the stored token, if it parses at all.
pub fn current_claims() -> Option<TokenClaims> {
    let token = token()?;
    match decode_claims(&token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            log::warn!("stored token is unreadable, treating as expired: {err}");
            None
        }
    }
}

/// True while a token is present and outside the expiry buffer.
pub fn session_is_valid() -> bool {
    current_claims()
        .map(|claims| !claims.is_expired(utils::now_ms(), EXPIRY_BUFFER_SECS))
        .unwrap_or(false)
}

/// Read and clear the one-shot notice left by a redirect.
pub fn take_auth_notice() -> Option<String> {
    storage::take_notice(keys::AUTH_NOTICE)
}

/// Drop credentials and send the document to the login view, optionally
/// leaving a one-shot notice for it. No-op navigation on public views.
pub fn clear_session_and_redirect(notice: Option<&str>) {
    clear_credentials();
    if let Some(message) = notice {
        storage::set_notice(keys::AUTH_NOTICE, message);
    }

    let path = utils::current_path();
    if PUBLIC_PATHS.contains(&path.as_str()) {
        return;
    }
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

/// Page-load gate for protected views: absent and expired tokens both leave
/// for the login view, with a notice explaining why.
pub fn enforce_signed_in() {
    if token().is_none() {
        clear_session_and_redirect(Some("Please sign in to continue."));
    } else if !session_is_valid() {
        clear_session_and_redirect(Some("Your session has expired. Please sign in again."));
    }
}

/// Plain logout: used when no focus session needs confirmation first.
pub fn logout() {
    clear_session_and_redirect(None);
}
