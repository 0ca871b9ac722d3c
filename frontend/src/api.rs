//! Backend API client.
//!
//! Thin gloo-net wrapper that attaches the bearer token and folds transport
//! and status failures into one error taxonomy. How an error surfaces is the
//! caller's decision: credential problems become blocking UI, stat-fetch and
//! focus-save failures are logged and swallowed.

use crate::{auth, utils};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    FocusSessionRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UserStatsResponse, XpEventResponse,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("credential rejected")]
    Unauthorized,

    #[error("access denied")]
    Forbidden,

    #[error("server returned status {0}")]
    Server(u16),

    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Backend-style error code for the message table.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Unauthorized => "TOKEN_EXPIRED",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::Server(_) => "SERVER_ERROR",
            ApiError::Parse(_) => "SERVER_ERROR",
        }
    }

    /// User-facing message for this error.
    pub fn user_message(&self) -> &'static str {
        error_message(self.code())
    }
}

/// Fixed code-to-text table for backend error codes. Unknown codes fall back
/// to a generic message instead of leaking raw codes into the UI.
pub fn error_message(code: &str) -> &'static str {
    match code {
        "EMAIL_EXISTS" => "This email is already registered",
        "REGISTRATION_SUCCESS" => "Registration complete!",
        "LOGIN_SUCCESS" => "Signed in!",
        "INVALID_CREDENTIALS" => "Wrong email or password",
        "TOKEN_VALID" => "Session is valid",
        "TOKEN_EXPIRED" => "Your session has expired",
        "USER_NOT_FOUND" => "Account not found",
        "UNAUTHORIZED" => "Not authorized",
        "FORBIDDEN" => "Access denied",
        "NETWORK_ERROR" => "Connection error. Check your network.",
        "SERVER_ERROR" => "Something went wrong. Please try again.",
        "AI_SERVICE_UNAVAILABLE" => "The AI service is unavailable. Try again.",
        "AI_TIMEOUT" => "The AI service timed out. Try again.",
        "DECK_NOT_FOUND" => "Deck not found",
        "FLASHCARD_NOT_FOUND" => "Flashcard not found",
        "DECK_ACCESS_DENIED" => "You don't have access to this deck",
        _ => "Something went wrong. Please try again.",
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    match response.status() {
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        status if !response.ok() => Err(ApiError::Server(status)),
        _ => Ok(()),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(err.to_string()))
}

async fn get_authorized<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let bearer = auth::token().ok_or(ApiError::Unauthorized)?;
    let response = Request::get(&utils::api_url(path))
        .header("Authorization", &format!("Bearer {bearer}"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(&response)?;
    parse_json(response).await
}

async fn post_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&utils::api_url(path))
        .json(body)
        .map_err(|err| ApiError::Parse(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(&response)?;
    parse_json(response).await
}

/// Display stats for the sidebar, topbar and dashboard. Read-only.
pub async fn fetch_stats() -> Result<UserStatsResponse, ApiError> {
    get_authorized("/api/gamification/stats").await
}

/// Report a finished focus session. Callers treat this as fire-and-forget.
///
/// The bearer token is an argument rather than read from storage: the
/// logout path clears credentials right after scheduling this call, and the
/// save must still go out with the token it was confirmed under.
pub async fn record_focus_session(
    bearer: &str,
    request: &FocusSessionRequest,
) -> Result<XpEventResponse, ApiError> {
    let response = Request::post(&utils::api_url("/api/gamification/focus-session"))
        .header("Authorization", &format!("Bearer {bearer}"))
        .json(request)
        .map_err(|err| ApiError::Parse(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(&response)?;
    parse_json(response).await
}

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_public("/api/auth/login", request).await
}

pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    post_public("/api/auth/register", request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_table() {
        assert_eq!(error_message("INVALID_CREDENTIALS"), "Wrong email or password");
        assert_eq!(
            error_message("NETWORK_ERROR"),
            "Connection error. Check your network."
        );
        // Unknown codes never leak through raw.
        assert_eq!(
            error_message("SOMETHING_NEW"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_api_error_maps_to_codes() {
        assert_eq!(ApiError::Unauthorized.code(), "TOKEN_EXPIRED");
        assert_eq!(ApiError::Forbidden.code(), "FORBIDDEN");
        assert_eq!(ApiError::Network("timeout".into()).code(), "NETWORK_ERROR");
        assert_eq!(
            ApiError::Unauthorized.user_message(),
            "Your session has expired"
        );
    }
}
