//! Bearer token inspection.
//!
//! The client only decodes the payload segment of the JWT to learn the
//! expiry instant. Signature verification is the backend's job; a forged
//! token buys nothing here because every API call is re-checked server-side.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Seconds of slack before the real expiry at which the token is already
/// treated as expired, so in-flight requests do not race the deadline.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-segment JWT")]
    Malformed,

    #[error("payload segment is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload is not valid claims JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Claims the backend places in the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the account email.
    pub sub: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default)]
    pub iat: i64,
}

/// Decode the payload segment of a bearer token without verifying it.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl TokenClaims {
    /// True once `now_ms` has reached `buffer_secs` before the expiry instant.
    pub fn is_expired(&self, now_ms: i64, buffer_secs: i64) -> bool {
        now_ms >= (self.exp - buffer_secs) * 1000
    }

    /// Whole seconds until the expiry instant, zero once it has passed.
    pub fn time_remaining_secs(&self, now_ms: i64) -> i64 {
        ((self.exp * 1000 - now_ms) / 1000).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with_payload(r#"{"sub":"ada@example.com","exp":1700000000,"iat":1699913600}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "ada@example.com");
        assert_eq!(claims.exp, 1_700_000_000);
        assert_eq!(claims.iat, 1_699_913_600);
    }

    #[test]
    fn test_decode_claims_missing_iat_defaults() {
        let token = token_with_payload(r#"{"sub":"ada@example.com","exp":42}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.iat, 0);
    }

    #[test]
    fn test_decode_rejects_malformed_token() {
        assert!(matches!(decode_claims("garbage"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.b"), Err(TokenError::Malformed)));
        assert!(matches!(
            decode_claims("a.!!!not-base64!!!.c"),
            Err(TokenError::Encoding(_))
        ));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not claims"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Payload(_))));
    }

    #[test]
    fn test_expiry_buffer_boundary() {
        let claims = TokenClaims {
            sub: "ada@example.com".into(),
            exp: 10_000,
            iat: 0,
        };
        let deadline_ms = (10_000 - EXPIRY_BUFFER_SECS) * 1000;

        // expired iff now >= exp - buffer
        assert!(!claims.is_expired(deadline_ms - 1, EXPIRY_BUFFER_SECS));
        assert!(claims.is_expired(deadline_ms, EXPIRY_BUFFER_SECS));
        assert!(claims.is_expired(deadline_ms + 1, EXPIRY_BUFFER_SECS));
    }

    #[test]
    fn test_zero_buffer_uses_real_expiry() {
        let claims = TokenClaims {
            sub: "ada@example.com".into(),
            exp: 10_000,
            iat: 0,
        };
        assert!(!claims.is_expired(9_999_999, 0));
        assert!(claims.is_expired(10_000_000, 0));
    }

    #[test]
    fn test_time_remaining_clamps_at_zero() {
        let claims = TokenClaims {
            sub: "ada@example.com".into(),
            exp: 100,
            iat: 0,
        };
        assert_eq!(claims.time_remaining_secs(40_000), 60);
        assert_eq!(claims.time_remaining_secs(100_000), 0);
        assert_eq!(claims.time_remaining_secs(500_000), 0);
    }
}
