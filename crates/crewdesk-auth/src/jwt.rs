//! Client-side JWT payload inspection.
//!
//! The client never verifies signatures; that is the backend's job.
//! It only base64-decodes the payload segment to read the `exp` claim,
//! so expiry can be determined without a server round trip. Malformed
//! tokens are reported as errors and treated by callers as
//! not-authenticated, never as a panic.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;

/// Claims the client cares about from an access token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Subject — the user ID.
    #[serde(default)]
    pub sub: Option<String>,
    /// Email, when the backend embeds it.
    #[serde(default)]
    pub email: Option<String>,
    /// Role string, when the backend embeds it.
    #[serde(default)]
    pub role: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenClaims {
    /// The expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Decode the payload segment of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> AppResult<TokenClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => {
            return Err(AppError::validation(
                "Token is not a three-segment JWT".to_string(),
            ));
        }
    };
    // Tolerate padded variants some backends emit.
    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::validation(format!("Token payload is not base64url: {e}")))?;
    let claims: TokenClaims = serde_json::from_slice(&raw)
        .map_err(|e| AppError::validation(format!("Token payload is not valid claims JSON: {e}")))?;
    Ok(claims)
}

/// Whether `token` is expired.
///
/// Decode failures count as expired: a token we cannot read is a token
/// we cannot trust.
pub fn is_expired(token: &str) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.is_expired(),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned JWT with the given payload JSON.
    fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_reads_claims() {
        let exp = Utc::now().timestamp() + 600;
        let token = token_with_payload(&serde_json::json!({
            "sub": "u-1",
            "email": "a@b.co",
            "role": "manager",
            "exp": exp,
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("u-1"));
        assert_eq!(claims.role.as_deref(), Some("manager"));
        assert_eq!(claims.exp, exp);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_past_exp_is_expired() {
        let token = token_with_payload(&serde_json::json!({
            "exp": Utc::now().timestamp() - 60,
        }));
        assert!(is_expired(&token));
    }

    #[test]
    fn test_future_exp_is_not_expired() {
        let token = token_with_payload(&serde_json::json!({
            "exp": Utc::now().timestamp() + 3600,
        }));
        assert!(!is_expired(&token));
    }

    #[test]
    fn test_malformed_tokens_never_panic() {
        assert!(is_expired(""));
        assert!(is_expired("not-a-jwt"));
        assert!(is_expired("only.two"));
        assert!(is_expired("a.!!!not-base64!!!.c"));
        // Valid base64 but not JSON claims.
        let garbage = URL_SAFE_NO_PAD.encode(b"garbage");
        assert!(is_expired(&format!("h.{garbage}.s")));
        // Claims JSON without an exp claim.
        let no_exp = URL_SAFE_NO_PAD.encode(br#"{"sub":"u-1"}"#);
        assert!(is_expired(&format!("h.{no_exp}.s")));
    }

    #[test]
    fn test_padded_payload_is_tolerated() {
        use base64::engine::general_purpose::URL_SAFE;
        let exp = Utc::now().timestamp() + 600;
        let payload = serde_json::json!({ "exp": exp }).to_string();
        let padded = URL_SAFE.encode(payload.as_bytes());
        let token = format!("h.{padded}.s");
        assert!(!is_expired(&token));
    }
}
