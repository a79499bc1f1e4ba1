//! Client-side JWT payload decoding.
//!
//! The signature is never verified here. Decoded claims are advisory and only
//! drive display and redirects; the backend re-checks the token on every call.

use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token is not three dot-separated segments.
    #[error("token must have 3 segments, found {0}")]
    Segments(usize),
    /// The payload segment is not base64url.
    #[error("invalid token payload encoding: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload is not a JSON object carrying the expected claims.
    #[error("invalid token claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Identity and expiry carried by a bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    /// Subject; the backend issues the account email here.
    pub sub: String,
    /// Expiry in seconds since the Unix epoch.
    pub exp: i64,
}

impl UserClaims {
    /// Whether the token expired strictly before `now_ms`.
    ///
    /// `exp` is whole seconds, so the comparison is done in milliseconds to
    /// expire a token as soon as its second has started to elapse.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.exp.saturating_mul(1000) < now_ms
    }

    /// Local part of the subject (`ada` for `ada@example.com`).
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.sub.split('@').next().unwrap_or_default()
    }

    /// Uppercased first character of the subject, `U` when empty.
    #[must_use]
    pub fn initial(&self) -> String {
        self.sub
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Decode the payload segment of `token` into [`UserClaims`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not a structurally valid JWT or
/// its payload lacks `sub`/`exp`.
pub fn decode(token: &str) -> Result<UserClaims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };
    let bytes = if payload.ends_with('=') {
        URL_SAFE.decode(payload)?
    } else {
        URL_SAFE_NO_PAD.decode(payload)?
    };
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build an unsigned token carrying `claims`. Intended for stubs and tests.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialized.
pub fn encode_unsigned(claims: &UserClaims) -> Result<String, serde_json::Error> {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    Ok(format!("{header}.{payload}.unsigned"))
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
