//! Pure token payload decoding and expiry validation.
//!
//! No signature verification happens here; the client only checks whether
//! the `exp` claim of the decoded payload is still in the future. Time is an
//! explicit parameter so the check is reproducible under test.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// Claims read from the token payload. Only `exp` is consulted.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Claims {
    /// Expiration timestamp, seconds since epoch.
    pub exp: Option<u64>,
}

/// Why a token failed to decode or validate.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not three dot-separated segments")]
    Malformed,
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload carries no exp claim")]
    MissingExp,
}

/// Decode the claims from the middle segment of a three-segment token.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token does not have three segments or
/// the middle segment is not base64-encoded JSON.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed);
    }
    let bytes = decode_segment(parts[1])?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// True iff `token` decodes and its `exp` claim is strictly greater than
/// `now_secs`. A missing `exp` claim is invalid, as is an `exp` equal to
/// now. Decode failures are logged and collapse to `false`; no error
/// escapes to the caller.
pub fn is_token_valid(token: &str, now_secs: u64) -> bool {
    if token.is_empty() {
        return false;
    }
    match validate(token, now_secs) {
        Ok(valid) => valid,
        Err(err) => {
            log::warn!("token validation failed: {err}");
            false
        }
    }
}

fn validate(token: &str, now_secs: u64) -> Result<bool, TokenError> {
    let claims = decode_claims(token)?;
    let exp = claims.exp.ok_or(TokenError::MissingExp)?;
    Ok(exp > now_secs)
}

// JWTs use the URL-safe alphabet without padding; tokens minted with a
// plain `btoa` use the standard alphabet with padding. Accept both.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| base64::engine::general_purpose::STANDARD.decode(segment))
}
