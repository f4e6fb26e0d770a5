//! Compact JWT decoding without signature verification.
//!
//! Header and claims are decoded independently so callers can classify
//! the algorithm before touching the claims segment. The signature
//! segment, when present, is never read.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while taking a compact token apart.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 2 or 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("segment is not valid base64: {0}")]
    Base64(String),

    #[error("segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// JOSE header fields the acceptance checks inspect.
///
/// Unknown fields are ignored; `alg` is kept as the raw string so the
/// validator can compare it case-insensitively.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenHeader {
    /// Raw algorithm value, exactly as the token presented it.
    pub alg: String,

    /// Key id, carried for diagnostics only.
    #[serde(default)]
    pub kid: Option<String>,

    /// Declared token type, carried for diagnostics only.
    #[serde(default)]
    pub typ: Option<String>,
}

/// Registered claims the acceptance checks inspect.
///
/// Both claims are optional: a token without them is structurally fine
/// and the corresponding checks simply do not apply. Unknown claims are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredClaims {
    /// Expiry as epoch seconds.
    #[serde(default)]
    pub exp: Option<u64>,

    /// Issuer identifier.
    #[serde(default)]
    pub iss: Option<String>,
}

/// Decode the header segment of a compact token.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token does not split into 2 or 3
/// segments, or the header segment is not base64-encoded JSON.
pub fn decode_header(token: &str) -> Result<TokenHeader, DecodeError> {
    let segments = split_segments(token)?;
    let bytes = decode_segment(segments[0])?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode the claims segment of a compact token.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token does not split into 2 or 3
/// segments, or the claims segment is not base64-encoded JSON.
pub fn decode_claims(token: &str) -> Result<RegisteredClaims, DecodeError> {
    let segments = split_segments(token)?;
    let bytes = decode_segment(segments[1])?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Split a compact token into its segments.
///
/// Accepts `header.claims` and `header.claims.signature`; an empty
/// signature segment (the `alg=none` serialization ends with a bare
/// dot) is allowed.
fn split_segments(token: &str) -> Result<Vec<&str>, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() < 2 || segments.len() > 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }
    Ok(segments)
}

/// Decode one base64 segment.
///
/// Tokens are supposed to use unpadded base64url, but misbehaving
/// issuers also emit standard base64; both alphabets decode.
fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD.decode(segment))
        .map_err(|e| DecodeError::Base64(e.to_string()))
}
