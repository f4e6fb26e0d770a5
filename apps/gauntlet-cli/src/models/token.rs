//! Token endpoint wire model

use serde::{Deserialize, Serialize};

/// Response from the token endpoint.
///
/// Only `access_token` is consumed; the rest of the envelope is modeled
/// because the wire carries it, and kept optional because the service
/// under test misbehaves by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact JWT access token
    pub access_token: String,

    /// Token type (nominally "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,

    /// Seconds until the access token expires
    #[serde(default)]
    pub expires_in: Option<u64>,
}
