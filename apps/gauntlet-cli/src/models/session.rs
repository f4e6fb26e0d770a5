//! Mischief session wire models

use serde::{Deserialize, Serialize};

/// The only session mode the harness uses: the session misbehaves
/// exactly as instructed by its mischief list, nothing more.
pub const SESSION_MODE_EXPLICIT: &str = "explicit";

/// Request body for creating a mischief session
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest<'a> {
    /// Operator-visible session name
    pub name: &'a str,

    /// Session mode, always [`SESSION_MODE_EXPLICIT`] here
    pub mode: &'a str,

    /// Ordered attack tags the session applies to issued tokens
    pub mischief: Vec<&'a str>,
}

impl<'a> SessionRequest<'a> {
    /// Build an explicit-mode request with the given attack tags
    pub fn explicit(name: &'a str, mischief: &[&'a str]) -> Self {
        Self {
            name,
            mode: SESSION_MODE_EXPLICIT,
            mischief: mischief.to_vec(),
        }
    }
}

/// Response from session creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Opaque id to send in the `X-Loki-Session` header. The harness
    /// never mutates or tears sessions down; the service expires them
    /// on its own schedule.
    pub session_id: String,
}
