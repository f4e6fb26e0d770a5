//! Mischief session administration

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::models::{SessionRequest, SessionResponse};
use reqwest::Client;
use tracing::debug;

/// Create an explicit-mode mischief session with the given attack tags.
///
/// The returned session id scopes subsequent token requests via the
/// `X-Loki-Session` header.
///
/// Failures here are ordinary errors; the scenario runner decides what
/// an unavailable session means for a run.
pub async fn create_session(
    client: &Client,
    config: &Config,
    name: &str,
    mischief: &[&str],
) -> CliResult<SessionResponse> {
    let request = SessionRequest::explicit(name, mischief);

    debug!(name, ?mischief, "creating mischief session");

    let response = client
        .post(config.sessions_url())
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(CliError::Api { status, message });
    }

    let session: SessionResponse = response
        .json()
        .await
        .map_err(|e| CliError::InvalidResponse(format!("Invalid session response: {e}")))?;

    debug!(session_id = %session.session_id, "mischief session created");

    Ok(session)
}
