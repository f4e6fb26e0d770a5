//! Token endpoint client for the client-credentials grant

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::models::TokenResponse;
use reqwest::Client;
use tracing::debug;

/// Header scoping a token request to a mischief session
pub const SESSION_HEADER: &str = "X-Loki-Session";

/// Request an access token via the client-credentials grant.
///
/// With `session_id` the request is scoped to that mischief session and
/// the service shapes the token accordingly; without it the service
/// mints an honest token. Returns the raw compact token string.
pub async fn request_token(
    client: &Client,
    config: &Config,
    session_id: Option<&str>,
) -> CliResult<String> {
    debug!(session = session_id.unwrap_or("none"), "requesting token");

    let mut request = client
        .post(config.token_url())
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")]);

    if let Some(id) = session_id {
        request = request.header(SESSION_HEADER, id);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(CliError::Api { status, message });
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| CliError::InvalidResponse(format!("Invalid token response: {e}")))?;

    Ok(token.access_token)
}
