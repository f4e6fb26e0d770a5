//! HTTP client construction for the harness

use crate::config::Config;
use crate::error::{CliError, CliResult};
use reqwest::Client;
use std::time::Duration;

/// User agent sent on every request
const USER_AGENT: &str = concat!("gauntlet/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client every requestor shares.
///
/// The configured timeout bounds each request end to end; the harness
/// itself never retries.
pub fn build_client(config: &Config) -> CliResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_configured_timeout() {
        let config = Config {
            issuer_url: "http://localhost:9000".to_string(),
            client_id: "c".to_string(),
            client_secret: "s".to_string(),
            timeout_secs: 5,
            strict: false,
        };
        assert!(build_client(&config).is_ok());
    }
}
