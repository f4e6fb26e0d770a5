//! Harness configuration resolved from flags, environment, and defaults

use crate::error::{CliError, CliResult};

/// Default base URL of the token service under test
pub const DEFAULT_ISSUER_URL: &str = "http://localhost:9000";

/// Default OAuth client id registered with the service
pub const DEFAULT_CLIENT_ID: &str = "test-client";

/// Default OAuth client secret registered with the service
pub const DEFAULT_CLIENT_SECRET: &str = "test-secret";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved harness configuration.
///
/// Every value resolves flag first, then the matching `GAUNTLET_*`
/// environment variable, then the default. There is no config file:
/// a harness run should be fully described by its invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the token service, without a trailing slash.
    pub issuer_url: String,
    /// OAuth client id for the token endpoint.
    pub client_id: String,
    /// OAuth client secret for the token endpoint.
    pub client_secret: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Require each attack to trip its designated defense.
    pub strict: bool,
}

impl Config {
    /// Resolve configuration from CLI flags and the environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` for empty credentials, a non-http(s)
    /// issuer URL, a zero timeout, or an unparsable
    /// `GAUNTLET_TIMEOUT_SECS`. These are the only fatal errors the
    /// harness has; everything later degrades to skipped scenarios.
    pub fn from_args_and_env(
        issuer_url: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
        timeout_secs: Option<u64>,
        strict: bool,
    ) -> CliResult<Self> {
        let issuer_url = issuer_url
            .or_else(|| env_var("GAUNTLET_ISSUER_URL"))
            .unwrap_or_else(|| DEFAULT_ISSUER_URL.to_string());

        let client_id = client_id
            .or_else(|| env_var("GAUNTLET_CLIENT_ID"))
            .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string());

        let client_secret = client_secret
            .or_else(|| env_var("GAUNTLET_CLIENT_SECRET"))
            .unwrap_or_else(|| DEFAULT_CLIENT_SECRET.to_string());

        let timeout_secs = match timeout_secs {
            Some(secs) => secs,
            None => match env_var("GAUNTLET_TIMEOUT_SECS") {
                Some(raw) => raw.parse().map_err(|_| {
                    CliError::Config(format!("GAUNTLET_TIMEOUT_SECS is not a number: {raw}"))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        let config = Self {
            issuer_url: issuer_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            timeout_secs,
            strict,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if !self.issuer_url.starts_with("http://") && !self.issuer_url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "issuer URL must start with http:// or https://, got \"{}\"",
                self.issuer_url
            )));
        }
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(CliError::Config(
                "client credentials must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(CliError::Config(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Session-creation endpoint on the mischief admin surface
    pub fn sessions_url(&self) -> String {
        format!("{}/admin/sessions", self.issuer_url)
    }

    /// OAuth token endpoint
    pub fn token_url(&self) -> String {
        format!("{}/token", self.issuer_url)
    }

    /// Issuer value accepted tokens must claim. The service issues
    /// under its own base URL.
    pub fn trusted_issuer(&self) -> &str {
        &self.issuer_url
    }
}

/// Read an environment variable, treating empty values as unset
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
