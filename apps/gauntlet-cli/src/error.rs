//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the harness
/// - 0: All scenarios passed
/// - 1: One or more scenarios failed or could not execute
/// - 2: Configuration or credential error
/// - 3: Network error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} scenarios did not pass")]
    ScenariosFailed { failed: usize, total: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check that the token service is running\n  - Verify the issuer URL is correct")]
    ConnectionFailed(String),

    #[error("Service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ScenariosFailed { .. } => 1,
            CliError::Config(_) => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Api { .. } | CliError::InvalidResponse(_) => 3,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::ScenariosFailed { .. } => {
                Some("Run with --verbose for per-scenario diagnostics.")
            }
            CliError::Config(_) => {
                Some("Pass --issuer-url/--client-id/--client-secret or set the GAUNTLET_* environment variables.")
            }
            CliError::ConnectionFailed(_) => {
                Some("Check that the token service is reachable and try again.")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_scenarios_failed() {
        let error = CliError::ScenariosFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        assert_eq!(CliError::Config("test".to_string()).exit_code(), 2);
    }

    #[test]
    fn test_exit_code_network_error() {
        assert_eq!(CliError::Network("test".to_string()).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_connection_failed() {
        assert_eq!(
            CliError::ConnectionFailed("test".to_string()).exit_code(),
            3
        );
    }

    #[test]
    fn test_exit_code_api_error() {
        let error = CliError::Api {
            status: 500,
            message: "test".to_string(),
        };
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_scenarios_failed_display() {
        let error = CliError::ScenariosFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(error.to_string(), "2 of 5 scenarios did not pass");
    }

    #[test]
    fn test_connect_error_has_suggestion() {
        let error = CliError::ConnectionFailed("refused".to_string());
        assert!(error.suggestion().is_some());
    }
}
