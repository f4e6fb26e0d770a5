//! Shared helpers for harness integration tests

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use gauntlet_cli::config::Config;
use serde_json::json;

/// Build a config pointing at a mock server, with flags only so the
/// environment never leaks into tests.
pub fn test_config(issuer_url: &str) -> Config {
    Config::from_args_and_env(
        Some(issuer_url.to_string()),
        Some("test-client".to_string()),
        Some("test-secret".to_string()),
        Some(5),
        false,
    )
    .unwrap()
}

/// Mint a compact JWT from raw header and claims values. The signature
/// segment is a placeholder; nothing in the harness verifies it.
pub fn mint_token(header: &serde_json::Value, claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(header.to_string());
    let claims = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{claims}.c2lnbmF0dXJl")
}

/// A token every validation check accepts for the given issuer.
pub fn honest_token(issuer: &str) -> String {
    let exp = chrono::Utc::now().timestamp() as u64 + 3600;
    mint_token(
        &json!({"alg": "RS256", "typ": "JWT", "kid": "test-key"}),
        &json!({"iss": issuer, "sub": "test-client", "exp": exp}),
    )
}
