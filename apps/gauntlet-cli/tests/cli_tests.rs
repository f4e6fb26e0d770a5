//! Integration tests for the gauntlet binary
//!
//! Tests cover:
//! - Help documentation
//! - Configuration errors and their exit code
//! - Unreachable-service behavior and the skip exit code
//!
//! These run the real binary against nothing; the wiremock-backed
//! behavior lives in harness_tests.rs.

use std::process::Command;

/// Port 9 (discard) refuses connections on any sane host.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Test that help shows the harness flags
#[test]
fn test_help_lists_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_gauntlet"))
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--issuer-url"));
    assert!(stdout.contains("--client-id"));
    assert!(stdout.contains("--client-secret"));
    assert!(stdout.contains("--strict"));
    assert!(stdout.contains("--json"));
}

/// Test that unusable credentials are fatal before any scenario runs
#[test]
fn test_empty_client_id_is_a_config_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_gauntlet"))
        .args(["--issuer-url", UNREACHABLE_URL, "--client-id", ""])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
    assert!(stderr.contains("credentials"));
}

/// Test that a bad issuer URL is fatal before any scenario runs
#[test]
fn test_non_http_issuer_is_a_config_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_gauntlet"))
        .args(["--issuer-url", "ldap://localhost"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

/// Test that an unreachable service skips every scenario and the run
/// exits as not-passed rather than crashing
#[test]
fn test_unreachable_service_skips_all_scenarios() {
    let output = Command::new(env!("CARGO_BIN_EXE_gauntlet"))
        .args([
            "--issuer-url",
            UNREACHABLE_URL,
            "--timeout-secs",
            "2",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a JSON report");

    assert_eq!(report["skipped"], 5);
    assert_eq!(report["passed"], 0);
    let statuses: Vec<&str> = report["scenarios"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["skip"; 5]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("5 of 5 scenarios did not pass"));
}
