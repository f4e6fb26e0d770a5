//! Scenario report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    /// The validator did what the scenario expected
    Pass,
    /// The validator accepted a hostile token, or refused an honest one
    Fail,
    /// The scenario could not execute (session or token unavailable)
    Skip,
}

impl ScenarioStatus {
    /// Status glyph for report lines
    pub fn symbol(&self) -> &'static str {
        match self {
            ScenarioStatus::Pass => "✓",
            ScenarioStatus::Fail => "✗",
            ScenarioStatus::Skip => "○",
        }
    }

    /// ANSI color prefix for report lines
    pub fn color(&self) -> &'static str {
        match self {
            ScenarioStatus::Pass => "\x1b[32m",
            ScenarioStatus::Fail => "\x1b[31m",
            ScenarioStatus::Skip => "\x1b[90m",
        }
    }

    /// Uppercase label for report lines
    pub fn display(&self) -> &'static str {
        match self {
            ScenarioStatus::Pass => "PASS",
            ScenarioStatus::Fail => "FAIL",
            ScenarioStatus::Skip => "SKIP",
        }
    }
}

/// Result of one scenario run. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Stable scenario identifier
    pub name: String,

    /// Human-readable name for report lines
    pub display_name: String,

    pub status: ScenarioStatus,

    /// What happened, in operator terms
    pub message: String,

    /// Optional second line: near-miss rejections, skip causes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ScenarioResult {
    pub fn pass(name: &str, display_name: &str, message: &str) -> Self {
        Self::new(name, display_name, ScenarioStatus::Pass, message)
    }

    pub fn fail(name: &str, display_name: &str, message: &str) -> Self {
        Self::new(name, display_name, ScenarioStatus::Fail, message)
    }

    pub fn skip(name: &str, display_name: &str, message: &str) -> Self {
        Self::new(name, display_name, ScenarioStatus::Skip, message)
    }

    fn new(name: &str, display_name: &str, status: ScenarioStatus, message: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            status,
            message: message.to_string(),
            detail: None,
        }
    }

    /// Attach a second report line
    #[must_use]
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Aggregated report for one harness run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Short id shared by every session this run created
    pub run_id: String,

    /// Results in execution order, exactly one per scenario
    pub scenarios: Vec<ScenarioResult>,

    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,

    pub harness_version: String,
    pub timestamp: DateTime<Utc>,
}

impl ScenarioReport {
    pub fn new(run_id: String, scenarios: Vec<ScenarioResult>) -> Self {
        let count =
            |status| scenarios.iter().filter(|s| s.status == status).count();
        let passed = count(ScenarioStatus::Pass);
        let failed = count(ScenarioStatus::Fail);
        let skipped = count(ScenarioStatus::Skip);

        Self {
            run_id,
            scenarios,
            passed,
            failed,
            skipped,
            harness_version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn total(&self) -> usize {
        self.scenarios.len()
    }

    /// True when every scenario executed and passed
    pub fn all_passed(&self) -> bool {
        !self.scenarios.is_empty() && self.passed == self.total()
    }

    /// Scenarios that did not pass, whether failed or skipped
    pub fn not_passed(&self) -> usize {
        self.failed + self.skipped
    }
}
