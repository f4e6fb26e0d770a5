//! Harness orchestration: run the scenario catalog and report

use crate::api;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::models::{ScenarioReport, ScenarioStatus};
use crate::output;
use crate::scenarios::{self, SCENARIOS};
use tracing::info;
use uuid::Uuid;

const RESET: &str = "\x1b[0m";

/// Short id shared by every session one run creates, so sessions from
/// the same run are easy to spot in service logs.
fn short_run_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// Run every scenario sequentially against the configured issuer.
///
/// Scenarios never abort the run; a scenario that cannot execute is
/// recorded as skipped and the next one still runs. The only error
/// this returns is a client that cannot be built at all.
pub async fn run_all_scenarios(config: &Config) -> CliResult<ScenarioReport> {
    let client = api::build_client(config)?;
    let run_id = short_run_id();
    info!(run_id = %run_id, issuer = %config.issuer_url, "starting run");

    let mut results = Vec::with_capacity(SCENARIOS.len());
    for scenario in SCENARIOS {
        results.push(scenarios::run_scenario(&client, config, &run_id, scenario).await);
    }

    Ok(ScenarioReport::new(run_id, results))
}

/// Print human-readable output
fn print_report(report: &ScenarioReport) {
    let use_color = output::use_color();

    println!();
    println!("gauntlet run {}", report.run_id);
    println!("═══════════════════════════════════════════════════════");
    println!();

    for result in &report.scenarios {
        let status_display = if use_color {
            format!(
                "{}{} {}{}",
                result.status.color(),
                result.status.symbol(),
                result.status.display(),
                RESET
            )
        } else {
            format!("{} {}", result.status.symbol(), result.status.display())
        };

        // Align columns: display_name (26 chars), status (10 chars), message
        println!(
            "  {:<26} {:>10}    {}",
            result.display_name, status_display, result.message
        );

        if let Some(ref detail) = result.detail {
            if use_color {
                println!("                                    └─ \x1b[90m{detail}{RESET}");
            } else {
                println!("                                    └─ {detail}");
            }
        }
    }

    println!();
    println!("═══════════════════════════════════════════════════════");

    let (overall, summary) = if report.all_passed() {
        (ScenarioStatus::Pass, "All scenarios passed".to_string())
    } else {
        (
            ScenarioStatus::Fail,
            format!("{} scenario(s) did not pass", report.not_passed()),
        )
    };
    let overall_display = if use_color {
        format!(
            "{}{} {}{}",
            overall.color(),
            overall.symbol(),
            summary,
            RESET
        )
    } else {
        format!("{} {}", overall.symbol(), summary)
    };

    println!("  Overall: {overall_display}");
    println!();
    println!(
        "  Passed: {}/{}  Failed: {}  Skipped: {}",
        report.passed,
        report.total(),
        report.failed,
        report.skipped
    );
    println!("  Harness Version: {}", report.harness_version);
    println!("  Completed at: {}", report.timestamp);
    println!();
}

/// Execute a full harness run
pub async fn execute(config: &Config, json: bool) -> CliResult<()> {
    if !json {
        output::print_info(&format!(
            "Running {} scenarios against {}",
            SCENARIOS.len(),
            config.issuer_url
        ));
    }

    let report = run_all_scenarios(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        if report.skipped > 0 {
            output::print_warning(&format!(
                "{} scenario(s) could not execute; is {} reachable?",
                report.skipped, config.issuer_url
            ));
        }
    }

    // Scripting exit codes: anything short of a clean sweep is an error
    if !report.all_passed() {
        return Err(CliError::ScenariosFailed {
            failed: report.not_passed(),
            total: report.total(),
        });
    }

    Ok(())
}
