//! Attack scenario catalog and per-scenario execution

use crate::api;
use crate::config::Config;
use crate::models::ScenarioResult;
use gauntlet_token::{validate_token, RejectionKind, ValidationOutcome};
use reqwest::Client;
use tracing::{debug, warn};

/// What the validator must do with the token a scenario obtains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The token must clear every check
    Accept,
    /// The token must be refused; `preferred` names the defense that
    /// should fire
    Reject { preferred: RejectionKind },
}

/// One attack category driven against the token service
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Stable identifier, also used in session names
    pub name: &'static str,

    /// Human-readable name for report lines
    pub display_name: &'static str,

    /// Attack tags for the mischief session; `None` requests an honest
    /// token with no session at all
    pub mischief: Option<&'static [&'static str]>,

    pub expectation: Expectation,
}

/// The fixed scenario set, in execution order. The baseline runs last
/// so attack sessions cannot shadow it.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "alg-none",
        display_name: "Unsigned token (alg=none)",
        mischief: Some(&["alg-none"]),
        expectation: Expectation::Reject {
            preferred: RejectionKind::UnsignedToken,
        },
    },
    Scenario {
        name: "key-confusion",
        display_name: "Key confusion (HS256)",
        mischief: Some(&["key-confusion"]),
        expectation: Expectation::Reject {
            preferred: RejectionKind::SymmetricAlgorithm,
        },
    },
    Scenario {
        name: "temporal-tampering",
        display_name: "Expired token",
        mischief: Some(&["temporal-tampering"]),
        expectation: Expectation::Reject {
            preferred: RejectionKind::Expired,
        },
    },
    Scenario {
        name: "issuer-confusion",
        display_name: "Issuer confusion",
        mischief: Some(&["issuer-confusion"]),
        expectation: Expectation::Reject {
            preferred: RejectionKind::IssuerMismatch,
        },
    },
    Scenario {
        name: "baseline",
        display_name: "Well-formed token",
        mischief: None,
        expectation: Expectation::Accept,
    },
];

/// Run one scenario end to end: session, token, validation, verdict.
///
/// A service failure while obtaining the session or the token produces
/// a Skip result: the scenario counts against the run without claiming
/// anything about the validator. Nothing here aborts the run.
pub async fn run_scenario(
    client: &Client,
    config: &Config,
    run_id: &str,
    scenario: &Scenario,
) -> ScenarioResult {
    let session_id = match scenario.mischief {
        Some(tags) => {
            let session_name = format!("gauntlet-{}-{}", scenario.name, run_id);
            match api::create_session(client, config, &session_name, tags).await {
                Ok(session) => Some(session.session_id),
                Err(e) => {
                    warn!(scenario = scenario.name, error = %e, "session creation failed");
                    return ScenarioResult::skip(
                        scenario.name,
                        scenario.display_name,
                        "could not create mischief session",
                    )
                    .with_detail(&e.to_string());
                }
            }
        }
        None => None,
    };

    let token = match api::request_token(client, config, session_id.as_deref()).await {
        Ok(token) => token,
        Err(e) => {
            warn!(scenario = scenario.name, error = %e, "token request failed");
            return ScenarioResult::skip(
                scenario.name,
                scenario.display_name,
                "could not obtain token",
            )
            .with_detail(&e.to_string());
        }
    };

    let outcome = validate_token(&token, config.trusted_issuer());
    debug!(scenario = scenario.name, ?outcome, "token validated");

    verdict(scenario, &outcome, config.strict)
}

/// Compare a validation outcome against the scenario's expectation.
///
/// Lenient matching (the default) treats any rejection of an attack
/// token as a pass and reports near misses distinctly. Strict matching
/// requires the preferred defense to be the one that fired, so an
/// earlier check cannot mask a broken later one.
fn verdict(scenario: &Scenario, outcome: &ValidationOutcome, strict: bool) -> ScenarioResult {
    match (scenario.expectation, outcome) {
        (Expectation::Accept, ValidationOutcome::Accepted { alg }) => ScenarioResult::pass(
            scenario.name,
            scenario.display_name,
            &format!("accepted (alg {alg})"),
        ),
        (Expectation::Accept, ValidationOutcome::Rejected { kind, detail }) => {
            ScenarioResult::fail(
                scenario.name,
                scenario.display_name,
                &format!("honest token refused: {kind}"),
            )
            .with_detail(detail)
        }
        (Expectation::Reject { preferred }, ValidationOutcome::Rejected { kind, detail }) => {
            if *kind == preferred {
                ScenarioResult::pass(
                    scenario.name,
                    scenario.display_name,
                    &format!("rejected: {kind}"),
                )
            } else if strict {
                ScenarioResult::fail(
                    scenario.name,
                    scenario.display_name,
                    &format!("rejected as {kind}, required {preferred}"),
                )
                .with_detail(detail)
            } else {
                ScenarioResult::pass(
                    scenario.name,
                    scenario.display_name,
                    &format!("rejected by a different defense: {kind}"),
                )
                .with_detail(&format!("expected {preferred}; use --strict to require it"))
            }
        }
        (Expectation::Reject { .. }, ValidationOutcome::Accepted { alg }) => ScenarioResult::fail(
            scenario.name,
            scenario.display_name,
            &format!("hostile token accepted (alg {alg})"),
        ),
    }
}
