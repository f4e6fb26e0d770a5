//! Data models for the gauntlet CLI

mod report;
mod session;
mod token;

pub use report::{ScenarioReport, ScenarioResult, ScenarioStatus};
pub use session::{SessionRequest, SessionResponse, SESSION_MODE_EXPLICIT};
pub use token::TokenResponse;
