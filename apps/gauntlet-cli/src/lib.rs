//! gauntlet CLI library
//!
//! Exposes the harness internals for integration testing. The binary
//! entry point is in main.rs.

pub mod api;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod models;
pub mod output;
pub mod scenarios;
