//! HTTP clients for the mischief token service

mod client;
mod sessions;
mod token;

pub use client::build_client;
pub use sessions::create_session;
pub use token::{request_token, SESSION_HEADER};
