//! Token acceptance checks for OIDC relying parties.
//!
//! This crate provides:
//! - Compact JWT decoding without signature verification
//! - Case-insensitive classification of the JOSE `alg` header
//! - An ordered validator that refuses known hostile token shapes
//!   (unsigned, HMAC key confusion, expired, wrong issuer)
//!
//! The validator deliberately stops short of cryptographic verification:
//! it proves the structural and claim-level defenses hold. Deployments
//! must pair it with signature verification against trusted keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use gauntlet_token::{validate_token, ValidationOutcome};
//!
//! match validate_token(token, "https://issuer.example.com") {
//!     ValidationOutcome::Accepted { alg } => println!("accepted ({alg})"),
//!     ValidationOutcome::Rejected { kind, detail } => println!("refused: {kind} ({detail})"),
//! }
//! ```

mod alg;
mod decode;
mod validator;

// Re-export public API
pub use alg::{classify_algorithm, AlgorithmClass};
pub use decode::{decode_claims, decode_header, DecodeError, RegisteredClaims, TokenHeader};
pub use validator::{validate_token, validate_token_at, RejectionKind, ValidationOutcome};
