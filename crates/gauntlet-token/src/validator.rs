//! Ordered acceptance checks for bearer tokens.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. header decodes
//! 2. `alg` is not `none`
//! 3. `alg` is not HMAC family
//! 4. claims decode
//! 5. `exp`, when present, is not in the past
//! 6. `iss`, when present, matches the trusted issuer
//!
//! Signatures are never verified here. The outcome is a plain value,
//! not an error: a rejected token is expected data for a validator.

use crate::alg::{classify_algorithm, AlgorithmClass};
use crate::decode::{decode_claims, decode_header};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a token was refused. Anything not covered by a specific kind
/// collapses into [`RejectionKind::Malformed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Not decodable as a compact JWT.
    Malformed,
    /// `alg=none`: the token carries no signature at all.
    UnsignedToken,
    /// HMAC family algorithm presented by an asymmetric issuer.
    SymmetricAlgorithm,
    /// `exp` is in the past.
    Expired,
    /// `iss` differs from the trusted issuer.
    IssuerMismatch,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionKind::Malformed => "malformed token",
            RejectionKind::UnsignedToken => "unsigned token",
            RejectionKind::SymmetricAlgorithm => "symmetric algorithm",
            RejectionKind::Expired => "expired token",
            RejectionKind::IssuerMismatch => "issuer mismatch",
        };
        f.write_str(label)
    }
}

/// Result of running the acceptance checks over a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Token cleared every check; `alg` is the algorithm it presented.
    Accepted { alg: String },
    /// Token failed a check. `detail` is operator-readable context.
    Rejected {
        kind: RejectionKind,
        detail: String,
    },
}

impl ValidationOutcome {
    fn rejected(kind: RejectionKind, detail: impl Into<String>) -> Self {
        ValidationOutcome::Rejected {
            kind,
            detail: detail.into(),
        }
    }

    /// True when the token cleared every check.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted { .. })
    }

    /// Rejection kind, if the token was refused.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectionKind> {
        match self {
            ValidationOutcome::Accepted { .. } => None,
            ValidationOutcome::Rejected { kind, .. } => Some(*kind),
        }
    }
}

/// Run the acceptance checks against the current clock.
///
/// See [`validate_token_at`] for the check order and semantics.
#[must_use]
pub fn validate_token(token: &str, trusted_issuer: &str) -> ValidationOutcome {
    validate_token_at(token, trusted_issuer, Utc::now())
}

/// Run the acceptance checks at a fixed instant.
///
/// The outcome is a pure function of the token bytes, `trusted_issuer`,
/// and `now`: the same inputs always produce the same outcome. `exp`
/// comparison is strict, with no leeway; a token expiring exactly at
/// `now` is still valid.
#[must_use]
pub fn validate_token_at(
    token: &str,
    trusted_issuer: &str,
    now: DateTime<Utc>,
) -> ValidationOutcome {
    let header = match decode_header(token) {
        Ok(header) => header,
        Err(e) => {
            return ValidationOutcome::rejected(
                RejectionKind::Malformed,
                format!("unparseable header: {e}"),
            );
        }
    };

    // Algorithm checks run before the claims are even decoded, so a
    // hostile algorithm is always named as such regardless of what the
    // rest of the token looks like.
    match classify_algorithm(&header.alg) {
        AlgorithmClass::None => {
            return ValidationOutcome::rejected(
                RejectionKind::UnsignedToken,
                format!("token presented alg \"{}\"", header.alg),
            );
        }
        AlgorithmClass::Hmac => {
            return ValidationOutcome::rejected(
                RejectionKind::SymmetricAlgorithm,
                format!("refusing HMAC alg \"{}\" from an asymmetric issuer", header.alg),
            );
        }
        AlgorithmClass::Other => {}
    }

    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            return ValidationOutcome::rejected(
                RejectionKind::Malformed,
                format!("unparseable claims: {e}"),
            );
        }
    };

    // A clock before the epoch counts as 0.
    let now_secs = u64::try_from(now.timestamp()).unwrap_or(0);
    if let Some(exp) = claims.exp {
        if exp < now_secs {
            return ValidationOutcome::rejected(
                RejectionKind::Expired,
                format!("expired {} seconds ago", now_secs - exp),
            );
        }
    }

    if let Some(iss) = claims.iss.as_deref() {
        if iss != trusted_issuer {
            return ValidationOutcome::rejected(
                RejectionKind::IssuerMismatch,
                format!("token issued by \"{iss}\", trusted issuer is \"{trusted_issuer}\""),
            );
        }
    }

    ValidationOutcome::Accepted { alg: header.alg }
}
