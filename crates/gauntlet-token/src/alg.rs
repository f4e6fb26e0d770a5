//! Classification of the JOSE `alg` header value.
//!
//! The validator only needs to know which family an algorithm belongs to;
//! it never dispatches on individual algorithms beyond that.

/// HMAC family algorithms. Tokens presenting any of these are refused
/// outright: an issuer that signs with an asymmetric key must never be
/// trusted through a shared-secret path (key confusion).
const HMAC_FAMILY: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Algorithm families the acceptance checks distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmClass {
    /// `none` in any casing: the token carries no signature at all.
    None,
    /// HMAC family (HS256/HS384/HS512) in any casing.
    Hmac,
    /// Everything else, including the asymmetric algorithms honest
    /// issuers use. Later checks decide what happens to these.
    Other,
}

/// Classify a raw `alg` header value.
///
/// Comparison is ASCII case-insensitive on the raw string: `none`,
/// `None`, and `nOnE` all classify as [`AlgorithmClass::None`]. The
/// value is never parsed into an algorithm enum, so unknown or
/// malicious spellings cannot fail earlier than intended.
#[must_use]
pub fn classify_algorithm(alg: &str) -> AlgorithmClass {
    if alg.eq_ignore_ascii_case("none") {
        return AlgorithmClass::None;
    }
    if HMAC_FAMILY.iter().any(|h| alg.eq_ignore_ascii_case(h)) {
        return AlgorithmClass::Hmac;
    }
    AlgorithmClass::Other
}
