//! # Inbound Ports
//!
//! The verification rule exposed to the hub.

use crate::domain::errors::ValidatorError;

/// A rule that decides whether a cross-chain message proof is acceptable.
///
/// `Ok(false)` means the proof is well-formed but its signature does not
/// verify. Every other failure is an `Err`.
pub trait RuleValidator: Send + Sync {
    /// Verify `proof` for `payload` against the signer certificate in
    /// `validators`.
    ///
    /// `from` keys the signer-key cache: once a key is cached for `from`,
    /// later calls reuse it and ignore `validators`.
    fn verify(
        &self,
        address: &str,
        from: &str,
        proof: &[u8],
        payload: &[u8],
        validators: &str,
    ) -> Result<bool, ValidatorError>;
}
