//! # IH-02 Proof Verification
//!
//! ECDSA verification rule for cross-chain message proofs.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A source chain's rule carries the PEM X.509 certificate of the chain's
//! signer. Given a proof, the payload it should cover and that certificate,
//! the validator checks the first signature of the proof's signature set.
//!
//! ## Module Structure
//!
//! ```text
//! ih-02-proof-verification/
//! ├── domain/          # SignedData, DER signature decoding, SignerKey, errors
//! ├── ports/           # RuleValidator, ProofExtractor, ProofArtifact
//! ├── adapters/        # SignedEnvelopeExtractor
//! └── service.rs       # EcdsaRuleValidator
//! ```
//!
//! ## Outcomes
//!
//! - `Ok(true)`: the signature verifies
//! - `Ok(false)`: well-formed, but does not verify
//! - `Err(_)`: pre-check, certificate or signature decoding failed

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-exports
pub use adapters::{SignedEnvelope, SignedEnvelopeExtractor};
pub use domain::{
    unmarshal_ecdsa_signature, EcdsaSignatureComponents, SignedData, SignerKey, ValidatorConfig,
    ValidatorError, DEFAULT_CONTEXT_LABEL,
};
pub use ports::{ProofArtifact, ProofExtractor, RuleValidator};
pub use service::EcdsaRuleValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
