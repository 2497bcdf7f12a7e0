//! # Domain Entities
//!
//! Signature-set entries and validator configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Default context label passed to proof extraction.
pub const DEFAULT_CONTEXT_LABEL: &str = "broker";

/// One entry of a proof's signature set.
///
/// `signature` signs `data`, which is a slice of the proof, not the
/// message payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedData {
    /// Bytes the signer signed.
    #[serde(with = "hex")]
    pub data: Vec<u8>,
    /// DER-encoded ECDSA signature.
    #[serde(with = "hex")]
    pub signature: Vec<u8>,
}

impl SignedData {
    pub fn new(data: impl Into<Vec<u8>>, signature: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            signature: signature.into(),
        }
    }
}

/// Validator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Context label proofs are extracted under.
    pub context_label: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            context_label: DEFAULT_CONTEXT_LABEL.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create configuration from environment variables.
    ///
    /// - `IH_PROOF_CONTEXT`: Context label (default: broker)
    pub fn from_env() -> Self {
        Self {
            context_label: env::var("IH_PROOF_CONTEXT")
                .unwrap_or_else(|_| DEFAULT_CONTEXT_LABEL.to_string()),
        }
    }
}
