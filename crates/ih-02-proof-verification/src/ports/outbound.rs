//! # Outbound Ports
//!
//! Proof extraction. The proof format belongs to the source chain, so the
//! validator only sees the signature set an extractor hands back.

use crate::domain::entities::SignedData;
use crate::domain::errors::ValidatorError;

/// A checked proof exposing its signature set.
pub trait ProofArtifact {
    fn signature_set(&self) -> &[SignedData];
}

/// Turns raw proof bytes into a checked artifact.
pub trait ProofExtractor: Send + Sync {
    type Artifact: ProofArtifact;

    /// Check `proof` against `payload` under `context` and extract it.
    fn pre_check(
        &self,
        proof: &[u8],
        payload: &[u8],
        context: &str,
    ) -> Result<Self::Artifact, ValidatorError>;
}
