//! # Signed Envelope Extractor
//!
//! Proofs carried as a JSON envelope:
//!
//! ```json
//! {"context": "broker", "payload": "<hex>", "signatures": [{"data": "<hex>", "signature": "<hex>"}]}
//! ```
//!
//! The envelope must name the requested context and embed exactly the
//! payload being delivered.

use crate::domain::entities::SignedData;
use crate::domain::errors::ValidatorError;
use crate::ports::outbound::{ProofArtifact, ProofExtractor};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decoded proof envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    pub context: String,
    #[serde(with = "hex")]
    pub payload: Vec<u8>,
    pub signatures: Vec<SignedData>,
}

impl ProofArtifact for SignedEnvelope {
    fn signature_set(&self) -> &[SignedData] {
        &self.signatures
    }
}

/// Extractor for [`SignedEnvelope`] proofs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedEnvelopeExtractor;

impl ProofExtractor for SignedEnvelopeExtractor {
    type Artifact = SignedEnvelope;

    fn pre_check(
        &self,
        proof: &[u8],
        payload: &[u8],
        context: &str,
    ) -> Result<SignedEnvelope, ValidatorError> {
        let envelope: SignedEnvelope = serde_json::from_slice(proof)
            .map_err(|e| ValidatorError::PreCheck(format!("invalid proof envelope: {e}")))?;

        if envelope.context != context {
            return Err(ValidatorError::PreCheck(format!(
                "context mismatch: expected {context}, got {}",
                envelope.context
            )));
        }

        if envelope.payload != payload {
            return Err(ValidatorError::PreCheck(
                "proof does not cover the supplied payload".to_string(),
            ));
        }

        debug!(
            context,
            signatures = envelope.signatures.len(),
            "Proof envelope accepted"
        );
        Ok(envelope)
    }
}
