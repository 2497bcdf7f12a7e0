//! # ECDSA Rule Validator
//!
//! Application service implementing [`RuleValidator`].
//!
//! ## Flow
//!
//! 1. Pre-check the proof through the [`ProofExtractor`]
//! 2. Take the first entry of the signature set
//! 3. Resolve the signer key for `from` (cached after the first parse)
//! 4. Decode the DER signature
//! 5. Verify it over SHA-256 of the entry's signed data

use crate::domain::entities::ValidatorConfig;
use crate::domain::errors::ValidatorError;
use crate::domain::signature::unmarshal_ecdsa_signature;
use crate::domain::signer_key::SignerKey;
use crate::ports::inbound::RuleValidator;
use crate::ports::outbound::{ProofArtifact, ProofExtractor};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Verifies proofs signed by a chain's registered X.509 signer.
///
/// Signer keys are cached per `from` for the lifetime of the instance and
/// never evicted.
pub struct EcdsaRuleValidator<E: ProofExtractor> {
    extractor: E,
    config: ValidatorConfig,
    signer_keys: Mutex<HashMap<String, SignerKey>>,
}

impl<E: ProofExtractor> EcdsaRuleValidator<E> {
    /// Create a validator with the default configuration.
    pub fn new(extractor: E) -> Self {
        Self::with_config(extractor, ValidatorConfig::default())
    }

    /// Create a validator with an explicit configuration.
    pub fn with_config(extractor: E, config: ValidatorConfig) -> Self {
        Self {
            extractor,
            config,
            signer_keys: Mutex::new(HashMap::new()),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Number of cached signer keys.
    pub fn cached_signers(&self) -> usize {
        self.signer_keys.lock().len()
    }

    fn resolve_signer(&self, from: &str, validators: &str) -> Result<SignerKey, ValidatorError> {
        if let Some(key) = self.signer_keys.lock().get(from) {
            return Ok(key.clone());
        }

        // Parsed outside the lock; racing misses for one `from` both insert.
        let key = SignerKey::from_certificate_pem(validators)?;
        debug!(from, curve = key.curve(), "Signer key cached");
        self.signer_keys.lock().insert(from.to_string(), key.clone());
        Ok(key)
    }
}

impl<E: ProofExtractor> RuleValidator for EcdsaRuleValidator<E> {
    fn verify(
        &self,
        address: &str,
        from: &str,
        proof: &[u8],
        payload: &[u8],
        validators: &str,
    ) -> Result<bool, ValidatorError> {
        let artifact = self
            .extractor
            .pre_check(proof, payload, &self.config.context_label)?;

        let entry = artifact
            .signature_set()
            .first()
            .ok_or(ValidatorError::EmptySignatureSet)?;

        let key = self.resolve_signer(from, validators)?;

        let sig = unmarshal_ecdsa_signature(&entry.signature).inspect_err(|e| {
            warn!(address, from, error = %e, "Malformed proof signature");
        })?;

        let digest: [u8; 32] = Sha256::digest(&entry.data).into();
        let valid = key.verify_prehash(&digest, &sig);

        debug!(address, from, valid, "Proof signature checked");
        Ok(valid)
    }
}
