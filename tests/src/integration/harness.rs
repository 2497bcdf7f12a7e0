//! Message-acceptance harness.
//!
//! Stands in for the hub's acceptance pipeline: look up the source chain's
//! available rule, then hand the proof to that rule's validator together
//! with the chain's registered signer certificate.

use ih_01_rule_governance::{
    InMemoryObjectStore, RuleError, RuleGovernanceApi, RuleManagerService,
};
use ih_02_proof_verification::{
    EcdsaRuleValidator, RuleValidator, SignedEnvelopeExtractor, ValidatorError,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Once;
use thiserror::Error;
use tracing::debug;

static LOGGING: Once = Once::new();

/// Install a test subscriber once per process. Honors `IH_LOG_LEVEL`.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = ih_telemetry::TelemetryConfig {
            console_output: false,
            ..ih_telemetry::TelemetryConfig::from_env()
        };
        // Another harness may already own the global subscriber
        let _ = ih_telemetry::init_logging(&config);
    });
}

/// Why a message was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AcceptanceError {
    #[error("rule lookup failed: {0}")]
    Rule(#[from] RuleError),

    #[error("proof rejected: {0}")]
    Proof(#[from] ValidatorError),
}

/// Governance plus verification for a set of source chains.
pub struct AcceptancePipeline<A: RuleGovernanceApi, V: RuleValidator> {
    rules: A,
    validator: V,
    signers: RwLock<HashMap<String, String>>,
}

/// Pipeline over the in-memory store and the envelope validator.
pub type InMemoryPipeline = AcceptancePipeline<
    RuleManagerService<InMemoryObjectStore>,
    EcdsaRuleValidator<SignedEnvelopeExtractor>,
>;

impl InMemoryPipeline {
    pub fn in_memory() -> Self {
        init_test_logging();
        Self::new(
            RuleManagerService::new(InMemoryObjectStore::new()),
            EcdsaRuleValidator::new(SignedEnvelopeExtractor),
        )
    }
}

impl<A: RuleGovernanceApi, V: RuleValidator> AcceptancePipeline<A, V> {
    pub fn new(rules: A, validator: V) -> Self {
        Self {
            rules,
            validator,
            signers: RwLock::new(HashMap::new()),
        }
    }

    pub fn rules(&self) -> &A {
        &self.rules
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Record the signer certificate for `chain_id`.
    pub fn register_signer(&self, chain_id: &str, cert_pem: &str) {
        self.signers
            .write()
            .insert(chain_id.to_string(), cert_pem.to_string());
    }

    /// Check an inbound message from `chain_id`.
    ///
    /// `Ok(false)` rejects the message but leaves the rule in place.
    pub fn accept(
        &self,
        chain_id: &str,
        proof: &[u8],
        payload: &[u8],
    ) -> Result<bool, AcceptanceError> {
        let rule = self.rules.get_available_rule_address(chain_id)?;
        let pem = self.signers.read().get(chain_id).cloned().unwrap_or_default();

        let valid = self
            .validator
            .verify(&rule, chain_id, proof, payload, &pem)?;

        debug!(chain_id, rule = %rule, valid, "Inbound message checked");
        Ok(valid)
    }
}
