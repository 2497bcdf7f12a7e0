//! # Domain Entities
//!
//! Rule records, registration results and governance configuration.

use super::errors::RuleError;
use super::state_machine::RuleStateMachine;
use super::value_objects::{GovernanceEvent, GovernanceStatus};
use serde::{Deserialize, Serialize};
use std::env;

/// Default key prefix for a chain's rule collection.
pub const RULE_KEY_PREFIX: &str = "rule-";

/// A verification rule registered for a remote chain.
///
/// `status` has no setter: it only moves through [`Rule::fire`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    address: String,
    chain_id: String,
    master: bool,
    status: GovernanceStatus,
}

impl Rule {
    /// Create a freshly registered rule: bindable, not master.
    pub fn new(chain_id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain_id: chain_id.into(),
            master: false,
            status: GovernanceStatus::Bindable,
        }
    }

    /// Address of the verification logic.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Chain this rule verifies proofs for.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Whether the rule is flagged as the chain's master rule.
    pub fn is_master(&self) -> bool {
        self.master
    }

    /// Current governance status.
    pub fn status(&self) -> GovernanceStatus {
        self.status
    }

    /// Whether the rule may currently verify proofs.
    pub fn is_available(&self) -> bool {
        self.status == GovernanceStatus::Available
    }

    /// State machine derived from the current status.
    pub fn state_machine(&self) -> RuleStateMachine {
        RuleStateMachine::derive(self.status)
    }

    pub(crate) fn set_master(&mut self, master: bool) {
        self.master = master;
    }

    /// Apply a governance event. The status is unchanged on failure.
    pub fn fire(&mut self, event: GovernanceEvent) -> Result<GovernanceStatus, RuleError> {
        let mut machine = self.state_machine();
        let next = machine.fire(event)?;
        self.status = next;
        Ok(next)
    }
}

/// Result of [`register`](crate::RuleGovernanceApi::register).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResult {
    /// The rule address.
    pub id: String,
    /// True if the address was already registered for the chain.
    pub is_registered: bool,
}

/// Rule governance configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleGovernanceConfig {
    /// Prefix of the store key holding a chain's rule collection.
    pub key_prefix: String,
    /// Clear the master flag on every other rule of the chain when one is promoted.
    pub exclusive_master: bool,
}

impl Default for RuleGovernanceConfig {
    fn default() -> Self {
        Self {
            key_prefix: RULE_KEY_PREFIX.to_string(),
            exclusive_master: false,
        }
    }
}

impl RuleGovernanceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `IH_RULE_KEY_PREFIX`: Store key prefix (default: `rule-`)
    /// - `IH_EXCLUSIVE_MASTER`: Enforce a single master per chain (default: false)
    pub fn from_env() -> Self {
        Self {
            key_prefix: env::var("IH_RULE_KEY_PREFIX")
                .unwrap_or_else(|_| RULE_KEY_PREFIX.to_string()),
            exclusive_master: env::var("IH_EXCLUSIVE_MASTER")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Store key of a chain's rule collection.
    pub fn rule_key(&self, chain_id: &str) -> String {
        format!("{}{}", self.key_prefix, chain_id)
    }
}
