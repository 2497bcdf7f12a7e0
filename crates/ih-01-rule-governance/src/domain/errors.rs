//! # Domain Errors
//!
//! Error types for rule governance.
//!
//! Categories: not-found, precondition-violated, illegal-transition,
//! serialization, and backend store failures. None are retried internally.

use super::value_objects::{GovernanceEvent, GovernanceStatus};
use thiserror::Error;

/// Failure reported by the object store backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not complete the operation.
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Errors that can occur during rule governance operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleError {
    /// The chain has no rule collection.
    #[error("this appchain's rules do not exist: {chain_id}")]
    ChainNotFound {
        /// Chain that was queried.
        chain_id: String,
    },

    /// The address is absent from the chain's collection.
    #[error("the rule does not exist: {address}")]
    RuleNotFound {
        /// Chain that was queried.
        chain_id: String,
        /// Rule address that was queried.
        address: String,
    },

    /// Bind requested for a rule that is not bindable.
    #[error("the rule is in an unbindable state: {status}")]
    NotBindable {
        /// Current status of the target rule.
        status: GovernanceStatus,
    },

    /// Another rule is already bound and the bind was not forced.
    #[error("there is already a bound (available) validation rule {address}, unbind it before binding other validation rules")]
    AvailableRuleExists {
        /// The rule currently available.
        address: String,
    },

    /// The master rule is mid-replacement.
    #[error("the master rule is changing ({status}) now, wait until the proposal closes before binding a new rule")]
    MasterChanging {
        /// Current status of the master rule.
        status: GovernanceStatus,
    },

    /// The event has no transition from the current status.
    #[error("change status error: event {event} inappropriate in current state {status}")]
    IllegalTransition {
        /// Event that was fired.
        event: GovernanceEvent,
        /// Status the rule was in.
        status: GovernanceStatus,
    },

    /// The event name is not a governance event.
    #[error("change status error: event {0} does not exist")]
    UnknownEvent(String),

    /// No rule of the chain is available.
    #[error("this appchain's available rule does not exist: {chain_id}")]
    NoAvailableRule {
        /// Chain that was queried.
        chain_id: String,
    },

    /// No rule of the chain is flagged master.
    #[error("this appchain's master rule does not exist: {chain_id}")]
    NoMasterRule {
        /// Chain that was queried.
        chain_id: String,
    },

    /// The rule exists but is not available.
    #[error("the rule status is {status}")]
    NotAvailable {
        /// Current status of the rule.
        status: GovernanceStatus,
    },

    /// JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RuleError {
    /// Whether this is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ChainNotFound { .. }
                | Self::RuleNotFound { .. }
                | Self::NoAvailableRule { .. }
                | Self::NoMasterRule { .. }
        )
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
