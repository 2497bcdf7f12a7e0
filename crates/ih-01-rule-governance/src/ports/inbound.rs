//! # Inbound Ports
//!
//! API the governance pipeline and the message-acceptance pipeline call.

use crate::domain::{GovernanceEvent, GovernanceStatus, RegisterResult, Rule, RuleError};

/// Rule governance API - inbound port.
///
/// Writes are read-modify-write on a chain's collection and are not atomic:
/// callers must serialize writes per `chain_id`.
pub trait RuleGovernanceApi: Send + Sync {
    // =========================================================================
    // Mutations
    // =========================================================================

    /// Register a rule for a chain. Idempotent.
    fn register(&self, chain_id: &str, address: &str) -> Result<RegisterResult, RuleError>;

    /// Check whether `address` may be bound to `chain_id`. Read-only.
    ///
    /// `force` is set when the bind replaces the master rule.
    fn bind_pre(&self, chain_id: &str, address: &str, force: bool) -> Result<(), RuleError>;

    /// Set or clear the master flag of a rule.
    fn set_master(&self, chain_id: &str, address: &str, master: bool) -> Result<(), RuleError>;

    /// Apply a governance event to a rule and return its new status.
    fn change_status(
        &self,
        chain_id: &str,
        address: &str,
        event: GovernanceEvent,
    ) -> Result<GovernanceStatus, RuleError>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of available rules. Zero for an unknown chain.
    fn count_available(&self, chain_id: &str) -> Result<usize, RuleError>;

    /// Number of registered rules. Zero for an unknown chain.
    fn count_all(&self, chain_id: &str) -> Result<usize, RuleError>;

    /// Raw serialized collection, verbatim. `None` for an unknown chain.
    fn all(&self, chain_id: &str) -> Result<Option<Vec<u8>>, RuleError>;

    /// Single rule by address.
    fn query_by_id(&self, chain_id: &str, address: &str) -> Result<Rule, RuleError>;

    /// Address of the first available rule.
    fn get_available_rule_address(&self, chain_id: &str) -> Result<String, RuleError>;

    /// First rule flagged master.
    fn get_master(&self, chain_id: &str) -> Result<Rule, RuleError>;

    /// Whether any rule of the chain is flagged master.
    fn has_master(&self, chain_id: &str) -> Result<bool, RuleError>;

    /// Succeeds only if the rule exists and is available.
    fn is_available(&self, chain_id: &str, address: &str) -> Result<(), RuleError>;
}
