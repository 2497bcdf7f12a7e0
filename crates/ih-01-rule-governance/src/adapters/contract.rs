//! Contract adapter.
//!
//! Exposes the rule manager through the hub's `(success, payload)` calling
//! convention. Callers decide success from the flag alone; on failure the
//! payload is a human-readable message.

use crate::domain::{GovernanceEvent, RuleError};
use crate::ports::inbound::RuleGovernanceApi;
use serde::Serialize;
use tracing::warn;

/// Outcome of a contract call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractResponse {
    /// Whether the call succeeded.
    pub success: bool,
    /// JSON, a decimal count, a raw address, raw bytes, or an error message.
    pub payload: Vec<u8>,
}

impl ContractResponse {
    /// Successful response carrying `payload`.
    pub fn ok(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            payload: payload.into(),
        }
    }

    /// Successful response with no payload.
    pub fn empty() -> Self {
        Self::ok(Vec::new())
    }

    /// Failed response carrying the error text.
    pub fn fail(err: &RuleError) -> Self {
        Self::message(err.to_string())
    }

    fn message(msg: String) -> Self {
        Self {
            success: false,
            payload: msg.into_bytes(),
        }
    }

    /// Payload as UTF-8 text (lossy).
    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    fn json<T: Serialize>(result: Result<T, RuleError>) -> Self {
        match result.and_then(|v| serde_json::to_vec(&v).map_err(RuleError::from)) {
            Ok(bytes) => Self::ok(bytes),
            Err(e) => Self::fail(&e),
        }
    }

    fn unit(result: Result<(), RuleError>) -> Self {
        match result {
            Ok(()) => Self::empty(),
            Err(e) => Self::fail(&e),
        }
    }

    fn count(result: Result<usize, RuleError>) -> Self {
        match result {
            Ok(n) => Self::ok(n.to_string()),
            Err(e) => Self::fail(&e),
        }
    }
}

/// `(success, payload)` facade over any [`RuleGovernanceApi`].
pub struct RuleContract<A: RuleGovernanceApi> {
    api: A,
}

impl<A: RuleGovernanceApi> RuleContract<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The wrapped API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// `{"id": <address>, "is_registered": <bool>}` on success.
    pub fn register(&self, chain_id: &str, address: &str) -> ContractResponse {
        ContractResponse::json(self.api.register(chain_id, address))
    }

    pub fn bind_pre(&self, chain_id: &str, address: &str, force: bool) -> ContractResponse {
        ContractResponse::unit(self.api.bind_pre(chain_id, address, force))
    }

    pub fn set_master(&self, chain_id: &str, address: &str, master: bool) -> ContractResponse {
        ContractResponse::unit(self.api.set_master(chain_id, address, master))
    }

    /// `event` is the wire name of a governance event (`bind`, `approve`, ...).
    pub fn change_status(&self, chain_id: &str, address: &str, event: &str) -> ContractResponse {
        let result = event
            .parse::<GovernanceEvent>()
            .and_then(|event| self.api.change_status(chain_id, address, event))
            .map(|_| ());
        ContractResponse::unit(result)
    }

    pub fn count_available(&self, chain_id: &str) -> ContractResponse {
        ContractResponse::count(self.api.count_available(chain_id))
    }

    pub fn count_all(&self, chain_id: &str) -> ContractResponse {
        ContractResponse::count(self.api.count_all(chain_id))
    }

    /// Raw stored collection; empty payload for an unknown chain.
    pub fn all(&self, chain_id: &str) -> ContractResponse {
        match self.api.all(chain_id) {
            Ok(data) => ContractResponse::ok(data.unwrap_or_default()),
            Err(e) => ContractResponse::fail(&e),
        }
    }

    pub fn query_by_id(&self, chain_id: &str, address: &str) -> ContractResponse {
        ContractResponse::json(self.api.query_by_id(chain_id, address))
    }

    /// Raw address bytes on success.
    pub fn get_available_rule_address(&self, chain_id: &str) -> ContractResponse {
        match self.api.get_available_rule_address(chain_id) {
            Ok(address) => ContractResponse::ok(address),
            Err(e) => ContractResponse::fail(&e),
        }
    }

    pub fn get_master(&self, chain_id: &str) -> ContractResponse {
        ContractResponse::json(self.api.get_master(chain_id))
    }

    /// Storage failures read as "no master" and are logged.
    pub fn has_master(&self, chain_id: &str) -> bool {
        match self.api.has_master(chain_id) {
            Ok(has) => has,
            Err(e) => {
                warn!(chain_id, error = %e, "Master lookup failed, reporting no master");
                false
            }
        }
    }

    pub fn is_available(&self, chain_id: &str, address: &str) -> ContractResponse {
        match self.api.is_available(chain_id, address) {
            Ok(()) => ContractResponse::empty(),
            Err(e @ RuleError::NotAvailable { .. }) => ContractResponse::fail(&e),
            Err(e) => ContractResponse::message(format!("get rule info error: {e}")),
        }
    }
}
