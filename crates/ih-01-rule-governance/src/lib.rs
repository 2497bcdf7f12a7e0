//! # IH-01 Rule Governance
//!
//! Decides which verification rule may validate cross-chain proofs for a
//! remote chain.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every remote chain owns an ordered collection of rule records. Each record
//! carries a governance status that moves only through the shared transition
//! table. A message-acceptance pipeline asks this subsystem for the chain's
//! available (or master) rule before handing a proof to that rule's verifier.
//!
//! ## Module Structure
//!
//! ```text
//! ih-01-rule-governance/
//! ├── domain/          # Rule, GovernanceStatus/Event, transition table, errors
//! ├── ports/           # RuleGovernanceApi, ObjectStore
//! ├── adapters/        # InMemoryObjectStore, RuleContract
//! └── service.rs       # RuleManagerService
//! ```
//!
//! ## Concurrency
//!
//! The service does no internal locking. A mutation reads the chain's
//! collection, changes it and writes it back, so writes to the same chain
//! must be serialized by the caller.

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{ContractResponse, InMemoryObjectStore, RuleContract};
pub use domain::{
    next_status, GovernanceEvent, GovernanceStatus, RegisterResult, Rule, RuleError,
    RuleGovernanceConfig, RuleStateMachine, StoreError, RULE_KEY_PREFIX,
};
pub use ports::{ObjectStore, ObjectStoreExt, RuleGovernanceApi};
pub use service::RuleManagerService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
