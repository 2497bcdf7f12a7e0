//! # Adapters Layer
//!
//! Infrastructure adapters implementing and exposing the ports.

pub mod contract;
mod memory;

pub use contract::{ContractResponse, RuleContract};
pub use memory::InMemoryObjectStore;
