//! # Domain Module
//!
//! Rule records, governance statuses and the transition table.

pub mod entities;
pub mod errors;
pub mod state_machine;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use state_machine::{next_status, RuleStateMachine};
pub use value_objects::*;
