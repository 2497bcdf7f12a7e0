//! # Ports Layer
//!
//! - `inbound`: the verification rule callers invoke
//! - `outbound`: proof extraction the validator depends on

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
