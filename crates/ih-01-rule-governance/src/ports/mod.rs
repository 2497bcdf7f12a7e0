//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that external callers use
//! - **Outbound (Driven)**: Dependencies this subsystem needs

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
