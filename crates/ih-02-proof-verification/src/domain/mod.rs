//! # Domain Layer
//!
//! Signature decoding and signer-key verification. No I/O.

pub mod entities;
pub mod errors;
pub mod signature;
pub mod signer_key;

pub use entities::*;
pub use errors::*;
pub use signature::*;
pub use signer_key::*;
