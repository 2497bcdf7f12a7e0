//! # Adapters
//!
//! Concrete proof extractors.

pub mod envelope;

pub use envelope::{SignedEnvelope, SignedEnvelopeExtractor};
