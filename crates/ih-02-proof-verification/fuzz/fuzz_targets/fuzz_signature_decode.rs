//! Fuzz target for DER signature decoding and proof verification.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ih-02-proof-verification
//! cargo +nightly fuzz run fuzz_signature_decode
//! ```

#![no_main]

use ih_02_proof_verification::{
    unmarshal_ecdsa_signature, EcdsaRuleValidator, RuleValidator, SignedEnvelopeExtractor,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Raw bytes handed to the DER decoder
    signature: Vec<u8>,
    /// Raw proof bytes
    proof: Vec<u8>,
    payload: Vec<u8>,
    validators: String,
}

fuzz_target!(|input: FuzzInput| {
    // Decoding must never panic, and accepted components are never zero
    if let Ok(sig) = unmarshal_ecdsa_signature(&input.signature) {
        assert!(!sig.r().is_empty() && sig.r()[0] != 0);
        assert!(!sig.s().is_empty() && sig.s()[0] != 0);
    }

    let validator = EcdsaRuleValidator::new(SignedEnvelopeExtractor);
    let _ = validator.verify(
        "fuzz",
        "fuzz",
        &input.proof,
        &input.payload,
        &input.validators,
    );
});
