//! # Proof Acceptance Flows
//!
//! An inbound message from a source chain is accepted only when the chain
//! has an available rule and the proof verifies against the chain's signer.

#[cfg(test)]
mod tests {
    use crate::integration::harness::{AcceptanceError, InMemoryPipeline};
    use ih_01_rule_governance::{GovernanceEvent, RuleError, RuleGovernanceApi};
    use ih_02_proof_verification::test_helpers::TestSigner;
    use ih_02_proof_verification::ValidatorError;

    const CHAIN: &str = "chainA";
    const RULE: &str = "0x00000000000000000000000000000000000000a2";
    const PAYLOAD: &[u8] = b"ibtp:chainA->chainB:7";
    const SIGNED_PART: &[u8] = b"header:42|tx:7";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Pipeline with `RULE` available on `CHAIN` and `signer` registered.
    fn online_pipeline(signer: &TestSigner) -> InMemoryPipeline {
        let pipeline = InMemoryPipeline::in_memory();
        let rules = pipeline.rules();

        rules.register(CHAIN, RULE).unwrap();
        rules.bind_pre(CHAIN, RULE, false).unwrap();
        rules.change_status(CHAIN, RULE, GovernanceEvent::Bind).unwrap();
        rules.change_status(CHAIN, RULE, GovernanceEvent::Approve).unwrap();

        pipeline.register_signer(CHAIN, signer.cert_pem());
        pipeline
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_signed_message_is_accepted() {
        let signer = TestSigner::generate();
        let pipeline = online_pipeline(&signer);
        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);

        assert_eq!(pipeline.accept(CHAIN, &proof, PAYLOAD), Ok(true));
        assert_eq!(pipeline.validator().cached_signers(), 1);
    }

    #[test]
    fn test_message_signed_by_stranger_is_rejected() {
        let signer = TestSigner::generate();
        let stranger = TestSigner::generate();
        let pipeline = online_pipeline(&signer);
        let proof = stranger.signed_envelope("broker", PAYLOAD, SIGNED_PART);

        assert_eq!(pipeline.accept(CHAIN, &proof, PAYLOAD), Ok(false));

        // A failed signature leaves the rule in place
        assert!(pipeline.rules().is_available(CHAIN, RULE).is_ok());
    }

    #[test]
    fn test_no_available_rule_blocks_acceptance() {
        let signer = TestSigner::generate();
        let pipeline = InMemoryPipeline::in_memory();
        pipeline.rules().register(CHAIN, RULE).unwrap();
        pipeline.register_signer(CHAIN, signer.cert_pem());

        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);
        let err = pipeline.accept(CHAIN, &proof, PAYLOAD).unwrap_err();
        assert!(matches!(
            err,
            AcceptanceError::Rule(RuleError::NoAvailableRule { .. })
        ));
    }

    #[test]
    fn test_frozen_rule_stops_acceptance() {
        let signer = TestSigner::generate();
        let pipeline = online_pipeline(&signer);
        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);
        assert_eq!(pipeline.accept(CHAIN, &proof, PAYLOAD), Ok(true));

        pipeline
            .rules()
            .change_status(CHAIN, RULE, GovernanceEvent::Freeze)
            .unwrap();

        assert!(pipeline.accept(CHAIN, &proof, PAYLOAD).is_err());
    }

    #[test]
    fn test_replayed_proof_for_other_payload_fails_pre_check() {
        let signer = TestSigner::generate();
        let pipeline = online_pipeline(&signer);
        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);

        let err = pipeline.accept(CHAIN, &proof, b"ibtp:chainA->chainB:8").unwrap_err();
        assert!(matches!(
            err,
            AcceptanceError::Proof(ValidatorError::PreCheck(_))
        ));
    }

    #[test]
    fn test_unregistered_signer_is_hard_error() {
        let signer = TestSigner::generate();
        let pipeline = online_pipeline(&signer);
        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);

        // Another chain with an available rule but no signer on record
        let rules = pipeline.rules();
        rules.register("chainB", RULE).unwrap();
        rules.change_status("chainB", RULE, GovernanceEvent::Bind).unwrap();
        rules.change_status("chainB", RULE, GovernanceEvent::Approve).unwrap();

        let err = pipeline.accept("chainB", &proof, PAYLOAD).unwrap_err();
        assert!(matches!(
            err,
            AcceptanceError::Proof(ValidatorError::InvalidPem(_))
        ));
    }

    #[test]
    fn test_signer_key_cached_per_chain() {
        let signer = TestSigner::generate();
        let pipeline = online_pipeline(&signer);
        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);
        assert_eq!(pipeline.accept(CHAIN, &proof, PAYLOAD), Ok(true));

        // Rotating the certificate on record does not reach a cached key
        let rotated = TestSigner::generate();
        pipeline.register_signer(CHAIN, rotated.cert_pem());
        assert_eq!(pipeline.accept(CHAIN, &proof, PAYLOAD), Ok(true));

        let rotated_proof = rotated.signed_envelope("broker", PAYLOAD, SIGNED_PART);
        assert_eq!(pipeline.accept(CHAIN, &rotated_proof, PAYLOAD), Ok(false));
    }

    #[test]
    fn test_p384_signer_is_accepted() {
        let signer = TestSigner::generate_p384();
        let pipeline = online_pipeline(&signer);
        let proof = signer.signed_envelope("broker", PAYLOAD, SIGNED_PART);

        assert_eq!(pipeline.accept(CHAIN, &proof, PAYLOAD), Ok(true));
    }
}
