//! # Governance Flows
//!
//! Drives rule records through the contract surface the way an external
//! proposal process would: pre-check, fire the event, approve or reject.

#[cfg(test)]
mod tests {
    use ih_01_rule_governance::{
        GovernanceStatus, InMemoryObjectStore, RegisterResult, Rule, RuleContract,
        RuleGovernanceApi, RuleGovernanceConfig, RuleManagerService,
    };

    const CHAIN: &str = "chainA";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn contract() -> RuleContract<RuleManagerService<InMemoryObjectStore>> {
        RuleContract::new(RuleManagerService::new(InMemoryObjectStore::new()))
    }

    /// register -> bind_pre -> bind -> approve
    fn bring_online(
        contract: &RuleContract<RuleManagerService<InMemoryObjectStore>>,
        address: &str,
        force: bool,
    ) {
        assert!(contract.register(CHAIN, address).success);
        let pre = contract.bind_pre(CHAIN, address, force);
        assert!(pre.success, "bind_pre failed: {}", pre.payload_str());
        assert!(contract.change_status(CHAIN, address, "bind").success);
        assert!(contract.change_status(CHAIN, address, "approve").success);
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_register_bind_approve_makes_rule_available() {
        let contract = contract();

        let resp = contract.register(CHAIN, "0xAB");
        assert!(resp.success);
        let result: RegisterResult = serde_json::from_slice(&resp.payload).unwrap();
        assert!(!result.is_registered);

        assert!(!contract.get_available_rule_address(CHAIN).success);

        assert!(contract.bind_pre(CHAIN, "0xAB", false).success);
        assert!(contract.change_status(CHAIN, "0xAB", "bind").success);
        assert!(contract.change_status(CHAIN, "0xAB", "approve").success);

        assert_eq!(contract.count_available(CHAIN).payload, b"1");
        assert_eq!(contract.count_all(CHAIN).payload, b"1");
        assert_eq!(contract.get_available_rule_address(CHAIN).payload, b"0xAB");
        assert!(contract.is_available(CHAIN, "0xAB").success);
    }

    #[test]
    fn test_reregister_reports_existing_rule() {
        let contract = contract();
        contract.register(CHAIN, "0xAB");

        let resp = contract.register(CHAIN, "0xAB");
        assert_eq!(
            resp.payload_str(),
            r#"{"id":"0xAB","is_registered":true}"#
        );
        assert_eq!(contract.count_all(CHAIN).payload, b"1");
    }

    #[test]
    fn test_rejected_bind_returns_to_bindable() {
        let contract = contract();
        contract.register(CHAIN, "0xAB");
        contract.change_status(CHAIN, "0xAB", "bind");

        let resp = contract.change_status(CHAIN, "0xAB", "reject");
        assert!(resp.success);

        let rule: Rule = serde_json::from_slice(&contract.query_by_id(CHAIN, "0xAB").payload).unwrap();
        assert_eq!(rule.status(), GovernanceStatus::Bindable);
        assert_eq!(contract.count_available(CHAIN).payload, b"0");
    }

    #[test]
    fn test_master_replacement_with_forced_bind() {
        let contract = contract();

        bring_online(&contract, "0x01", false);
        assert!(contract.set_master(CHAIN, "0x01", true).success);
        assert!(contract.has_master(CHAIN));

        // A second rule cannot bind while 0x01 is available, unless forced
        contract.register(CHAIN, "0x02");
        let refused = contract.bind_pre(CHAIN, "0x02", false);
        assert!(!refused.success);
        assert!(refused.payload_str().contains("0x01"));

        assert!(contract.bind_pre(CHAIN, "0x02", true).success);
        assert!(contract.change_status(CHAIN, "0x02", "bind").success);
        assert!(contract.change_status(CHAIN, "0x02", "approve").success);
        assert_eq!(contract.count_available(CHAIN).payload, b"2");

        // Retire the old master
        assert!(contract.change_status(CHAIN, "0x01", "unbind").success);
        assert!(contract.set_master(CHAIN, "0x01", false).success);
        assert!(contract.set_master(CHAIN, "0x02", true).success);
        assert!(contract.change_status(CHAIN, "0x01", "approve").success);

        let master: Rule = serde_json::from_slice(&contract.get_master(CHAIN).payload).unwrap();
        assert_eq!(master.address(), "0x02");
        assert_eq!(contract.count_available(CHAIN).payload, b"1");
        assert_eq!(contract.get_available_rule_address(CHAIN).payload, b"0x02");
    }

    #[test]
    fn test_unavailable_master_blocks_new_binds() {
        let contract = contract();

        bring_online(&contract, "0x01", false);
        contract.set_master(CHAIN, "0x01", true);
        assert!(contract.change_status(CHAIN, "0x01", "freeze").success);

        contract.register(CHAIN, "0x02");
        let resp = contract.bind_pre(CHAIN, "0x02", true);
        assert!(!resp.success);
        assert!(resp.payload_str().contains("freezing"));
    }

    #[test]
    fn test_exclusive_master_moves_flag() {
        let config = RuleGovernanceConfig {
            exclusive_master: true,
            ..RuleGovernanceConfig::default()
        };
        let service = RuleManagerService::with_config(InMemoryObjectStore::new(), config);

        service.register(CHAIN, "0x01").unwrap();
        service.register(CHAIN, "0x02").unwrap();
        service.set_master(CHAIN, "0x01", true).unwrap();
        service.set_master(CHAIN, "0x02", true).unwrap();

        assert!(!service.query_by_id(CHAIN, "0x01").unwrap().is_master());
        assert_eq!(service.get_master(CHAIN).unwrap().address(), "0x02");
    }

    #[test]
    fn test_logout_is_terminal() {
        let contract = contract();
        bring_online(&contract, "0xAB", false);

        assert!(contract.change_status(CHAIN, "0xAB", "logout").success);
        assert!(contract.change_status(CHAIN, "0xAB", "approve").success);

        for event in ["bind", "unbind", "freeze", "activate", "logout", "approve", "reject"] {
            assert!(
                !contract.change_status(CHAIN, "0xAB", event).success,
                "{event} fired on a forbidden rule"
            );
        }

        let resp = contract.is_available(CHAIN, "0xAB");
        assert!(!resp.success);
        assert_eq!(resp.payload_str(), "the rule status is forbidden");
    }

    #[test]
    fn test_unknown_event_is_refused() {
        let contract = contract();
        contract.register(CHAIN, "0xAB");

        let resp = contract.change_status(CHAIN, "0xAB", "explode");
        assert!(!resp.success);

        let rule: Rule = serde_json::from_slice(&contract.query_by_id(CHAIN, "0xAB").payload).unwrap();
        assert_eq!(rule.status(), GovernanceStatus::Bindable);
    }

    #[test]
    fn test_chains_are_isolated() {
        let contract = contract();
        bring_online(&contract, "0xAB", false);

        assert!(!contract.get_available_rule_address("chainB").success);
        assert!(contract.register("chainB", "0xAB").success);
        assert_eq!(contract.count_available("chainB").payload, b"0");
        assert!(!contract.get_available_rule_address("chainB").success);
        assert_eq!(contract.count_available(CHAIN).payload, b"1");
    }
}
