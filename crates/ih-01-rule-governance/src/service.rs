//! # Rule Manager Service
//!
//! Application service implementing [`RuleGovernanceApi`] over an
//! [`ObjectStore`].
//!
//! Each chain's rules live as one JSON array under `"<prefix><chain_id>"`.
//! Every mutation is fetch, mutate in memory, persist the whole collection.

use crate::domain::{
    GovernanceEvent, GovernanceStatus, RegisterResult, Rule, RuleError, RuleGovernanceConfig,
};
use crate::ports::inbound::RuleGovernanceApi;
use crate::ports::outbound::{ObjectStore, ObjectStoreExt};
use tracing::{debug, info, warn};

/// Rule lifecycle manager.
pub struct RuleManagerService<S: ObjectStore> {
    store: S,
    config: RuleGovernanceConfig,
}

impl<S: ObjectStore> RuleManagerService<S> {
    /// Create a manager with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, RuleGovernanceConfig::default())
    }

    /// Create a manager with an explicit configuration.
    pub fn with_config(store: S, config: RuleGovernanceConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &RuleGovernanceConfig {
        &self.config
    }

    fn load(&self, chain_id: &str) -> Result<Option<Vec<Rule>>, RuleError> {
        self.store.get_object(&self.config.rule_key(chain_id))
    }

    fn load_existing(&self, chain_id: &str) -> Result<Vec<Rule>, RuleError> {
        self.load(chain_id)?.ok_or_else(|| RuleError::ChainNotFound {
            chain_id: chain_id.to_string(),
        })
    }

    fn save(&self, chain_id: &str, rules: &[Rule]) -> Result<(), RuleError> {
        self.store.set_object(&self.config.rule_key(chain_id), rules)
    }

    fn rule_not_found(chain_id: &str, address: &str) -> RuleError {
        RuleError::RuleNotFound {
            chain_id: chain_id.to_string(),
            address: address.to_string(),
        }
    }
}

impl<S: ObjectStore> RuleGovernanceApi for RuleManagerService<S> {
    fn register(&self, chain_id: &str, address: &str) -> Result<RegisterResult, RuleError> {
        let mut rules = self.load(chain_id)?.unwrap_or_default();

        let is_registered = rules.iter().any(|r| r.address() == address);
        if is_registered {
            info!(chain_id, address, "Rule has already been registered");
        } else {
            rules.push(Rule::new(chain_id, address));
            self.save(chain_id, &rules)?;
            info!(chain_id, address, "Rule registered");
        }

        Ok(RegisterResult {
            id: address.to_string(),
            is_registered,
        })
    }

    fn bind_pre(&self, chain_id: &str, address: &str, force: bool) -> Result<(), RuleError> {
        let rules = self.load_existing(chain_id)?;

        let mut exists = false;
        for rule in &rules {
            if rule.address() == address {
                if rule.status() != GovernanceStatus::Bindable {
                    return Err(RuleError::NotBindable {
                        status: rule.status(),
                    });
                }
                exists = true;
            } else {
                if rule.is_available() && !force {
                    return Err(RuleError::AvailableRuleExists {
                        address: rule.address().to_string(),
                    });
                }
                if rule.is_master() && !rule.is_available() {
                    return Err(RuleError::MasterChanging {
                        status: rule.status(),
                    });
                }
            }
        }

        if !exists {
            return Err(Self::rule_not_found(chain_id, address));
        }

        debug!(chain_id, address, force, "Bind precondition satisfied");
        Ok(())
    }

    fn set_master(&self, chain_id: &str, address: &str, master: bool) -> Result<(), RuleError> {
        let mut rules = self.load_existing(chain_id)?;

        let target = rules
            .iter()
            .position(|r| r.address() == address)
            .ok_or_else(|| Self::rule_not_found(chain_id, address))?;

        if master && self.config.exclusive_master {
            for rule in rules.iter_mut().filter(|r| r.is_master()) {
                rule.set_master(false);
            }
        }
        rules[target].set_master(master);

        self.save(chain_id, &rules)?;
        info!(chain_id, address, master, "Rule master flag updated");
        Ok(())
    }

    fn change_status(
        &self,
        chain_id: &str,
        address: &str,
        event: GovernanceEvent,
    ) -> Result<GovernanceStatus, RuleError> {
        let mut rules = self.load_existing(chain_id)?;

        let rule = rules
            .iter_mut()
            .find(|r| r.address() == address)
            .ok_or_else(|| Self::rule_not_found(chain_id, address))?;

        let from = rule.status();
        let to = rule.fire(event).inspect_err(|e| {
            warn!(chain_id, address, %event, status = %from, "Rejected status change: {}", e);
        })?;

        self.save(chain_id, &rules)?;
        info!(chain_id, address, %event, %from, %to, "Rule status changed");
        Ok(to)
    }

    fn count_available(&self, chain_id: &str) -> Result<usize, RuleError> {
        let rules = self.load(chain_id)?.unwrap_or_default();
        Ok(rules.iter().filter(|r| r.is_available()).count())
    }

    fn count_all(&self, chain_id: &str) -> Result<usize, RuleError> {
        Ok(self.load(chain_id)?.map_or(0, |rules| rules.len()))
    }

    fn all(&self, chain_id: &str) -> Result<Option<Vec<u8>>, RuleError> {
        Ok(self.store.get(&self.config.rule_key(chain_id))?)
    }

    fn query_by_id(&self, chain_id: &str, address: &str) -> Result<Rule, RuleError> {
        self.load_existing(chain_id)?
            .into_iter()
            .find(|r| r.address() == address)
            .ok_or_else(|| Self::rule_not_found(chain_id, address))
    }

    fn get_available_rule_address(&self, chain_id: &str) -> Result<String, RuleError> {
        self.load_existing(chain_id)?
            .into_iter()
            .find(Rule::is_available)
            .map(|r| r.address().to_string())
            .ok_or_else(|| RuleError::NoAvailableRule {
                chain_id: chain_id.to_string(),
            })
    }

    fn get_master(&self, chain_id: &str) -> Result<Rule, RuleError> {
        self.load_existing(chain_id)?
            .into_iter()
            .find(Rule::is_master)
            .ok_or_else(|| RuleError::NoMasterRule {
                chain_id: chain_id.to_string(),
            })
    }

    fn has_master(&self, chain_id: &str) -> Result<bool, RuleError> {
        let rules = self.load(chain_id)?.unwrap_or_default();
        Ok(rules.iter().any(Rule::is_master))
    }

    fn is_available(&self, chain_id: &str, address: &str) -> Result<(), RuleError> {
        let rule = self.query_by_id(chain_id, address)?;
        if !rule.is_available() {
            return Err(RuleError::NotAvailable {
                status: rule.status(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
