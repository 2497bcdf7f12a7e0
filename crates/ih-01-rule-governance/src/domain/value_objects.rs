//! # Domain Value Objects
//!
//! Governance statuses and the events that move a rule between them.

use super::errors::RuleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative lifecycle state of a verification rule.
///
/// Only this value is persisted; the state machine is rebuilt from it on load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernanceStatus {
    /// Registered, not bound to the chain.
    #[default]
    Bindable,
    /// Bind proposal in flight.
    Binding,
    /// Bound and usable for proof verification.
    Available,
    /// Unbind proposal in flight.
    Unbinding,
    /// Freeze proposal in flight.
    Freezing,
    /// Frozen by governance.
    Frozen,
    /// Activation proposal in flight.
    Activating,
    /// Logout proposal in flight.
    Logouting,
    /// Logged out. Terminal.
    Forbidden,
}

impl GovernanceStatus {
    /// Every status, in declaration order.
    pub const ALL: [GovernanceStatus; 9] = [
        Self::Bindable,
        Self::Binding,
        Self::Available,
        Self::Unbinding,
        Self::Freezing,
        Self::Frozen,
        Self::Activating,
        Self::Logouting,
        Self::Forbidden,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bindable => "bindable",
            Self::Binding => "binding",
            Self::Available => "available",
            Self::Unbinding => "unbinding",
            Self::Freezing => "freezing",
            Self::Frozen => "frozen",
            Self::Activating => "activating",
            Self::Logouting => "logouting",
            Self::Forbidden => "forbidden",
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Forbidden)
    }
}

impl fmt::Display for GovernanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governance trigger applied to a rule's state machine.
///
/// `Approve` and `Reject` are overloaded: their destination depends on the
/// state they fire from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernanceEvent {
    /// Start binding the rule to its chain.
    Bind,
    /// Start unbinding the rule.
    Unbind,
    /// Start freezing the rule.
    Freeze,
    /// Start re-activating a frozen rule.
    Activate,
    /// Start logging the rule out.
    Logout,
    /// Close the pending proposal as accepted.
    Approve,
    /// Close the pending proposal as rejected.
    Reject,
}

impl GovernanceEvent {
    /// Every event, in declaration order.
    pub const ALL: [GovernanceEvent; 7] = [
        Self::Bind,
        Self::Unbind,
        Self::Freeze,
        Self::Activate,
        Self::Logout,
        Self::Approve,
        Self::Reject,
    ];

    /// Wire name of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bind => "bind",
            Self::Unbind => "unbind",
            Self::Freeze => "freeze",
            Self::Activate => "activate",
            Self::Logout => "logout",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for GovernanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GovernanceEvent {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| RuleError::UnknownEvent(s.to_string()))
    }
}
