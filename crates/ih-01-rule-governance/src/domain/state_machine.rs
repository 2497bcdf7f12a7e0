//! # Governance State Machine
//!
//! Transition table shared by every rule record, keyed by
//! `(current status, event) -> next status`.
//!
//! The machine is a derived view: it is rebuilt from the persisted status
//! each time it is needed and never stored.

use super::errors::RuleError;
use super::value_objects::{GovernanceEvent, GovernanceStatus};

use super::value_objects::GovernanceEvent as E;
use super::value_objects::GovernanceStatus as S;

/// One row of the transition table.
struct Transition {
    event: GovernanceEvent,
    sources: &'static [GovernanceStatus],
    destination: GovernanceStatus,
}

const TRANSITIONS: &[Transition] = &[
    // bind
    Transition {
        event: E::Bind,
        sources: &[S::Bindable, S::Freezing, S::Logouting],
        destination: S::Binding,
    },
    Transition {
        event: E::Approve,
        sources: &[S::Binding],
        destination: S::Available,
    },
    Transition {
        event: E::Reject,
        sources: &[S::Binding],
        destination: S::Bindable,
    },
    // unbind
    Transition {
        event: E::Unbind,
        sources: &[S::Available, S::Freezing, S::Logouting],
        destination: S::Unbinding,
    },
    Transition {
        event: E::Approve,
        sources: &[S::Unbinding],
        destination: S::Bindable,
    },
    Transition {
        event: E::Reject,
        sources: &[S::Unbinding],
        destination: S::Available,
    },
    // freeze
    Transition {
        event: E::Freeze,
        sources: &[
            S::Available,
            S::Bindable,
            S::Activating,
            S::Binding,
            S::Unbinding,
            S::Logouting,
        ],
        destination: S::Freezing,
    },
    Transition {
        event: E::Approve,
        sources: &[S::Freezing],
        destination: S::Frozen,
    },
    Transition {
        event: E::Reject,
        sources: &[S::Freezing],
        destination: S::Bindable,
    },
    // activate
    Transition {
        event: E::Activate,
        sources: &[S::Frozen, S::Freezing, S::Logouting],
        destination: S::Activating,
    },
    Transition {
        event: E::Approve,
        sources: &[S::Activating],
        destination: S::Bindable,
    },
    Transition {
        event: E::Reject,
        sources: &[S::Activating],
        destination: S::Frozen,
    },
    // logout
    Transition {
        event: E::Logout,
        sources: &[
            S::Available,
            S::Bindable,
            S::Frozen,
            S::Freezing,
            S::Activating,
            S::Binding,
            S::Unbinding,
        ],
        destination: S::Logouting,
    },
    Transition {
        event: E::Approve,
        sources: &[S::Logouting],
        destination: S::Forbidden,
    },
    Transition {
        event: E::Reject,
        sources: &[S::Logouting],
        destination: S::Bindable,
    },
];

/// Look up the destination of `event` fired from `current`.
///
/// Returns `None` when the table has no matching row.
pub fn next_status(current: GovernanceStatus, event: GovernanceEvent) -> Option<GovernanceStatus> {
    TRANSITIONS
        .iter()
        .find(|t| t.event == event && t.sources.contains(&current))
        .map(|t| t.destination)
}

/// State machine view derived from a persisted status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleStateMachine {
    current: GovernanceStatus,
}

impl RuleStateMachine {
    /// Rebuild the machine for a persisted status.
    pub fn derive(status: GovernanceStatus) -> Self {
        Self { current: status }
    }

    /// Current state.
    pub fn current(&self) -> GovernanceStatus {
        self.current
    }

    /// Whether `event` is legal from the current state.
    pub fn can(&self, event: GovernanceEvent) -> bool {
        next_status(self.current, event).is_some()
    }

    /// Events that have a transition from the current state.
    pub fn available_events(&self) -> Vec<GovernanceEvent> {
        GovernanceEvent::ALL
            .into_iter()
            .filter(|event| self.can(*event))
            .collect()
    }

    /// Fire `event`. On failure the machine is left untouched.
    pub fn fire(&mut self, event: GovernanceEvent) -> Result<GovernanceStatus, RuleError> {
        let next = next_status(self.current, event).ok_or(RuleError::IllegalTransition {
            event,
            status: self.current,
        })?;
        self.current = next;
        Ok(next)
    }
}
