//! ResolutionStatus enum for the resolution review workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a board resolution.
///
/// The full review flow is:
/// Draft -> Submitted -> Approved -> Published, with Submitted -> Denied
/// and Denied -> Submitted for the resubmission loop. Approved -> Published
/// is reserved for the publish cascade; no user command performs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Denied,
    Published,
}

impl ResolutionStatus {
    /// Returns true if the resolution may be reassigned to another meeting.
    ///
    /// Everything except Published: once numbered into a published meeting,
    /// a resolution is part of the record.
    pub fn is_reassignable(&self) -> bool {
        !matches!(self, ResolutionStatus::Published)
    }

    /// Returns true if the resolution counts toward a consent agenda.
    pub fn is_approved(&self) -> bool {
        matches!(self, ResolutionStatus::Approved)
    }
}

impl StateMachine for ResolutionStatus {
    fn can_transition_to(&self, target: &ResolutionStatus) -> bool {
        use ResolutionStatus::*;
        matches!(
            (self, target),
            (Draft, Submitted)
                | (Denied, Submitted)
                | (Submitted, Approved)
                | (Submitted, Denied)
                | (Approved, Published)
        )
    }

    fn valid_transitions(&self) -> Vec<ResolutionStatus> {
        use ResolutionStatus::*;
        match self {
            Draft => vec![Submitted],
            Submitted => vec![Approved, Denied],
            Approved => vec![Published],
            Denied => vec![Submitted],
            Published => vec![],
        }
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolutionStatus::Draft => "Draft",
            ResolutionStatus::Submitted => "Submitted",
            ResolutionStatus::Approved => "Approved",
            ResolutionStatus::Denied => "Denied",
            ResolutionStatus::Published => "Published",
        };
        write!(f, "{}", s)
    }
}
