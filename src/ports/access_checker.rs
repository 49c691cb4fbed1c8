//! Access control port for capability-gated commands.
//!
//! Every command on the surface (submit/approve/deny/reassign/reorder)
//! requires the `manage_resolutions` capability. The check is centralized
//! here and invoked by handlers *before* any workflow state is touched, so
//! a denied caller never observes a partial write.
//!
//! # Design
//!
//! Fail-secure: on ANY error, access is denied.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, UserId};

/// Capability name required to drive the resolution workflow.
pub const MANAGE_RESOLUTIONS: &str = "manage_resolutions";

/// Port for checking user capabilities.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Check if the user may manage resolutions (submit, approve, deny,
    /// reassign, reorder).
    async fn can_manage_resolutions(&self, user_id: &UserId) -> Result<AccessResult, DomainError>;
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    /// Access is granted.
    Allowed,
    /// Access is denied with a specific reason.
    Denied(AccessDeniedReason),
}

impl AccessResult {
    /// Returns true if access is granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Converts to a Result, surfacing the denial reason.
    pub fn into_result(self) -> Result<(), AccessDeniedReason> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(reason),
        }
    }
}

/// Why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDeniedReason {
    /// The user lacks a named capability.
    MissingCapability(String),
    /// The user is not recognized.
    UnknownUser,
}

impl AccessDeniedReason {
    /// Human-readable message suitable for API responses.
    pub fn user_message(&self) -> String {
        match self {
            AccessDeniedReason::MissingCapability(capability) => {
                format!("This action requires the '{}' capability", capability)
            }
            AccessDeniedReason::UnknownUser => "User is not recognized".to_string(),
        }
    }
}
