//! In-memory access checker.
//!
//! Holds a capability set per user. Production deployments resolve
//! capabilities from their identity provider behind the same port.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{AccessChecker, AccessDeniedReason, AccessResult, MANAGE_RESOLUTIONS};

/// Capability-set-per-user access checker.
///
/// Users the checker has never heard of are denied as `UnknownUser`;
/// known users without the capability are denied as `MissingCapability`.
pub struct InMemoryAccessChecker {
    capabilities: Mutex<HashMap<UserId, HashSet<String>>>,
}

impl InMemoryAccessChecker {
    /// Creates a checker that knows no users (denies everyone).
    pub fn new() -> Self {
        Self {
            capabilities: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a checker where the given users hold `manage_resolutions`.
    pub fn allowing(users: impl IntoIterator<Item = UserId>) -> Self {
        let checker = Self::new();
        for user in users {
            checker.grant(user, MANAGE_RESOLUTIONS);
        }
        checker
    }

    /// Grants a capability to a user, registering the user if needed.
    pub fn grant(&self, user_id: UserId, capability: &str) {
        self.capabilities
            .lock()
            .expect("InMemoryAccessChecker: lock poisoned")
            .entry(user_id)
            .or_default()
            .insert(capability.to_string());
    }

    /// Registers a user with no capabilities.
    pub fn register(&self, user_id: UserId) {
        self.capabilities
            .lock()
            .expect("InMemoryAccessChecker: lock poisoned")
            .entry(user_id)
            .or_default();
    }
}

impl Default for InMemoryAccessChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessChecker for InMemoryAccessChecker {
    async fn can_manage_resolutions(&self, user_id: &UserId) -> Result<AccessResult, DomainError> {
        let capabilities = self
            .capabilities
            .lock()
            .expect("InMemoryAccessChecker: lock poisoned");
        Ok(match capabilities.get(user_id) {
            None => AccessResult::Denied(AccessDeniedReason::UnknownUser),
            Some(caps) if caps.contains(MANAGE_RESOLUTIONS) => AccessResult::Allowed,
            Some(_) => AccessResult::Denied(AccessDeniedReason::MissingCapability(
                MANAGE_RESOLUTIONS.to_string(),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clerk() -> UserId {
        UserId::new("clerk-1").unwrap()
    }

    #[tokio::test]
    async fn unknown_user_is_denied() {
        let checker = InMemoryAccessChecker::new();
        let result = checker.can_manage_resolutions(&clerk()).await.unwrap();
        assert_eq!(
            result,
            AccessResult::Denied(AccessDeniedReason::UnknownUser)
        );
    }

    #[tokio::test]
    async fn registered_user_without_capability_is_denied() {
        let checker = InMemoryAccessChecker::new();
        checker.register(clerk());

        let result = checker.can_manage_resolutions(&clerk()).await.unwrap();
        assert_eq!(
            result,
            AccessResult::Denied(AccessDeniedReason::MissingCapability(
                MANAGE_RESOLUTIONS.to_string()
            ))
        );
    }

    #[tokio::test]
    async fn granted_user_is_allowed() {
        let checker = InMemoryAccessChecker::allowing([clerk()]);
        let result = checker.can_manage_resolutions(&clerk()).await.unwrap();
        assert!(result.is_allowed());
    }
}
