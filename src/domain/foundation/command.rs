//! Command infrastructure for CQRS handlers.
//!
//! Every command handler accepts a `CommandMetadata` alongside its command
//! struct. The metadata carries the acting user plus correlation context so
//! handlers can propagate both into emitted events without growing their
//! parameter lists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// Carries authentication and correlation context through the command
/// processing pipeline and into emitted event envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command (required for authorization).
    pub user_id: UserId,

    /// Links related operations across a single user request.
    /// Generated lazily if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "api", "admin-ui").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with required user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Sets the correlation ID.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Sets the command source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating a fresh one if absent.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the command source, if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserId {
        UserId::new("clerk-1").unwrap()
    }

    #[test]
    fn new_metadata_has_no_correlation_id() {
        let meta = CommandMetadata::new(test_user());
        assert!(meta.source().is_none());
    }

    #[test]
    fn correlation_id_round_trips_when_set() {
        let meta = CommandMetadata::new(test_user()).with_correlation_id("req-42");
        assert_eq!(meta.correlation_id(), "req-42");
    }

    #[test]
    fn correlation_id_is_generated_when_absent() {
        let meta = CommandMetadata::new(test_user());
        let generated = meta.correlation_id();
        assert!(!generated.is_empty());
    }

    #[test]
    fn source_is_preserved() {
        let meta = CommandMetadata::new(test_user()).with_source("admin-ui");
        assert_eq!(meta.source(), Some("admin-ui"));
    }
}
