//! In-memory resolution repository.
//!
//! Backs tests and default wiring; production deployments supply their
//! own storage adapter behind the same port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, MeetingId, ResolutionId};
use crate::domain::resolution::Resolution;
use crate::ports::ResolutionRepository;

/// `Mutex<HashMap>`-backed resolution store.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. Acceptable for
/// in-memory wiring; not intended for production storage.
pub struct InMemoryResolutionRepository {
    resolutions: Mutex<HashMap<ResolutionId, Resolution>>,
}

impl InMemoryResolutionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            resolutions: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds the repository with resolutions (test helper).
    pub fn with_resolutions(resolutions: impl IntoIterator<Item = Resolution>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo
                .resolutions
                .lock()
                .expect("InMemoryResolutionRepository: lock poisoned");
            for r in resolutions {
                map.insert(*r.id(), r);
            }
        }
        repo
    }

    /// Number of stored resolutions.
    pub fn len(&self) -> usize {
        self.resolutions
            .lock()
            .expect("InMemoryResolutionRepository: lock poisoned")
            .len()
    }

    /// True if no resolutions are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryResolutionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolutionRepository for InMemoryResolutionRepository {
    async fn save(&self, resolution: &Resolution) -> Result<(), DomainError> {
        let mut map = self
            .resolutions
            .lock()
            .expect("InMemoryResolutionRepository: lock poisoned");
        if map.contains_key(resolution.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Resolution already exists: {}", resolution.id()),
            ));
        }
        map.insert(*resolution.id(), resolution.clone());
        Ok(())
    }

    async fn update(&self, resolution: &Resolution) -> Result<(), DomainError> {
        let mut map = self
            .resolutions
            .lock()
            .expect("InMemoryResolutionRepository: lock poisoned");
        if !map.contains_key(resolution.id()) {
            return Err(DomainError::new(
                ErrorCode::ResolutionNotFound,
                format!("Resolution not found: {}", resolution.id()),
            ));
        }
        map.insert(*resolution.id(), resolution.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ResolutionId) -> Result<Option<Resolution>, DomainError> {
        Ok(self
            .resolutions
            .lock()
            .expect("InMemoryResolutionRepository: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn find_assigned_to_meeting(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Vec<Resolution>, DomainError> {
        Ok(self
            .resolutions
            .lock()
            .expect("InMemoryResolutionRepository: lock poisoned")
            .values()
            .filter(|r| r.assigned_meeting_id() == Some(meeting_id))
            .cloned()
            .collect())
    }

    async fn find_approved_by_meeting(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Vec<Resolution>, DomainError> {
        Ok(self
            .resolutions
            .lock()
            .expect("InMemoryResolutionRepository: lock poisoned")
            .values()
            .filter(|r| r.is_eligible_for(meeting_id))
            .cloned()
            .collect())
    }
}
