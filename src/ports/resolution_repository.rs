//! Resolution repository port.
//!
//! Defines the contract for persisting and retrieving Resolution
//! aggregates. The reorder command filters against the eligibility query
//! (`find_approved_by_meeting`); the agenda listing and the publish
//! cascade order over `find_assigned_to_meeting`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MeetingId, ResolutionId};
use crate::domain::resolution::Resolution;

/// Repository port for Resolution aggregate persistence.
#[async_trait]
pub trait ResolutionRepository: Send + Sync {
    /// Save a new resolution.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, resolution: &Resolution) -> Result<(), DomainError>;

    /// Update an existing resolution.
    ///
    /// # Errors
    ///
    /// - `ResolutionNotFound` if the resolution doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, resolution: &Resolution) -> Result<(), DomainError>;

    /// Find a resolution by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ResolutionId) -> Result<Option<Resolution>, DomainError>;

    /// Find all resolutions assigned to a meeting, whatever their status.
    async fn find_assigned_to_meeting(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Vec<Resolution>, DomainError>;

    /// Find the resolutions eligible for a meeting's consent agenda:
    /// status Approved and assigned to the meeting.
    async fn find_approved_by_meeting(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Vec<Resolution>, DomainError>;
}
