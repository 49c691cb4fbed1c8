//! Meeting repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MeetingId};
use crate::domain::meeting::Meeting;

/// Repository port for Meeting aggregate persistence.
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Save a new meeting.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, meeting: &Meeting) -> Result<(), DomainError>;

    /// Update an existing meeting.
    ///
    /// # Errors
    ///
    /// - `MeetingNotFound` if the meeting doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, meeting: &Meeting) -> Result<(), DomainError>;

    /// Find a meeting by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MeetingRepository) {}
    }
}
