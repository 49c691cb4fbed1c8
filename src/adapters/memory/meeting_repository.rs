//! In-memory meeting repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, MeetingId};
use crate::domain::meeting::Meeting;
use crate::ports::MeetingRepository;

/// `Mutex<HashMap>`-backed meeting store.
pub struct InMemoryMeetingRepository {
    meetings: Mutex<HashMap<MeetingId, Meeting>>,
}

impl InMemoryMeetingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            meetings: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds the repository with meetings (test helper).
    pub fn with_meetings(meetings: impl IntoIterator<Item = Meeting>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo
                .meetings
                .lock()
                .expect("InMemoryMeetingRepository: lock poisoned");
            for m in meetings {
                map.insert(*m.id(), m);
            }
        }
        repo
    }
}

impl Default for InMemoryMeetingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingRepository {
    async fn save(&self, meeting: &Meeting) -> Result<(), DomainError> {
        let mut map = self
            .meetings
            .lock()
            .expect("InMemoryMeetingRepository: lock poisoned");
        if map.contains_key(meeting.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Meeting already exists: {}", meeting.id()),
            ));
        }
        map.insert(*meeting.id(), meeting.clone());
        Ok(())
    }

    async fn update(&self, meeting: &Meeting) -> Result<(), DomainError> {
        let mut map = self
            .meetings
            .lock()
            .expect("InMemoryMeetingRepository: lock poisoned");
        if !map.contains_key(meeting.id()) {
            return Err(DomainError::new(
                ErrorCode::MeetingNotFound,
                format!("Meeting not found: {}", meeting.id()),
            ));
        }
        map.insert(*meeting.id(), meeting.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>, DomainError> {
        Ok(self
            .meetings
            .lock()
            .expect("InMemoryMeetingRepository: lock poisoned")
            .get(id)
            .cloned())
    }
}
