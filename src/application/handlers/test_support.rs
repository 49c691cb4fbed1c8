//! Shared mocks and fixtures for the handler tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, EventEnvelope, MeetingId, ResolutionId, Timestamp,
    UserId,
};
use crate::domain::meeting::Meeting;
use crate::domain::resolution::Resolution;
use crate::ports::{
    AccessChecker, AccessDeniedReason, AccessResult, EventPublisher, MeetingRepository,
    ResolutionRepository,
};

pub struct MockResolutionRepository {
    resolutions: Mutex<Vec<Resolution>>,
    updated: Mutex<Vec<Resolution>>,
    fail_update: bool,
    fail_update_for: Mutex<Option<ResolutionId>>,
}

impl MockResolutionRepository {
    pub fn with(resolutions: Vec<Resolution>) -> Self {
        Self {
            resolutions: Mutex::new(resolutions),
            updated: Mutex::new(Vec::new()),
            fail_update: false,
            fail_update_for: Mutex::new(None),
        }
    }

    pub fn failing_update(resolutions: Vec<Resolution>) -> Self {
        Self {
            resolutions: Mutex::new(resolutions),
            updated: Mutex::new(Vec::new()),
            fail_update: true,
            fail_update_for: Mutex::new(None),
        }
    }

    /// Fails `update` for one resolution only, until [`Self::stop_failing`].
    pub fn failing_update_for(resolutions: Vec<Resolution>, id: ResolutionId) -> Self {
        Self {
            resolutions: Mutex::new(resolutions),
            updated: Mutex::new(Vec::new()),
            fail_update: false,
            fail_update_for: Mutex::new(Some(id)),
        }
    }

    pub fn stop_failing(&self) {
        *self.fail_update_for.lock().unwrap() = None;
    }

    pub fn updated(&self) -> Vec<Resolution> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolutionRepository for MockResolutionRepository {
    async fn save(&self, resolution: &Resolution) -> Result<(), DomainError> {
        self.resolutions.lock().unwrap().push(resolution.clone());
        Ok(())
    }

    async fn update(&self, resolution: &Resolution) -> Result<(), DomainError> {
        if self.fail_update || *self.fail_update_for.lock().unwrap() == Some(*resolution.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated update failure",
            ));
        }
        let mut resolutions = self.resolutions.lock().unwrap();
        if let Some(stored) = resolutions.iter_mut().find(|r| r.id() == resolution.id()) {
            *stored = resolution.clone();
        }
        self.updated.lock().unwrap().push(resolution.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ResolutionId) -> Result<Option<Resolution>, DomainError> {
        Ok(self
            .resolutions
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn find_assigned_to_meeting(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Vec<Resolution>, DomainError> {
        Ok(self
            .resolutions
            .lock()
            .unwrap()
            .iter()
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
            .unwrap()
            .iter()
            .filter(|r| r.is_eligible_for(meeting_id))
            .cloned()
            .collect())
    }
}

pub struct MockMeetingRepository {
    meetings: Mutex<Vec<Meeting>>,
    updated: Mutex<Vec<Meeting>>,
}

impl MockMeetingRepository {
    pub fn with(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings: Mutex::new(meetings),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn updated(&self) -> Vec<Meeting> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingRepository for MockMeetingRepository {
    async fn save(&self, meeting: &Meeting) -> Result<(), DomainError> {
        self.meetings.lock().unwrap().push(meeting.clone());
        Ok(())
    }

    async fn update(&self, meeting: &Meeting) -> Result<(), DomainError> {
        let mut meetings = self.meetings.lock().unwrap();
        if let Some(stored) = meetings.iter_mut().find(|m| m.id() == meeting.id()) {
            *stored = meeting.clone();
        }
        self.updated.lock().unwrap().push(meeting.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>, DomainError> {
        Ok(self
            .meetings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }
}

pub struct MockAccessChecker {
    result: AccessResult,
}

impl MockAccessChecker {
    pub fn allowed() -> Self {
        Self {
            result: AccessResult::Allowed,
        }
    }

    pub fn denied(reason: AccessDeniedReason) -> Self {
        Self {
            result: AccessResult::Denied(reason),
        }
    }
}

#[async_trait]
impl AccessChecker for MockAccessChecker {
    async fn can_manage_resolutions(&self, _user_id: &UserId) -> Result<AccessResult, DomainError> {
        Ok(self.result.clone())
    }
}

pub struct MockEventPublisher {
    published: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

pub fn test_user() -> UserId {
    UserId::new("clerk-1").unwrap()
}

pub fn test_metadata() -> CommandMetadata {
    CommandMetadata::new(test_user()).with_correlation_id("test-correlation")
}

pub fn draft_resolution() -> Resolution {
    Resolution::new(ResolutionId::new(), "Approve FY26 audit contract".to_string()).unwrap()
}

pub fn submittable_resolution() -> Resolution {
    let mut r = draft_resolution();
    r.set_subject("Audit contract".to_string()).unwrap();
    r.reassign(Some(MeetingId::new())).unwrap();
    r
}

pub fn submitted_resolution() -> Resolution {
    let mut r = submittable_resolution();
    r.submit().unwrap();
    r
}

pub fn approved_resolution() -> Resolution {
    let mut r = submitted_resolution();
    r.approve().unwrap();
    r
}

pub fn test_meeting() -> Meeting {
    Meeting::new(
        MeetingId::new(),
        "Regular Board Meeting".to_string(),
        Timestamp::now(),
        90,
    )
    .unwrap()
}
