//! PublishCascadeHandler - Publishes a meeting's consent agenda.
//!
//! Subscribed to `meeting.status_changed.v1`; fires only when the new
//! status is `Published`. For every resolution on the meeting's agenda
//! (Approved and assigned, or already published under the meeting) it
//! assigns the position-based resolution number and moves the
//! resolution to Published, persisting one at a time. Already published
//! items get an idempotent number refresh at their position.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::agenda;
use crate::domain::foundation::{
    DomainError, ErrorCode, EventEnvelope, EventId, MeetingId, MeetingStatus, ResolutionId,
    SerializableDomainEvent, Timestamp,
};
use crate::domain::meeting::MeetingStatusChanged;
use crate::domain::numbering::ResolutionNumber;
use crate::domain::resolution::ResolutionPublished;
use crate::ports::{EventHandler, EventPublisher, MeetingRepository, ResolutionRepository};

/// Outcome of one cascade run: which resolutions were published and
/// which failed, with the failure per id. The loop is best-effort, so
/// both lists can be non-empty.
#[derive(Debug, Clone, Default)]
pub struct CascadeReport {
    pub published: Vec<ResolutionId>,
    pub failed: Vec<(ResolutionId, DomainError)>,
}

impl CascadeReport {
    /// True when every eligible resolution was published.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Coordinator that cascades a meeting publish onto its resolutions.
///
/// # Semantics
///
/// - The snapshot is taken once, at the start of a run. A resolution
///   reassigned away after the snapshot but before its persistence may
///   still be published under this meeting; closing that window
///   requires a per-meeting lock in the storage layer.
/// - Resolutions already published under the meeting keep their place
///   in the order, so a re-run after a partial failure continues the
///   sequence from where it stands instead of restarting at 1.
/// - The loop is best-effort, not transactional: a persistence failure
///   leaves earlier positions published and is reported per id in the
///   [`CascadeReport`]. Callers decide whether to retry by re-running;
///   a re-run with unchanged eligibility and order assigns identical
///   numbers.
/// - Re-running after the custom order changed renumbers the already
///   published resolutions: numbers always reflect the latest order.
/// - A meeting transition away from Published reverts nothing here;
///   statuses and numbers stand as historical record.
pub struct PublishCascadeHandler {
    resolution_repository: Arc<dyn ResolutionRepository>,
    meeting_repository: Arc<dyn MeetingRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl PublishCascadeHandler {
    pub fn new(
        resolution_repository: Arc<dyn ResolutionRepository>,
        meeting_repository: Arc<dyn MeetingRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            resolution_repository,
            meeting_repository,
            event_publisher,
        }
    }

    /// Runs the cascade for a meeting. Also callable directly, e.g. to
    /// retry after a partial failure.
    pub async fn run(&self, meeting_id: &MeetingId) -> Result<CascadeReport, DomainError> {
        let meeting = self
            .meeting_repository
            .find_by_id(meeting_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MeetingNotFound,
                    format!("Meeting not found: {}", meeting_id),
                )
            })?;

        // Snapshot taken exactly once per run. Everything assigned to
        // the meeting, so items published by an earlier run keep their
        // positions and the failed subset continues the sequence.
        let assigned = self
            .resolution_repository
            .find_assigned_to_meeting(meeting_id)
            .await?;

        let order = agenda::effective_order(meeting_id, meeting.consent_agenda_order(), &assigned);

        let mut report = CascadeReport::default();
        for (position, id) in order.iter().enumerate() {
            let sequence = (position as u32) + 1;
            let number = ResolutionNumber::derive(meeting.scheduled_at(), sequence);
            match self.publish_one(id, meeting_id, number, sequence, &assigned).await {
                Ok(()) => report.published.push(*id),
                Err(err) => {
                    tracing::warn!(
                        resolution_id = %id,
                        meeting_id = %meeting_id,
                        error = %err,
                        "cascade failed to publish resolution"
                    );
                    report.failed.push((*id, err));
                }
            }
        }

        tracing::info!(
            meeting_id = %meeting_id,
            published = report.published.len(),
            failed = report.failed.len(),
            "publish cascade completed"
        );

        Ok(report)
    }

    async fn publish_one(
        &self,
        id: &ResolutionId,
        meeting_id: &MeetingId,
        number: ResolutionNumber,
        sequence: u32,
        snapshot: &[crate::domain::resolution::Resolution],
    ) -> Result<(), DomainError> {
        let mut resolution = snapshot
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ResolutionNotFound,
                    format!("Resolution not found in snapshot: {}", id),
                )
            })?;

        resolution.publish_in(*meeting_id, number.clone(), sequence)?;
        self.resolution_repository.update(&resolution).await?;

        let event = ResolutionPublished {
            event_id: EventId::new(),
            resolution_id: *id,
            meeting_id: *meeting_id,
            resolution_number: number,
            sequence,
            published_at: Timestamp::now(),
        };
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(())
    }
}

#[async_trait]
impl EventHandler for PublishCascadeHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let status_changed: MeetingStatusChanged = event.payload_as().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Malformed meeting.status_changed payload: {}", e),
            )
        })?;

        if status_changed.new_status != MeetingStatus::Published {
            return Ok(());
        }

        // Partial failures are reported, not propagated: retrying the
        // whole event would re-emit the successful subset's events.
        let report = self.run(&status_changed.meeting_id).await?;
        if !report.is_complete() {
            tracing::warn!(
                meeting_id = %status_changed.meeting_id,
                failed = report.failed.len(),
                "publish cascade left unpublished resolutions"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "PublishCascadeHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        MockEventPublisher, MockMeetingRepository, MockResolutionRepository,
    };
    use crate::domain::foundation::{ResolutionStatus, UserId};
    use crate::domain::meeting::{ConsentAgendaOrder, Meeting};
    use crate::domain::resolution::Resolution;
    use chrono::{TimeZone, Utc};

    fn march_meeting() -> Meeting {
        Meeting::new(
            MeetingId::new(),
            "Regular Board Meeting".to_string(),
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 3, 10, 19, 0, 0).unwrap()),
            90,
        )
        .unwrap()
    }

    fn approved_for(meeting_id: MeetingId) -> Resolution {
        let mut r = Resolution::new(ResolutionId::new(), "Cascade test".to_string()).unwrap();
        r.set_subject("Subject".to_string()).unwrap();
        r.reassign(Some(meeting_id)).unwrap();
        r.submit().unwrap();
        r.approve().unwrap();
        r
    }

    fn status_changed_envelope(meeting_id: MeetingId, new_status: MeetingStatus) -> EventEnvelope {
        MeetingStatusChanged {
            event_id: EventId::new(),
            meeting_id,
            old_status: MeetingStatus::Pending,
            new_status,
            changed_by: UserId::new("clerk-1").unwrap(),
            changed_at: Timestamp::now(),
        }
        .to_envelope()
    }

    #[tokio::test]
    async fn publishes_in_creation_order_without_custom_order() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);
        let r2 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::with(vec![r1.clone(), r2.clone()]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler =
            PublishCascadeHandler::new(resolutions.clone(), meetings, publisher.clone());
        let report = handler.run(&meeting_id).await.unwrap();

        assert_eq!(report.published, vec![*r1.id(), *r2.id()]);
        assert!(report.is_complete());

        let published_r1 = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        let published_r2 = resolutions.find_by_id(r2.id()).await.unwrap().unwrap();
        assert_eq!(published_r1.status(), ResolutionStatus::Published);
        assert_eq!(published_r1.resolution_number().unwrap().as_str(), "25.3.1");
        assert_eq!(published_r1.sequence_in_meeting(), Some(1));
        assert_eq!(published_r2.resolution_number().unwrap().as_str(), "25.3.2");
        assert_eq!(published_r2.published_in_meeting_id(), Some(&meeting_id));

        let events = publisher.events_of_type("resolution.published.v1");
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn custom_order_drives_numbering() {
        let mut meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);
        let r2 = approved_for(meeting_id);
        meeting.set_consent_agenda_order(ConsentAgendaOrder::new([*r2.id(), *r1.id()]));

        let resolutions = Arc::new(MockResolutionRepository::with(vec![r1.clone(), r2.clone()]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler =
            PublishCascadeHandler::new(resolutions.clone(), meetings, publisher);
        let report = handler.run(&meeting_id).await.unwrap();

        assert_eq!(report.published, vec![*r2.id(), *r1.id()]);
        let published_r2 = resolutions.find_by_id(r2.id()).await.unwrap().unwrap();
        let published_r1 = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        assert_eq!(published_r2.resolution_number().unwrap().as_str(), "25.3.1");
        assert_eq!(published_r1.resolution_number().unwrap().as_str(), "25.3.2");
    }

    #[tokio::test]
    async fn second_run_assigns_identical_numbers() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::with(vec![r1.clone()]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler =
            PublishCascadeHandler::new(resolutions.clone(), meetings, publisher);
        handler.run(&meeting_id).await.unwrap();
        let first = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();

        // Second run: r1 is now Published and stays at its position, so
        // the refresh re-assigns the same number and sequence.
        let report = handler.run(&meeting_id).await.unwrap();
        assert_eq!(report.published, vec![*r1.id()]);
        let second = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        assert_eq!(first.resolution_number(), second.resolution_number());
        assert_eq!(first.sequence_in_meeting(), second.sequence_in_meeting());
    }

    #[tokio::test]
    async fn retry_after_partial_failure_continues_the_sequence() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);
        let r2 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::failing_update_for(
            vec![r1.clone(), r2.clone()],
            *r2.id(),
        ));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler = PublishCascadeHandler::new(resolutions.clone(), meetings, publisher);
        let first = handler.run(&meeting_id).await.unwrap();
        assert_eq!(first.published, vec![*r1.id()]);
        assert_eq!(first.failed.len(), 1);

        // Storage recovers; retrying must not renumber from 1.
        resolutions.stop_failing();
        let second = handler.run(&meeting_id).await.unwrap();
        assert!(second.is_complete());

        let published_r1 = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        let published_r2 = resolutions.find_by_id(r2.id()).await.unwrap().unwrap();
        assert_eq!(published_r1.resolution_number().unwrap().as_str(), "25.3.1");
        assert_eq!(published_r2.resolution_number().unwrap().as_str(), "25.3.2");
        assert_eq!(published_r2.sequence_in_meeting(), Some(2));
    }

    #[tokio::test]
    async fn rerun_after_order_change_renumbers_published_resolutions() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);
        let r2 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::with(vec![r1.clone(), r2.clone()]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting.clone()]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler =
            PublishCascadeHandler::new(resolutions.clone(), meetings.clone(), publisher);
        handler.run(&meeting_id).await.unwrap();

        let mut reordered = meeting;
        reordered.set_consent_agenda_order(ConsentAgendaOrder::new([*r2.id(), *r1.id()]));
        meetings.update(&reordered).await.unwrap();

        handler.run(&meeting_id).await.unwrap();

        let published_r2 = resolutions.find_by_id(r2.id()).await.unwrap().unwrap();
        let published_r1 = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        assert_eq!(published_r2.resolution_number().unwrap().as_str(), "25.3.1");
        assert_eq!(published_r2.sequence_in_meeting(), Some(1));
        assert_eq!(published_r1.resolution_number().unwrap().as_str(), "25.3.2");
    }

    #[tokio::test]
    async fn handler_ignores_non_publish_transitions() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::with(vec![r1.clone()]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler =
            PublishCascadeHandler::new(resolutions.clone(), meetings, publisher.clone());
        handler
            .handle(status_changed_envelope(meeting_id, MeetingStatus::Private))
            .await
            .unwrap();

        let untouched = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        assert_eq!(untouched.status(), ResolutionStatus::Approved);
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn handler_runs_cascade_on_publish_transition() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::with(vec![r1.clone()]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler =
            PublishCascadeHandler::new(resolutions.clone(), meetings, publisher.clone());
        handler
            .handle(status_changed_envelope(meeting_id, MeetingStatus::Published))
            .await
            .unwrap();

        let published = resolutions.find_by_id(r1.id()).await.unwrap().unwrap();
        assert_eq!(published.status(), ResolutionStatus::Published);
        assert_eq!(publisher.events_of_type("resolution.published.v1").len(), 1);
    }

    #[tokio::test]
    async fn persistence_failure_is_reported_per_id() {
        let meeting = march_meeting();
        let meeting_id = *meeting.id();
        let r1 = approved_for(meeting_id);
        let r2 = approved_for(meeting_id);

        let resolutions = Arc::new(MockResolutionRepository::failing_update(vec![
            r1.clone(),
            r2.clone(),
        ]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![meeting]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler = PublishCascadeHandler::new(resolutions, meetings, publisher.clone());
        let report = handler.run(&meeting_id).await.unwrap();

        assert!(report.published.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert!(!report.is_complete());
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn unknown_meeting_fails_the_run() {
        let resolutions = Arc::new(MockResolutionRepository::with(vec![]));
        let meetings = Arc::new(MockMeetingRepository::with(vec![]));
        let publisher = Arc::new(MockEventPublisher::new());

        let handler = PublishCascadeHandler::new(resolutions, meetings, publisher);
        let result = handler.run(&MeetingId::new()).await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::MeetingNotFound);
    }
}
