//! ReassignResolutionHandler - Command handler for moving resolutions
//! between meetings.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, MeetingId, ResolutionId, SerializableDomainEvent, Timestamp,
};
use crate::domain::resolution::{Resolution, ResolutionError, ResolutionReassigned};
use crate::ports::{AccessChecker, EventPublisher, MeetingRepository, ResolutionRepository};

/// Command to reassign a resolution to another meeting (or unassign it).
#[derive(Debug, Clone)]
pub struct ReassignResolutionCommand {
    pub resolution_id: ResolutionId,
    /// Target meeting; `None` removes the assignment.
    pub new_meeting_id: Option<MeetingId>,
}

/// Result of a successful reassignment.
#[derive(Debug, Clone)]
pub struct ReassignResolutionResult {
    pub resolution: Resolution,
    pub event: ResolutionReassigned,
}

/// Handler for reassigning resolutions.
///
/// Reassignment is legal in every pre-publish status and silently
/// removes the resolution from the old meeting's effective agenda; the
/// stored order on that meeting is left stale and reconciled on read.
pub struct ReassignResolutionHandler {
    repository: Arc<dyn ResolutionRepository>,
    meeting_repository: Arc<dyn MeetingRepository>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ReassignResolutionHandler {
    pub fn new(
        repository: Arc<dyn ResolutionRepository>,
        meeting_repository: Arc<dyn MeetingRepository>,
        access_checker: Arc<dyn AccessChecker>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            meeting_repository,
            access_checker,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReassignResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<ReassignResolutionResult, ResolutionError> {
        self.access_checker
            .can_manage_resolutions(&metadata.user_id)
            .await?
            .into_result()
            .map_err(ResolutionError::access_denied)?;

        // Target meeting must exist before we move anything
        if let Some(meeting_id) = &cmd.new_meeting_id {
            if self
                .meeting_repository
                .find_by_id(meeting_id)
                .await?
                .is_none()
            {
                return Err(ResolutionError::validation(
                    "new_meeting_id",
                    format!("Meeting not found: {}", meeting_id),
                ));
            }
        }

        let mut resolution = self
            .repository
            .find_by_id(&cmd.resolution_id)
            .await?
            .ok_or(ResolutionError::NotFound(cmd.resolution_id))?;

        let old_meeting_id = resolution.assigned_meeting_id().copied();
        resolution.reassign(cmd.new_meeting_id)?;

        self.repository.update(&resolution).await?;

        tracing::info!(
            resolution_id = %resolution.id(),
            old_meeting = ?old_meeting_id,
            new_meeting = ?cmd.new_meeting_id,
            "resolution reassigned"
        );

        let event = ResolutionReassigned {
            event_id: EventId::new(),
            resolution_id: *resolution.id(),
            old_meeting_id,
            new_meeting_id: cmd.new_meeting_id,
            reassigned_by: metadata.user_id.clone(),
            reassigned_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        Ok(ReassignResolutionResult { resolution, event })
    }
}
