//! ChangeMeetingStatusHandler - Command handler for meeting status
//! notifications.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, MeetingId, MeetingStatus, SerializableDomainEvent, Timestamp,
};
use crate::domain::meeting::{Meeting, MeetingError, MeetingStatusChanged};
use crate::ports::{AccessChecker, EventPublisher, MeetingRepository};

/// Command to change a meeting's status.
#[derive(Debug, Clone)]
pub struct ChangeMeetingStatusCommand {
    pub meeting_id: MeetingId,
    pub new_status: MeetingStatus,
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct ChangeMeetingStatusResult {
    pub meeting: Meeting,
    pub event: MeetingStatusChanged,
}

/// Handler for meeting status changes.
///
/// The core places no constraints on meeting status transitions; it
/// persists whatever the meeting surface decided and publishes the
/// `MeetingStatusChanged` event. The publish cascade subscribes to that
/// event and fires when `new_status` is `Published`; on a synchronous
/// bus it runs before this handler returns.
///
/// A transition *away* from Published deliberately reverts nothing:
/// resolutions keep their Published status and numbers as historical
/// record.
pub struct ChangeMeetingStatusHandler {
    meeting_repository: Arc<dyn MeetingRepository>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ChangeMeetingStatusHandler {
    pub fn new(
        meeting_repository: Arc<dyn MeetingRepository>,
        access_checker: Arc<dyn AccessChecker>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            meeting_repository,
            access_checker,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ChangeMeetingStatusCommand,
        metadata: CommandMetadata,
    ) -> Result<ChangeMeetingStatusResult, MeetingError> {
        self.access_checker
            .can_manage_resolutions(&metadata.user_id)
            .await?
            .into_result()
            .map_err(MeetingError::access_denied)?;

        let mut meeting = self
            .meeting_repository
            .find_by_id(&cmd.meeting_id)
            .await?
            .ok_or(MeetingError::NotFound(cmd.meeting_id))?;

        let old_status = meeting.change_status(cmd.new_status);
        self.meeting_repository.update(&meeting).await?;

        tracing::info!(
            meeting_id = %meeting.id(),
            %old_status,
            new_status = %cmd.new_status,
            "meeting status changed"
        );

        let event = MeetingStatusChanged {
            event_id: EventId::new(),
            meeting_id: *meeting.id(),
            old_status,
            new_status: cmd.new_status,
            changed_by: metadata.user_id.clone(),
            changed_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        Ok(ChangeMeetingStatusResult { meeting, event })
    }
}
