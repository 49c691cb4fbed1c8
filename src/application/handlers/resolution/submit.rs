//! SubmitResolutionHandler - Command handler for submitting resolutions.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, ResolutionId, SerializableDomainEvent, Timestamp,
};
use crate::domain::resolution::{Resolution, ResolutionError, ResolutionSubmitted};
use crate::ports::{AccessChecker, EventPublisher, ResolutionRepository};

/// Command to submit a resolution for review.
#[derive(Debug, Clone)]
pub struct SubmitResolutionCommand {
    pub resolution_id: ResolutionId,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitResolutionResult {
    pub resolution: Resolution,
    pub event: ResolutionSubmitted,
}

/// Handler for submitting resolutions (Draft/Denied -> Submitted).
pub struct SubmitResolutionHandler {
    repository: Arc<dyn ResolutionRepository>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SubmitResolutionHandler {
    pub fn new(
        repository: Arc<dyn ResolutionRepository>,
        access_checker: Arc<dyn AccessChecker>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            access_checker,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitResolutionResult, ResolutionError> {
        // 1. Check access before touching any state
        self.access_checker
            .can_manage_resolutions(&metadata.user_id)
            .await?
            .into_result()
            .map_err(ResolutionError::access_denied)?;

        // 2. Load and transition
        let mut resolution = self
            .repository
            .find_by_id(&cmd.resolution_id)
            .await?
            .ok_or(ResolutionError::NotFound(cmd.resolution_id))?;

        resolution.submit()?;

        // submit() guarantees an assigned meeting
        let meeting_id = *resolution.assigned_meeting_id().ok_or_else(|| {
            ResolutionError::validation("assigned_meeting_id", "Meeting assignment missing")
        })?;

        // 3. Persist
        self.repository.update(&resolution).await?;

        tracing::info!(
            resolution_id = %resolution.id(),
            meeting_id = %meeting_id,
            "resolution submitted"
        );

        // 4. Publish event
        let event = ResolutionSubmitted {
            event_id: EventId::new(),
            resolution_id: *resolution.id(),
            meeting_id,
            submitted_by: metadata.user_id.clone(),
            submitted_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        Ok(SubmitResolutionResult { resolution, event })
    }
}
