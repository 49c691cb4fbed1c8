//! ApproveResolutionHandler - Command handler for approving resolutions.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, ResolutionId, SerializableDomainEvent, Timestamp,
};
use crate::domain::resolution::{Resolution, ResolutionApproved, ResolutionError};
use crate::ports::{AccessChecker, EventPublisher, ResolutionRepository};

/// Command to approve a submitted resolution.
#[derive(Debug, Clone)]
pub struct ApproveResolutionCommand {
    pub resolution_id: ResolutionId,
}

/// Result of a successful approval.
#[derive(Debug, Clone)]
pub struct ApproveResolutionResult {
    pub resolution: Resolution,
    pub event: ResolutionApproved,
}

/// Handler for approving resolutions (Submitted -> Approved).
///
/// Approval makes the resolution eligible for its meeting's consent
/// agenda; it does not assign a number. Numbering happens when the
/// meeting is published.
pub struct ApproveResolutionHandler {
    repository: Arc<dyn ResolutionRepository>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ApproveResolutionHandler {
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
        cmd: ApproveResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<ApproveResolutionResult, ResolutionError> {
        self.access_checker
            .can_manage_resolutions(&metadata.user_id)
            .await?
            .into_result()
            .map_err(ResolutionError::access_denied)?;

        let mut resolution = self
            .repository
            .find_by_id(&cmd.resolution_id)
            .await?
            .ok_or(ResolutionError::NotFound(cmd.resolution_id))?;

        resolution.approve()?;

        self.repository.update(&resolution).await?;

        tracing::info!(resolution_id = %resolution.id(), "resolution approved");

        let event = ResolutionApproved {
            event_id: EventId::new(),
            resolution_id: *resolution.id(),
            approved_by: metadata.user_id.clone(),
            approved_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        Ok(ApproveResolutionResult { resolution, event })
    }
}
