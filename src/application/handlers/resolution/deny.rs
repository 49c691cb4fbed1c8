//! DenyResolutionHandler - Command handler for denying resolutions.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, ResolutionId, SerializableDomainEvent, Timestamp,
};
use crate::domain::resolution::{Resolution, ResolutionDenied, ResolutionError};
use crate::ports::{AccessChecker, EventPublisher, ResolutionRepository};

/// Command to deny a submitted resolution.
#[derive(Debug, Clone)]
pub struct DenyResolutionCommand {
    pub resolution_id: ResolutionId,
}

/// Result of a successful denial.
#[derive(Debug, Clone)]
pub struct DenyResolutionResult {
    pub resolution: Resolution,
    pub event: ResolutionDenied,
}

/// Handler for denying resolutions (Submitted -> Denied).
///
/// A denied resolution can be edited and resubmitted; denial is not
/// terminal.
pub struct DenyResolutionHandler {
    repository: Arc<dyn ResolutionRepository>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DenyResolutionHandler {
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
        cmd: DenyResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<DenyResolutionResult, ResolutionError> {
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

        resolution.deny()?;

        self.repository.update(&resolution).await?;

        tracing::info!(resolution_id = %resolution.id(), "resolution denied");

        let event = ResolutionDenied {
            event_id: EventId::new(),
            resolution_id: *resolution.id(),
            denied_by: metadata.user_id.clone(),
            denied_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        Ok(DenyResolutionResult { resolution, event })
    }
}
