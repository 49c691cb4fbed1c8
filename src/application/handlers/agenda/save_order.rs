//! SaveAgendaOrderHandler - Command handler for persisting a custom
//! consent-agenda order.

use std::sync::Arc;

use crate::domain::agenda;
use crate::domain::foundation::{
    CommandMetadata, EventId, MeetingId, ResolutionId, SerializableDomainEvent, Timestamp,
};
use crate::domain::meeting::{AgendaOrderSaved, ConsentAgendaOrder, MeetingError};
use crate::ports::{AccessChecker, EventPublisher, MeetingRepository, ResolutionRepository};

/// Command to save a custom consent-agenda order for a meeting.
#[derive(Debug, Clone)]
pub struct SaveAgendaOrderCommand {
    pub meeting_id: MeetingId,
    pub ordered_ids: Vec<ResolutionId>,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveAgendaOrderResult {
    /// The order actually persisted, after eligibility filtering.
    pub order: ConsentAgendaOrder,
    /// Ids from the command that were dropped as ineligible or unknown.
    pub dropped: Vec<ResolutionId>,
}

/// Handler for saving consent-agenda orders.
///
/// Ineligible or unknown ids in the proposed order are silently dropped
/// rather than rejected; the filtered list is persisted verbatim. The
/// operation is last-write-wins: concurrent saves on the same meeting
/// are not merged, the later one replaces the earlier. Re-applying the
/// same valid list is a no-op in effect.
pub struct SaveAgendaOrderHandler {
    meeting_repository: Arc<dyn MeetingRepository>,
    resolution_repository: Arc<dyn ResolutionRepository>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SaveAgendaOrderHandler {
    pub fn new(
        meeting_repository: Arc<dyn MeetingRepository>,
        resolution_repository: Arc<dyn ResolutionRepository>,
        access_checker: Arc<dyn AccessChecker>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            meeting_repository,
            resolution_repository,
            access_checker,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SaveAgendaOrderCommand,
        metadata: CommandMetadata,
    ) -> Result<SaveAgendaOrderResult, MeetingError> {
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

        let eligible = self
            .resolution_repository
            .find_approved_by_meeting(&cmd.meeting_id)
            .await?;

        let (order, dropped) =
            agenda::partition_eligible(&cmd.meeting_id, &cmd.ordered_ids, &eligible);

        if !dropped.is_empty() {
            tracing::debug!(
                meeting_id = %cmd.meeting_id,
                dropped = dropped.len(),
                "ineligible ids dropped from proposed agenda order"
            );
        }

        meeting.set_consent_agenda_order(order.clone());
        self.meeting_repository.update(&meeting).await?;

        let event = AgendaOrderSaved {
            event_id: EventId::new(),
            meeting_id: cmd.meeting_id,
            order: order.ids().to_vec(),
            dropped: dropped.clone(),
            saved_by: metadata.user_id.clone(),
            saved_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        Ok(SaveAgendaOrderResult { order, dropped })
    }
}
