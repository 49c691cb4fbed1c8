//! GetMeetingResolutionsHandler - Query for a meeting's consent agenda.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::agenda;
use crate::domain::foundation::{MeetingId, ResolutionId};
use crate::domain::meeting::MeetingError;
use crate::domain::numbering::ResolutionNumber;
use crate::ports::{MeetingRepository, ResolutionRepository};

/// One row of a meeting's consent agenda, in effective order.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaEntry {
    pub id: ResolutionId,
    /// Title prefixed with the resolution number: persisted once
    /// published, otherwise the live would-be number for the entry's
    /// current position.
    pub formatted_title: String,
    pub subject: String,
    pub fiscal_impact: bool,
}

/// Query handler producing the effective consent agenda for display.
///
/// Numbers shown for unpublished entries are provisional: they shift as
/// eligibility or custom order changes, and only become stable when the
/// meeting is published.
pub struct GetMeetingResolutionsHandler {
    meeting_repository: Arc<dyn MeetingRepository>,
    resolution_repository: Arc<dyn ResolutionRepository>,
}

impl GetMeetingResolutionsHandler {
    pub fn new(
        meeting_repository: Arc<dyn MeetingRepository>,
        resolution_repository: Arc<dyn ResolutionRepository>,
    ) -> Self {
        Self {
            meeting_repository,
            resolution_repository,
        }
    }

    pub async fn handle(&self, meeting_id: MeetingId) -> Result<Vec<AgendaEntry>, MeetingError> {
        let meeting = self
            .meeting_repository
            .find_by_id(&meeting_id)
            .await?
            .ok_or(MeetingError::NotFound(meeting_id))?;

        let assigned = self
            .resolution_repository
            .find_assigned_to_meeting(&meeting_id)
            .await?;

        let order = agenda::effective_order(&meeting_id, meeting.consent_agenda_order(), &assigned);

        let mut entries = Vec::with_capacity(order.len());
        for (position, id) in order.iter().enumerate() {
            let Some(resolution) = assigned.iter().find(|r| r.id() == id) else {
                continue; // the order only contains assigned ids
            };
            let number = match resolution.resolution_number() {
                Some(number) => number.clone(),
                None => {
                    ResolutionNumber::derive(meeting.scheduled_at(), (position as u32) + 1)
                }
            };
            entries.push(AgendaEntry {
                id: *id,
                formatted_title: format!("{} {}", number, resolution.title()),
                subject: resolution.subject().to_string(),
                fiscal_impact: resolution.fiscal_impact(),
            });
        }

        Ok(entries)
    }
}
