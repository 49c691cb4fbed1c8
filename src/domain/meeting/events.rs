//! Meeting domain events.
//!
//! - `MeetingStatusChanged` - Status transition notification; the publish
//!   cascade subscribes to this
//! - `AgendaOrderSaved` - Custom consent-agenda order persisted

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventId, MeetingId, MeetingStatus, ResolutionId, Timestamp, UserId,
};

/// Published whenever a meeting's status changes.
///
/// Carries old and new status so subscribers can react to specific
/// transitions; the publish cascade only acts when `new_status` is
/// `Published`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingStatusChanged {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the meeting whose status changed.
    pub meeting_id: MeetingId,

    /// Status before the change.
    pub old_status: MeetingStatus,

    /// Status after the change.
    pub new_status: MeetingStatus,

    /// User who changed the status.
    pub changed_by: UserId,

    /// When the change occurred.
    pub changed_at: Timestamp,
}

domain_event!(
    MeetingStatusChanged,
    event_type = "meeting.status_changed.v1",
    schema_version = 1,
    aggregate_id = meeting_id,
    aggregate_type = "Meeting",
    occurred_at = changed_at,
    event_id = event_id
);

/// Published when a custom consent-agenda order is saved for a meeting.
///
/// Carries the persisted (already filtered) order and the ids that were
/// silently dropped for being ineligible, for audit purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaOrderSaved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the meeting whose order changed.
    pub meeting_id: MeetingId,

    /// The persisted order after eligibility filtering.
    pub order: Vec<ResolutionId>,

    /// Ids submitted by the caller but dropped as ineligible.
    pub dropped: Vec<ResolutionId>,

    /// User who saved the order.
    pub saved_by: UserId,

    /// When the save occurred.
    pub saved_at: Timestamp,
}

domain_event!(
    AgendaOrderSaved,
    event_type = "meeting.agenda_order_saved.v1",
    schema_version = 1,
    aggregate_id = meeting_id,
    aggregate_type = "Meeting",
    occurred_at = saved_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn meeting_status_changed_envelope_routes_by_type() {
        let event = MeetingStatusChanged {
            event_id: EventId::new(),
            meeting_id: MeetingId::new(),
            old_status: MeetingStatus::Pending,
            new_status: MeetingStatus::Published,
            changed_by: UserId::new("clerk-1").unwrap(),
            changed_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "meeting.status_changed.v1");
        assert_eq!(envelope.aggregate_type, "Meeting");
        assert_eq!(envelope.aggregate_id, event.meeting_id.to_string());

        let restored: MeetingStatusChanged = envelope.payload_as().unwrap();
        assert_eq!(restored.new_status, MeetingStatus::Published);
    }

    #[test]
    fn agenda_order_saved_records_dropped_ids() {
        let kept = ResolutionId::new();
        let dropped = ResolutionId::new();
        let event = AgendaOrderSaved {
            event_id: EventId::new(),
            meeting_id: MeetingId::new(),
            order: vec![kept],
            dropped: vec![dropped],
            saved_by: UserId::new("clerk-1").unwrap(),
            saved_at: Timestamp::now(),
        };

        assert_eq!(event.schema_version(), 1);
        let envelope = event.to_envelope();
        let restored: AgendaOrderSaved = envelope.payload_as().unwrap();
        assert_eq!(restored.order, vec![kept]);
        assert_eq!(restored.dropped, vec![dropped]);
    }
}
