//! Resolution domain events.
//!
//! Published when workflow transitions occur:
//! - `ResolutionSubmitted` - Submitted for review
//! - `ResolutionApproved` - Approved by a reviewer
//! - `ResolutionDenied` - Denied by a reviewer
//! - `ResolutionReassigned` - Moved to a different meeting
//! - `ResolutionPublished` - Numbered and published by the cascade

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventId, MeetingId, ResolutionId, Timestamp, UserId,
};
use crate::domain::numbering::ResolutionNumber;

/// Published when a resolution is submitted for review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionSubmitted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the submitted resolution.
    pub resolution_id: ResolutionId,

    /// Meeting the resolution is assigned to.
    pub meeting_id: MeetingId,

    /// User who submitted.
    pub submitted_by: UserId,

    /// When the submission occurred.
    pub submitted_at: Timestamp,
}

domain_event!(
    ResolutionSubmitted,
    event_type = "resolution.submitted.v1",
    schema_version = 1,
    aggregate_id = resolution_id,
    aggregate_type = "Resolution",
    occurred_at = submitted_at,
    event_id = event_id
);

/// Published when a reviewer approves a resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionApproved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the approved resolution.
    pub resolution_id: ResolutionId,

    /// Reviewer who approved.
    pub approved_by: UserId,

    /// When the approval occurred.
    pub approved_at: Timestamp,
}

domain_event!(
    ResolutionApproved,
    event_type = "resolution.approved.v1",
    schema_version = 1,
    aggregate_id = resolution_id,
    aggregate_type = "Resolution",
    occurred_at = approved_at,
    event_id = event_id
);

/// Published when a reviewer denies a resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionDenied {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the denied resolution.
    pub resolution_id: ResolutionId,

    /// Reviewer who denied.
    pub denied_by: UserId,

    /// When the denial occurred.
    pub denied_at: Timestamp,
}

domain_event!(
    ResolutionDenied,
    event_type = "resolution.denied.v1",
    schema_version = 1,
    aggregate_id = resolution_id,
    aggregate_type = "Resolution",
    occurred_at = denied_at,
    event_id = event_id
);

/// Published when a resolution is reassigned to a different meeting.
///
/// Captures both meetings so agenda read models can prune the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReassigned {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the reassigned resolution.
    pub resolution_id: ResolutionId,

    /// Previous meeting, if any.
    pub old_meeting_id: Option<MeetingId>,

    /// New meeting, if any.
    pub new_meeting_id: Option<MeetingId>,

    /// User who reassigned.
    pub reassigned_by: UserId,

    /// When the reassignment occurred.
    pub reassigned_at: Timestamp,
}

domain_event!(
    ResolutionReassigned,
    event_type = "resolution.reassigned.v1",
    schema_version = 1,
    aggregate_id = resolution_id,
    aggregate_type = "Resolution",
    occurred_at = reassigned_at,
    event_id = event_id
);

/// Published by the publish cascade when a resolution receives its number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionPublished {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the published resolution.
    pub resolution_id: ResolutionId,

    /// Meeting under which it was published.
    pub meeting_id: MeetingId,

    /// Assigned resolution number.
    pub resolution_number: ResolutionNumber,

    /// 1-based position in the consent agenda.
    pub sequence: u32,

    /// When the publish occurred.
    pub published_at: Timestamp,
}

domain_event!(
    ResolutionPublished,
    event_type = "resolution.published.v1",
    schema_version = 1,
    aggregate_id = resolution_id,
    aggregate_type = "Resolution",
    occurred_at = published_at,
    event_id = event_id
);
