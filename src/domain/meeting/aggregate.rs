//! Meeting aggregate entity.
//!
//! Meetings own a consent agenda: a persisted custom order of resolution
//! ids plus the schedule data that resolution numbering is derived from.
//! Resolutions reference meetings by id; the meeting does not own them.

use serde::{Deserialize, Serialize};

use super::ConsentAgendaOrder;
use crate::domain::foundation::{DomainError, MeetingId, MeetingStatus, Timestamp, ValidationError};

/// Maximum length for meeting title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Maximum planned duration, in minutes (one full day).
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Board meeting aggregate.
///
/// # Invariants
///
/// - `title` is 1-500 characters, non-empty
/// - `consent_agenda_order` holds no duplicate ids (enforced by the value
///   type) but may hold stale ids; it is reconciled on read, never trusted
///   directly for display or numbering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique identifier for this meeting.
    id: MeetingId,

    /// Meeting title.
    title: String,

    /// When the meeting is scheduled to take place.
    scheduled_at: Timestamp,

    /// Planned duration in minutes.
    duration_minutes: u32,

    /// Optional location.
    location: Option<String>,

    /// Current visibility status.
    status: MeetingStatus,

    /// Persisted custom consent-agenda order (advisory, possibly stale).
    consent_agenda_order: ConsentAgendaOrder,

    /// When the meeting was created.
    created_at: Timestamp,

    /// When the meeting was last updated.
    updated_at: Timestamp,
}

impl Meeting {
    /// Create a new draft meeting.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or too long
    /// - `OutOfRange` if the duration is zero or longer than a day
    pub fn new(
        id: MeetingId,
        title: String,
        scheduled_at: Timestamp,
        duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_duration(duration_minutes)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            scheduled_at,
            duration_minutes,
            location: None,
            status: MeetingStatus::Draft,
            consent_agenda_order: ConsentAgendaOrder::empty(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a meeting from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MeetingId,
        title: String,
        scheduled_at: Timestamp,
        duration_minutes: u32,
        location: Option<String>,
        status: MeetingStatus,
        consent_agenda_order: ConsentAgendaOrder,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            scheduled_at,
            duration_minutes,
            location,
            status,
            consent_agenda_order,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the meeting ID.
    pub fn id(&self) -> &MeetingId {
        &self.id
    }

    /// Returns the meeting title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the scheduled date/time (the numbering source).
    pub fn scheduled_at(&self) -> &Timestamp {
        &self.scheduled_at
    }

    /// Returns the planned duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the location.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the current status.
    pub fn status(&self) -> MeetingStatus {
        self.status
    }

    /// Returns the persisted consent-agenda order.
    ///
    /// Advisory only: reconcile through `domain::agenda::effective_order`
    /// before using it for display or numbering.
    pub fn consent_agenda_order(&self) -> &ConsentAgendaOrder {
        &self.consent_agenda_order
    }

    /// Returns when the meeting was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the meeting was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Change the meeting status, returning the previous status.
    ///
    /// This core does not restrict meeting transitions; status arrives from
    /// the meeting management surface. Setting the same status is a no-op.
    pub fn change_status(&mut self, new_status: MeetingStatus) -> MeetingStatus {
        let old = std::mem::replace(&mut self.status, new_status);
        if old != new_status {
            self.updated_at = Timestamp::now();
        }
        old
    }

    /// Replace the persisted consent-agenda order.
    ///
    /// Callers are expected to have filtered the list to eligible ids
    /// (see `SaveAgendaOrderHandler`); the aggregate stores it verbatim.
    pub fn set_consent_agenda_order(&mut self, order: ConsentAgendaOrder) {
        if self.consent_agenda_order != order {
            self.consent_agenda_order = order;
            self.updated_at = Timestamp::now();
        }
    }

    /// Update the meeting title.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or too long
    pub fn rename(&mut self, new_title: String) -> Result<String, DomainError> {
        Self::validate_title(&new_title)?;
        let old_title = std::mem::replace(&mut self.title, new_title);
        self.updated_at = Timestamp::now();
        Ok(old_title)
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_duration(minutes: u32) -> Result<(), DomainError> {
        if minutes == 0 || minutes > MAX_DURATION_MINUTES {
            return Err(ValidationError::out_of_range(
                "duration_minutes",
                1,
                MAX_DURATION_MINUTES as i32,
                minutes.try_into().unwrap_or(i32::MAX),
            )
            .into());
        }
        Ok(())
    }
}
