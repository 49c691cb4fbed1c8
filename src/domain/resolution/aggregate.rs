//! Resolution aggregate entity.
//!
//! A resolution progresses Draft -> Submitted -> Approved -> Published,
//! with Submitted -> Denied and Denied -> Submitted for the resubmission
//! loop. Every transition is validated against the central
//! `ResolutionStatus` table; a failed guard leaves the aggregate
//! unmodified.
//!
//! Approved -> Published is reserved for the publish cascade: no user
//! command performs it directly.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, MeetingId, ResolutionId, ResolutionStatus, StateMachine, Timestamp,
};
use crate::domain::numbering::ResolutionNumber;

/// Maximum length for resolution title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Board resolution aggregate.
///
/// # Invariants
///
/// - `resolution_number`, `published_in_meeting_id`, and
///   `sequence_in_meeting` are set together, only by the publish cascade
/// - a Published resolution cannot be reassigned or edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Unique identifier for this resolution.
    id: ResolutionId,

    /// Resolution title.
    title: String,

    /// Subject line (required for submission).
    subject: String,

    /// Meeting this resolution is assigned to, if any.
    assigned_meeting_id: Option<MeetingId>,

    /// Whether the resolution has fiscal impact.
    fiscal_impact: bool,

    /// Whether the expenditure is budgeted.
    budgeted: bool,

    /// Free-form amount text (e.g. "up to $25,000"); never arithmetic.
    amount: Option<String>,

    /// Funding source description.
    budget_source: Option<String>,

    /// Recommended board action.
    recommended_action: Option<String>,

    /// Resolution body text.
    body: String,

    /// Current workflow status.
    status: ResolutionStatus,

    /// Canonical number, assigned by the publish cascade.
    resolution_number: Option<ResolutionNumber>,

    /// Meeting under which this resolution was published.
    published_in_meeting_id: Option<MeetingId>,

    /// 1-based position in the published consent agenda.
    sequence_in_meeting: Option<u32>,

    /// When the resolution was created.
    created_at: Timestamp,

    /// When the resolution was last updated.
    updated_at: Timestamp,
}

impl Resolution {
    /// Create a new draft resolution.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or too long
    pub fn new(id: ResolutionId, title: String) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            subject: String::new(),
            assigned_meeting_id: None,
            fiscal_impact: false,
            budgeted: false,
            amount: None,
            budget_source: None,
            recommended_action: None,
            body: String::new(),
            status: ResolutionStatus::Draft,
            resolution_number: None,
            published_in_meeting_id: None,
            sequence_in_meeting: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a resolution from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ResolutionId,
        title: String,
        subject: String,
        assigned_meeting_id: Option<MeetingId>,
        fiscal_impact: bool,
        budgeted: bool,
        amount: Option<String>,
        budget_source: Option<String>,
        recommended_action: Option<String>,
        body: String,
        status: ResolutionStatus,
        resolution_number: Option<ResolutionNumber>,
        published_in_meeting_id: Option<MeetingId>,
        sequence_in_meeting: Option<u32>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            subject,
            assigned_meeting_id,
            fiscal_impact,
            budgeted,
            amount,
            budget_source,
            recommended_action,
            body,
            status,
            resolution_number,
            published_in_meeting_id,
            sequence_in_meeting,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ResolutionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn assigned_meeting_id(&self) -> Option<&MeetingId> {
        self.assigned_meeting_id.as_ref()
    }

    pub fn fiscal_impact(&self) -> bool {
        self.fiscal_impact
    }

    pub fn budgeted(&self) -> bool {
        self.budgeted
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn budget_source(&self) -> Option<&str> {
        self.budget_source.as_deref()
    }

    pub fn recommended_action(&self) -> Option<&str> {
        self.recommended_action.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn status(&self) -> ResolutionStatus {
        self.status
    }

    pub fn resolution_number(&self) -> Option<&ResolutionNumber> {
        self.resolution_number.as_ref()
    }

    pub fn published_in_meeting_id(&self) -> Option<&MeetingId> {
        self.published_in_meeting_id.as_ref()
    }

    pub fn sequence_in_meeting(&self) -> Option<u32> {
        self.sequence_in_meeting
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true if this resolution belongs on the given meeting's
    /// consent agenda: Approved and assigned to that meeting.
    pub fn is_eligible_for(&self, meeting_id: &MeetingId) -> bool {
        self.status.is_approved() && self.assigned_meeting_id.as_ref() == Some(meeting_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Content edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Update the subject line.
    ///
    /// # Errors
    ///
    /// - `ResolutionPublished` if the resolution is already published
    pub fn set_subject(&mut self, subject: String) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.subject = subject;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Update the body text.
    pub fn set_body(&mut self, body: String) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.body = body;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Update the fiscal fields.
    pub fn set_fiscal_detail(
        &mut self,
        fiscal_impact: bool,
        budgeted: bool,
        amount: Option<String>,
        budget_source: Option<String>,
    ) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.fiscal_impact = fiscal_impact;
        self.budgeted = budgeted;
        self.amount = amount;
        self.budget_source = budget_source;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Update the recommended board action.
    pub fn set_recommended_action(&mut self, action: Option<String>) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.recommended_action = action;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Workflow transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Submit the resolution for review (Draft/Denied -> Submitted).
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if subject is empty or no meeting is assigned
    /// - `InvalidStateTransition` from any other status
    pub fn submit(&mut self) -> Result<(), DomainError> {
        if self.subject.trim().is_empty() {
            return Err(DomainError::validation(
                "subject",
                "Subject is required before submission",
            ));
        }
        if self.assigned_meeting_id.is_none() {
            return Err(DomainError::validation(
                "assigned_meeting_id",
                "A meeting must be assigned before submission",
            ));
        }
        self.transition(ResolutionStatus::Submitted)
    }

    /// Approve the resolution (Submitted -> Approved).
    pub fn approve(&mut self) -> Result<(), DomainError> {
        self.transition(ResolutionStatus::Approved)
    }

    /// Deny the resolution (Submitted -> Denied).
    pub fn deny(&mut self) -> Result<(), DomainError> {
        self.transition(ResolutionStatus::Denied)
    }

    /// Reassign the resolution to another meeting (or unassign it).
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the resolution is Published
    pub fn reassign(&mut self, new_meeting_id: Option<MeetingId>) -> Result<(), DomainError> {
        if !self.status.is_reassignable() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "A published resolution cannot be reassigned",
            ));
        }
        self.assigned_meeting_id = new_meeting_id;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Publish the resolution under a meeting, assigning its number and
    /// sequence. Invoked only by the publish cascade.
    ///
    /// Re-invoking on a resolution already published in the *same* meeting
    /// is an idempotent refresh of number/sequence, not a state change.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if not Approved, or if already published
    ///   under a different meeting
    pub fn publish_in(
        &mut self,
        meeting_id: MeetingId,
        number: ResolutionNumber,
        sequence: u32,
    ) -> Result<(), DomainError> {
        if self.status == ResolutionStatus::Published {
            if self.published_in_meeting_id.as_ref() == Some(&meeting_id) {
                self.resolution_number = Some(number);
                self.sequence_in_meeting = Some(sequence);
                self.updated_at = Timestamp::now();
                return Ok(());
            }
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Resolution is already published under a different meeting",
            ));
        }

        self.transition(ResolutionStatus::Published)?;
        self.resolution_number = Some(number);
        self.published_in_meeting_id = Some(meeting_id);
        self.sequence_in_meeting = Some(sequence);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn transition(&mut self, target: ResolutionStatus) -> Result<(), DomainError> {
        match self.status.transition_to(target) {
            Ok(new_status) => {
                self.status = new_status;
                self.updated_at = Timestamp::now();
                Ok(())
            }
            Err(_) => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move resolution from {} to {}", self.status, target),
            )),
        }
    }

    fn ensure_editable(&self) -> Result<(), DomainError> {
        if self.status == ResolutionStatus::Published {
            return Err(DomainError::new(
                ErrorCode::ResolutionPublished,
                "Cannot edit a published resolution",
            ));
        }
        Ok(())
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
}
