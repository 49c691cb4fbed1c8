//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, status enums, and error types
//! that form the vocabulary of the Board Docket domain.

mod command;
mod errors;
mod events;
mod ids;
mod meeting_status;
mod resolution_status;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{MeetingId, ResolutionId, UserId};
pub use meeting_status::MeetingStatus;
pub use resolution_status::ResolutionStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
