//! Resolution domain module.
//!
//! Handles the resolution review workflow: drafting, submission,
//! approval/denial, meeting reassignment, and cascade-driven publication.
//!
//! # Events
//!
//! - `ResolutionSubmitted` - Published on submission
//! - `ResolutionApproved` - Published on approval
//! - `ResolutionDenied` - Published on denial
//! - `ResolutionReassigned` - Published on meeting reassignment
//! - `ResolutionPublished` - Published by the publish cascade

mod aggregate;
mod errors;
mod events;

pub use aggregate::{Resolution, MAX_TITLE_LENGTH};
pub use errors::ResolutionError;
pub use events::{
    ResolutionApproved, ResolutionDenied, ResolutionPublished, ResolutionReassigned,
    ResolutionSubmitted,
};
