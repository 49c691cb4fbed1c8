//! MeetingStatus enum for board meeting visibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visibility status of a board meeting.
///
/// Meeting status changes arrive as notifications from the meeting
/// management surface; this core does not constrain the transitions,
/// it only reacts when a meeting becomes Published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    #[default]
    Draft,
    Pending,
    Published,
    Private,
}

impl MeetingStatus {
    /// Returns true if the meeting is published (the cascade trigger).
    pub fn is_published(&self) -> bool {
        matches!(self, MeetingStatus::Published)
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeetingStatus::Draft => "Draft",
            MeetingStatus::Pending => "Pending",
            MeetingStatus::Published => "Published",
            MeetingStatus::Private => "Private",
        };
        write!(f, "{}", s)
    }
}
