//! Meeting-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MeetingId};
use crate::ports::AccessDeniedReason;

/// Meeting-specific errors.
#[derive(Debug, Clone)]
pub enum MeetingError {
    /// Meeting was not found.
    NotFound(MeetingId),
    /// User lacks the required capability.
    AccessDenied(AccessDeniedReason),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl MeetingError {
    pub fn not_found(id: MeetingId) -> Self {
        MeetingError::NotFound(id)
    }

    pub fn access_denied(reason: AccessDeniedReason) -> Self {
        MeetingError::AccessDenied(reason)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MeetingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MeetingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MeetingError::NotFound(_) => ErrorCode::MeetingNotFound,
            MeetingError::AccessDenied(_) => ErrorCode::Forbidden,
            MeetingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MeetingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MeetingError::NotFound(id) => format!("Meeting not found: {}", id),
            MeetingError::AccessDenied(reason) => reason.user_message(),
            MeetingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MeetingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MeetingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MeetingError {}

impl From<DomainError> for MeetingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => MeetingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MeetingError::Infrastructure(err.to_string()),
        }
    }
}
