//! Resolution-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ResolutionId};
use crate::ports::AccessDeniedReason;

/// Resolution-specific errors.
#[derive(Debug, Clone)]
pub enum ResolutionError {
    /// Resolution was not found.
    NotFound(ResolutionId),
    /// User lacks the required capability.
    AccessDenied(AccessDeniedReason),
    /// Illegal workflow transition attempted.
    InvalidTransition(String),
    /// Resolution is already published.
    AlreadyPublished,
    /// Validation failed (e.g. missing subject on submit).
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ResolutionError {
    pub fn not_found(id: ResolutionId) -> Self {
        ResolutionError::NotFound(id)
    }

    pub fn access_denied(reason: AccessDeniedReason) -> Self {
        ResolutionError::AccessDenied(reason)
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        ResolutionError::InvalidTransition(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ResolutionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ResolutionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ResolutionError::NotFound(_) => ErrorCode::ResolutionNotFound,
            ResolutionError::AccessDenied(_) => ErrorCode::Forbidden,
            ResolutionError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            ResolutionError::AlreadyPublished => ErrorCode::ResolutionPublished,
            ResolutionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ResolutionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ResolutionError::NotFound(id) => format!("Resolution not found: {}", id),
            ResolutionError::AccessDenied(reason) => reason.user_message(),
            ResolutionError::InvalidTransition(msg) => format!("Invalid transition: {}", msg),
            ResolutionError::AlreadyPublished => {
                "Resolution is already published".to_string()
            }
            ResolutionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ResolutionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ResolutionError {}

impl From<DomainError> for ResolutionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => ResolutionError::InvalidTransition(err.message),
            ErrorCode::ResolutionPublished => ResolutionError::AlreadyPublished,
            ErrorCode::ValidationFailed => ResolutionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ResolutionError::Infrastructure(err.to_string()),
        }
    }
}
