//! Domain-specific error types and error handling.
//!
//! All business failures surface as a [`DomainError`]; the presentation layer
//! maps variants to HTTP statuses and serializes the machine-readable code.

use rh_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed input, e.g. an inverted date range
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The requested date range collides with an existing rental
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Missing product, rental or user
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Acting user is not the owner of the resource
    #[error("Unauthorized access")]
    Unauthorized,

    /// State transition not allowed, e.g. cancelling a started rental
    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    /// Storage layer failure
    #[error("Database error: {message}")]
    Database { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Shorthand for a not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a business-rule error
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRule {
            message: message.into(),
        }
    }

    /// Machine-readable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::BusinessRule { .. } => "BUSINESS_RULE_VIOLATION",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::validation("bad range").code(), "VALIDATION_ERROR");
        assert_eq!(DomainError::conflict("overlap").code(), "CONFLICT");
        assert_eq!(DomainError::not_found("Product").code(), "NOT_FOUND");
        assert_eq!(DomainError::Unauthorized.code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_error_response_conversion() {
        let response: ErrorResponse = DomainError::not_found("Rental").into();
        assert_eq!(response.error, "NOT_FOUND");
        assert!(response.message.contains("Rental"));
    }
}
