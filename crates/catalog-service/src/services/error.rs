//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use catalog_common::{domain_status, AppError};
use catalog_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation, including not-found and conflicts
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Application error (session tokens, configuration)
    #[error("{0}")]
    App(#[from] AppError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_not_found() {
        let err = ServiceError::from(DomainError::ItemNotFound(12));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_ITEM");
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_domain_error_is_the_source() {
        use std::error::Error as _;

        let err = ServiceError::from(DomainError::FaqNotFound(3));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some(DomainError::FaqNotFound(3).to_string()));
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("limit must be a positive integer or -1");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_otp_errors() {
        assert_eq!(ServiceError::from(DomainError::RateLimited).status_code(), 429);
        assert_eq!(ServiceError::from(DomainError::AccountDeleted).status_code(), 403);
        assert_eq!(ServiceError::from(DomainError::OtpExpired).status_code(), 401);
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::DuplicateEmail(
            "a@x.com".to_string(),
        ))
        .into();
        assert_eq!(app_err.status_code(), 409);
        assert_eq!(app_err.error_code(), "DUPLICATE_EMAIL");

        let app_err: AppError = ServiceError::App(AppError::TokenExpired).into();
        assert!(matches!(app_err, AppError::TokenExpired));
    }
}
