//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Sub category not found: {0}")]
    SubCategoryNotFound(i64),

    #[error("Sub sub category not found: {0}")]
    SubSubCategoryNotFound(i64),

    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    #[error("FAQ not found: {0}")]
    FaqNotFound(i64),

    #[error("Hero not found: {0}")]
    HeroNotFound(i64),

    #[error("Advertisement not found: {0}")]
    AdvertisementNotFound(i64),

    #[error("Entity 'Who' not found: {0}")]
    WhoNotFound(i64),

    #[error("Review not found: {0}")]
    ReviewNotFound(i64),

    #[error("Email not found: {0}")]
    ContactEmailNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{child} does not belong to {parent}")]
    InvalidParent { child: String, parent: String },

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP expired")]
    OtpExpired,

    #[error("Invalid token or token expired")]
    InvalidToken,

    #[error("Your account is deleted")]
    AccountDeleted,

    #[error("OTP limit reached, please try again later")]
    RateLimited,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("{0} already exists in our system")]
    DuplicateName(String),

    #[error("Email {0} already exists in our system")]
    DuplicateEmail(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Email delivery error: {0}")]
    DeliveryError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn invalid_parent(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::InvalidParent {
            child: child.into(),
            parent: parent.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::AccountNotFound => "UNKNOWN_ACCOUNT",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::SubCategoryNotFound(_) => "UNKNOWN_SUB_CATEGORY",
            Self::SubSubCategoryNotFound(_) => "UNKNOWN_SUB_SUB_CATEGORY",
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::FaqNotFound(_) => "UNKNOWN_FAQ",
            Self::HeroNotFound(_) => "UNKNOWN_HERO",
            Self::AdvertisementNotFound(_) => "UNKNOWN_ADVERTISEMENT",
            Self::WhoNotFound(_) => "UNKNOWN_WHO",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::ContactEmailNotFound(_) => "UNKNOWN_EMAIL",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidParent { .. } => "INVALID_PARENT",

            // Authentication
            Self::InvalidOtp => "INVALID_OTP",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::AccountDeleted => "ACCOUNT_DELETED",
            Self::RateLimited => "RATE_LIMITED",

            // Conflict
            Self::DuplicateName(_) => "DUPLICATE_NAME",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::DeliveryError(_) => "DELIVERY_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::AccountNotFound
                | Self::CategoryNotFound(_)
                | Self::SubCategoryNotFound(_)
                | Self::SubSubCategoryNotFound(_)
                | Self::ItemNotFound(_)
                | Self::FaqNotFound(_)
                | Self::HeroNotFound(_)
                | Self::AdvertisementNotFound(_)
                | Self::WhoNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::ContactEmailNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidParent { .. })
    }

    /// Check if the caller failed to prove who they are
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidOtp | Self::OtpExpired | Self::InvalidToken)
    }

    /// Check if the caller is known but not allowed to proceed
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::AccountDeleted)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateName(_) | Self::DuplicateEmail(_))
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}
