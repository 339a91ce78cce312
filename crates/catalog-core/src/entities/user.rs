//! User entity - an admin account that signs in with a one-time passcode

use chrono::{DateTime, Utc};

/// User account
///
/// `otp`, `otp_count` and `last_otp_at` hold the state of the current
/// passcode challenge. `otp_count` only means something relative to
/// `last_otp_at`; see [`crate::OtpPolicy::effective_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub user_name: String,
    pub display_name: Option<String>,
    pub otp: Option<String>,
    pub otp_count: i32,
    pub last_otp_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the account has been soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Name shown in the admin UI, falling back to the user name
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.user_name)
    }

    /// Update profile fields
    pub fn set_profile(&mut self, user_name: String, display_name: Option<String>) {
        self.user_name = user_name;
        self.display_name = display_name;
        self.modified_at = Some(Utc::now());
    }
}

/// Fields required to provision a new account
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub email: String,
    pub user_name: String,
    pub display_name: Option<String>,
}
