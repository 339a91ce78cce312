//! One-time passcode rules: issuance cap, validity window, and code generation

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::entities::User;
use crate::error::DomainError;

/// A freshly generated passcode.
///
/// `Debug` is redacted so codes never reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(***)")
    }
}

/// Limits applied to passcode issuance and verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpPolicy {
    pub code_length: usize,
    /// Issuances allowed inside one rolling window
    pub max_per_window: i32,
    pub window: Duration,
    /// How long a code stays valid after it was issued
    pub validity: Duration,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            code_length: 6,
            max_per_window: 5,
            window: Duration::hours(1),
            validity: Duration::minutes(5),
        }
    }
}

impl OtpPolicy {
    pub fn new(max_per_window: i32, validity_secs: i64) -> Self {
        Self {
            max_per_window,
            validity: Duration::seconds(validity_secs),
            ..Self::default()
        }
    }

    /// Issuances counted against the current window.
    ///
    /// The stored counter is stale once a full window has passed since the
    /// last issuance, and then counts as zero.
    pub fn effective_count(&self, user: &User, now: DateTime<Utc>) -> i32 {
        match user.last_otp_at {
            Some(last) if last >= now - self.window => user.otp_count,
            _ => 0,
        }
    }

    /// Decide whether a new code may be issued, returning the counter value
    /// to store with it
    pub fn check_issue(&self, user: &User, now: DateTime<Utc>) -> Result<i32, DomainError> {
        if user.is_deleted() {
            return Err(DomainError::AccountDeleted);
        }

        let prior = self.effective_count(user, now);
        if prior >= self.max_per_window {
            return Err(DomainError::RateLimited);
        }

        Ok(prior + 1)
    }

    /// Check a submitted code.
    ///
    /// Order matters: deleted account, then wrong code, then expiry. A code
    /// is still accepted at exactly `last_otp_at + validity`.
    pub fn check_verify(
        &self,
        user: &User,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if user.is_deleted() {
            return Err(DomainError::AccountDeleted);
        }

        match user.otp.as_deref() {
            Some(stored) if stored == submitted => {}
            _ => return Err(DomainError::InvalidOtp),
        }

        match user.last_otp_at {
            Some(issued) if now <= issued + self.validity => Ok(()),
            _ => Err(DomainError::OtpExpired),
        }
    }

    /// Generate a code of uniformly random decimal digits, leading zeros kept
    pub fn generate_code(&self) -> OtpCode {
        let mut rng = rand::thread_rng();
        let code = (0..self.code_length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        OtpCode(code)
    }
}
