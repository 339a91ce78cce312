//! Authentication service
//!
//! Passcode login for admin accounts: issue a code by mail, exchange it for
//! a session token, and resolve session tokens back to live accounts.

use catalog_core::entities::User;
use catalog_core::traits::{OtpIssue, OutgoingEmail};
use catalog_core::{DomainError, OtpCode};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{CheckOtpRequest, SendOtpRequest, SendOtpResponse, SessionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Read-check-write rounds before a contended issuance gives up
const ISSUE_ATTEMPTS: usize = 2;

const OTP_SUBJECT: &str = "Your login code";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a passcode and mail it to the account holder
    ///
    /// The code is committed before delivery is attempted. A delivery
    /// failure is reported as `delivered: false` and does not undo it.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn send_otp(&self, request: SendOtpRequest) -> ServiceResult<SendOtpResponse> {
        let (user, code) = self.issue(&request).await?;

        let validity = self.ctx.otp_policy().validity.num_minutes();
        let email = OutgoingEmail {
            to: user.email.clone(),
            subject: OTP_SUBJECT.to_string(),
            text: format!(
                "Your login code is {}. It expires in {validity} minutes.",
                code.as_str()
            ),
        };

        let delivered = match self.ctx.mailer().send(&email).await {
            Ok(receipt) if receipt.dropped => {
                warn!(user_id = user.id, "Passcode issued while mail delivery is disabled");
                false
            }
            Ok(_) => true,
            Err(e) => {
                warn!(user_id = user.id, error = %e, "Passcode delivery failed");
                false
            }
        };

        let message = if delivered {
            "OTP sent successfully"
        } else {
            "OTP issued but could not be delivered"
        };

        Ok(SendOtpResponse {
            message: message.to_string(),
            delivered,
        })
    }

    /// Persist a fresh code, retrying once when a concurrent request moved
    /// the counter between our read and our write
    async fn issue(&self, request: &SendOtpRequest) -> ServiceResult<(User, OtpCode)> {
        let policy = self.ctx.otp_policy();

        for attempt in 1..=ISSUE_ATTEMPTS {
            let user = self.find_account(&request.email).await?;
            if let Some(user_name) = &request.user_name {
                if *user_name != user.user_name {
                    return Err(DomainError::AccountNotFound.into());
                }
            }

            let now = Utc::now();
            let count = policy.check_issue(&user, now)?;
            let code = policy.generate_code();

            let issue = OtpIssue {
                user_id: user.id,
                code: code.as_str().to_string(),
                count,
                issued_at: now,
                expected_count: user.otp_count,
                expected_last: user.last_otp_at,
            };

            if self.ctx.user_repo().record_otp_issue(&issue).await? {
                info!(user_id = user.id, count, "Passcode issued");
                return Ok((user, code));
            }

            warn!(user_id = user.id, attempt, "Passcode counter changed concurrently");
        }

        Err(DomainError::RateLimited.into())
    }

    /// Exchange a passcode for a session token
    ///
    /// The stored code stays in place, so it can be verified again until it
    /// expires.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn check_otp(&self, request: CheckOtpRequest) -> ServiceResult<SessionResponse> {
        let user = self.find_account(&request.email).await?;

        if let Err(e) = self
            .ctx
            .otp_policy()
            .check_verify(&user, &request.otp, Utc::now())
        {
            warn!(user_id = user.id, code = e.code(), "Passcode rejected");
            return Err(e.into());
        }

        let token = self
            .ctx
            .session_tokens()
            .issue(user.id, &user.email, &user.user_name)?;

        info!(user_id = user.id, "Session issued");

        Ok(SessionResponse {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            user_name: user.user_name,
            token,
        })
    }

    /// Resolve a bearer token to the live account it was issued for
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.session_tokens().verify(token)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(claims.user_id())
            .await?
            .ok_or(DomainError::InvalidToken)?;

        if user.is_deleted() {
            return Err(DomainError::AccountDeleted.into());
        }

        Ok(user)
    }

    async fn find_account(&self, email: &str) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or(DomainError::AccountNotFound)?)
    }
}
