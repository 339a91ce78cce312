//! Authentication handlers
//!
//! Passcode login for admin accounts.

use axum::{extract::State, Json};
use catalog_service::dto::{CheckOtpRequest, SendOtpRequest, SendOtpResponse, SessionResponse};
use catalog_service::services::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Issue a one-time passcode and mail it to the account
///
/// POST /api/auth/v1/send-otp
pub async fn send_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendOtpRequest>,
) -> ApiResult<Json<SendOtpResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.send_otp(request).await?;
    Ok(Json(response))
}

/// Exchange a passcode for a session token
///
/// POST /api/auth/v1/check-otp
pub async fn check_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CheckOtpRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.check_otp(request).await?;
    Ok(Json(response))
}
