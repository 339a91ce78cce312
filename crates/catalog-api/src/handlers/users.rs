//! Admin account handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateUserRequest, CreatedResponse, IdRequest, ListingResponse, MessageResponse,
    UpdateUserRequest, UserResponse,
};
use catalog_service::services::UserService;

use crate::extractors::{IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
) -> ApiResult<Json<ListingResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list(listing).await?))
}

/// GET /api/admin/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/users/new
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/users/edit
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// Soft-delete an account
///
/// POST /api/admin/v1/users/delete
pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}
