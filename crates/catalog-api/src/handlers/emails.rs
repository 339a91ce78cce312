//! Contact message handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    ContactEmailQuery, ContactEmailResponse, IdRequest, ListingResponse, MessageResponse,
};
use catalog_service::services::ContactService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/admin/v1/emails?is_read=
pub async fn list_emails(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<ContactEmailQuery>,
) -> ApiResult<Json<ListingResponse<ContactEmailResponse>>> {
    let service = ContactService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/emails/{id}
pub async fn get_email(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ContactEmailResponse>> {
    let service = ContactService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/emails/delete
pub async fn delete_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ContactService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/emails/mark-as-read
pub async fn mark_email_read(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ContactService::new(state.service_context());
    Ok(Json(service.mark_read(request.id).await?))
}
