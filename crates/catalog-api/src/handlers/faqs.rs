//! FAQ handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateFaqRequest, CreatedResponse, EnabledQuery, FaqResponse, IdRequest, ListingResponse,
    MessageResponse, UpdateFaqRequest,
};
use catalog_service::services::FaqService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/faqs
pub async fn list_faqs(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<EnabledQuery>,
) -> ApiResult<Json<ListingResponse<FaqResponse>>> {
    let service = FaqService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/faqs/{id}
pub async fn get_faq(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<FaqResponse>> {
    let service = FaqService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/faqs/new
pub async fn create_faq(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFaqRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = FaqService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/faqs/edit
pub async fn update_faq(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateFaqRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = FaqService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/faqs/delete
pub async fn delete_faq(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = FaqService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/faqs/enable
pub async fn enable_faq(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = FaqService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/faqs/disable
pub async fn disable_faq(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = FaqService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
