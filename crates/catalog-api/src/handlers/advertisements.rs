//! Advertisement handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    AdvertisementResponse, CreateAdvertisementRequest, CreatedResponse, EnabledQuery, IdRequest,
    ListingResponse, MessageResponse, UpdateAdvertisementRequest,
};
use catalog_service::services::AdvertisementService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/advertisements
pub async fn list_advertisements(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<EnabledQuery>,
) -> ApiResult<Json<ListingResponse<AdvertisementResponse>>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/advertisements/{id}
pub async fn get_advertisement(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<AdvertisementResponse>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/advertisements/new
pub async fn create_advertisement(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAdvertisementRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/advertisements/edit
pub async fn update_advertisement(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateAdvertisementRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/advertisements/delete
pub async fn delete_advertisement(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/advertisements/enable
pub async fn enable_advertisement(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/advertisements/disable
pub async fn disable_advertisement(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdvertisementService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
