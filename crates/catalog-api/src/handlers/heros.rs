//! Hero banner handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateHeroRequest, CreatedResponse, EnabledQuery, HeroResponse, IdRequest, ListingResponse,
    MessageResponse, UpdateHeroRequest,
};
use catalog_service::services::HeroService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/heros
pub async fn list_heros(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<EnabledQuery>,
) -> ApiResult<Json<ListingResponse<HeroResponse>>> {
    let service = HeroService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/heros/{id}
pub async fn get_hero(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<HeroResponse>> {
    let service = HeroService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/heros/new
pub async fn create_hero(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateHeroRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = HeroService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/heros/edit
pub async fn update_hero(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateHeroRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = HeroService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/heros/delete
pub async fn delete_hero(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = HeroService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/heros/enable
pub async fn enable_hero(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = HeroService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/heros/disable
pub async fn disable_hero(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = HeroService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
