//! "Who" highlight handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateWhoRequest, CreatedResponse, EnabledQuery, ListingResponse, MessageResponse,
    UpdateWhoRequest, WhoResponse,
};
use catalog_service::services::WhoService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/who
pub async fn list_who(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<EnabledQuery>,
) -> ApiResult<Json<ListingResponse<WhoResponse>>> {
    let service = WhoService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/who/{id}
pub async fn get_who(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<WhoResponse>> {
    let service = WhoService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/who/new
pub async fn create_who(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateWhoRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = WhoService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/who/edit
pub async fn update_who(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateWhoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = WhoService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}
