//! Item handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateItemRequest, CreatedResponse, IdRequest, ItemQuery, ItemResponse, ListingResponse,
    MessageResponse, UpdateItemRequest,
};
use catalog_service::services::ItemService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/items
pub async fn list_items(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<ItemQuery>,
) -> ApiResult<Json<ListingResponse<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// Create an item with its properties, features, images and embeds
///
/// POST /api/admin/v1/items/new
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = ItemService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// Replace an item and all of its child rows
///
/// POST /api/admin/v1/items/edit
pub async fn update_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateItemRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/items/delete
pub async fn delete_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/items/enable
pub async fn enable_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/items/disable
pub async fn disable_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
