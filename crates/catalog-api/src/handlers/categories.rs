//! Category handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CategoryDetailResponse, CategoryResponse, CreateCategoryRequest, CreatedResponse,
    EnabledQuery, IdRequest, ListingResponse, MessageResponse, UpdateCategoryRequest,
};
use catalog_service::services::CategoryService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<EnabledQuery>,
) -> ApiResult<Json<ListingResponse<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// Category listing whose enabled/disabled counts follow the search term
///
/// GET /api/admin/v1/categories/all
pub async fn list_all_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<EnabledQuery>,
) -> ApiResult<Json<ListingResponse<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list_all(listing, query).await?))
}

/// GET /api/admin/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<CategoryDetailResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/categories/new
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/categories/edit
pub async fn update_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/categories/delete
pub async fn delete_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/categories/enable
pub async fn enable_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/categories/disable
pub async fn disable_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
