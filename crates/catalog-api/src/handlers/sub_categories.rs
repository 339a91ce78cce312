//! Sub category handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateSubCategoryRequest, CreatedResponse, IdRequest, ListingResponse, MessageResponse,
    SubCategoryQuery, SubCategoryResponse, UpdateSubCategoryRequest,
};
use catalog_service::services::SubCategoryService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Sub categories of one category
///
/// GET /api/admin/v1/sub-categories?category_id=
pub async fn list_sub_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<SubCategoryQuery>,
) -> ApiResult<Json<ListingResponse<SubCategoryResponse>>> {
    if query.category_id.is_none() {
        return Err(ApiError::invalid_query("category_id is required"));
    }

    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// Sub categories across any set of categories
///
/// GET /api/admin/v1/sub-categories/all?category_ids=[..]
pub async fn list_all_sub_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<SubCategoryQuery>,
) -> ApiResult<Json<ListingResponse<SubCategoryResponse>>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/sub-categories/{id}
pub async fn get_sub_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SubCategoryResponse>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/sub-categories/new
pub async fn create_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSubCategoryRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/sub-categories/edit
pub async fn update_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateSubCategoryRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/sub-categories/delete
pub async fn delete_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/sub-categories/enable
pub async fn enable_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/sub-categories/disable
pub async fn disable_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
