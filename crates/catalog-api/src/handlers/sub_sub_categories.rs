//! Sub sub category handlers

use axum::{extract::State, Json};
use catalog_service::dto::{
    CreateSubSubCategoryRequest, CreatedResponse, IdRequest, ListingResponse, MessageResponse,
    SubSubCategoryQuery, SubSubCategoryResponse, UpdateSubSubCategoryRequest,
};
use catalog_service::services::SubSubCategoryService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Sub sub categories under one category and sub category
///
/// GET /api/admin/v1/sub-sub-categories?category_id=&sub_category_id=
pub async fn list_sub_sub_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<SubSubCategoryQuery>,
) -> ApiResult<Json<ListingResponse<SubSubCategoryResponse>>> {
    if query.category_id.is_none() || query.sub_category_id.is_none() {
        return Err(ApiError::invalid_query(
            "category_id and sub_category_id are required",
        ));
    }

    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/sub-sub-categories/all?category_ids=&sub_category_ids=
pub async fn list_all_sub_sub_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<SubSubCategoryQuery>,
) -> ApiResult<Json<ListingResponse<SubSubCategoryResponse>>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/sub-sub-categories/{id}
pub async fn get_sub_sub_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SubSubCategoryResponse>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/sub-sub-categories/new
pub async fn create_sub_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSubSubCategoryRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// POST /api/admin/v1/sub-sub-categories/edit
pub async fn update_sub_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateSubSubCategoryRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/admin/v1/sub-sub-categories/delete
pub async fn delete_sub_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/sub-sub-categories/enable
pub async fn enable_sub_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, true).await?))
}

/// POST /api/admin/v1/sub-sub-categories/disable
pub async fn disable_sub_sub_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.set_enabled(request.id, false).await?))
}
