//! Public storefront handlers
//!
//! Everything here is unauthenticated and only ever shows enabled,
//! live rows; reviews additionally have to be approved.

use axum::{extract::State, Json};
use catalog_service::dto::{
    CategoryNode, CreateContactEmailRequest, CreateReviewRequest, CreatedResponse, ItemQuery,
    ItemResponse, ListingResponse, ReviewResponse, SubCategoryQuery, SubCategoryResponse,
    SubSubCategoryQuery, SubSubCategoryResponse,
};
use catalog_service::services::{
    CategoryService, ContactService, ItemService, ReviewService, SubCategoryService,
    SubSubCategoryService,
};

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/end-user/v1/items
pub async fn list_items(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<ItemQuery>,
) -> ApiResult<Json<ListingResponse<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.list_storefront(listing, query).await?))
}

/// GET /api/end-user/v1/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.get_storefront(id).await?))
}

/// GET /api/end-user/v1/sub-categories?category_id=
pub async fn list_sub_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<SubCategoryQuery>,
) -> ApiResult<Json<ListingResponse<SubCategoryResponse>>> {
    let service = SubCategoryService::new(state.service_context());
    Ok(Json(service.list_enabled(listing, query).await?))
}

/// GET /api/end-user/v1/sub-sub-categories?sub_category_id=
pub async fn list_sub_sub_categories(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<SubSubCategoryQuery>,
) -> ApiResult<Json<ListingResponse<SubSubCategoryResponse>>> {
    let service = SubSubCategoryService::new(state.service_context());
    Ok(Json(service.list_enabled(listing, query).await?))
}

/// GET /api/end-user/v1/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
) -> ApiResult<Json<ListingResponse<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    Ok(Json(service.list_approved(listing).await?))
}

/// POST /api/end-user/v1/reviews/new
pub async fn submit_review(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = ReviewService::new(state.service_context());
    Ok(Created(Json(service.submit(request).await?)))
}

/// POST /api/end-user/v1/emails/new
pub async fn submit_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactEmailRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = ContactService::new(state.service_context());
    Ok(Created(Json(service.submit(request).await?)))
}

/// Enabled category tree for navigation menus
///
/// GET /api/data/v1/categories
pub async fn category_tree(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryNode>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.tree().await?))
}
