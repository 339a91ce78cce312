//! Review moderation handlers

use axum::{extract::State, Json};
use catalog_service::dto::{IdRequest, ListingResponse, MessageResponse, ReviewQuery, ReviewResponse};
use catalog_service::services::ReviewService;

use crate::extractors::{FilterQuery, IdPath, ListingQuery, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/admin/v1/reviews?is_approved=
pub async fn list_reviews(
    State(state): State<AppState>,
    ListingQuery(listing): ListingQuery,
    FilterQuery(query): FilterQuery<ReviewQuery>,
) -> ApiResult<Json<ListingResponse<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    Ok(Json(service.list(listing, query).await?))
}

/// GET /api/admin/v1/reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ReviewResponse>> {
    let service = ReviewService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/admin/v1/reviews/delete
pub async fn delete_review(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ReviewService::new(state.service_context());
    Ok(Json(service.delete(request.id).await?))
}

/// POST /api/admin/v1/reviews/approve
pub async fn approve_review(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ReviewService::new(state.service_context());
    Ok(Json(service.set_approved(request.id, true).await?))
}

/// POST /api/admin/v1/reviews/reject
pub async fn reject_review(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IdRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ReviewService::new(state.service_context());
    Ok(Json(service.set_approved(request.id, false).await?))
}
