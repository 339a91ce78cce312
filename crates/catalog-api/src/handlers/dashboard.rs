//! Dashboard and document upload handlers

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use catalog_service::dto::{DashboardCountsResponse, DocumentResponse, UploadQuery};
use catalog_service::services::{DashboardService, DocumentService};
use validator::Validate;

use crate::extractors::FilterQuery;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/v1/dashboard/counts
pub async fn dashboard_counts(
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardCountsResponse>> {
    let service = DashboardService::new(state.service_context());
    Ok(Json(service.counts().await?))
}

/// Store the first file part of a multipart body
///
/// POST /api/admin/v1/document/upload?model_name=
pub async fn upload_document(
    State(state): State<AppState>,
    FilterQuery(query): FilterQuery<UploadQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Created<Json<DocumentResponse>>> {
    query.validate()?;
    let limit_mb = state.config().storage.max_file_size_mb;
    let mut multipart = multipart.map_err(|e| ApiError::invalid_body(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e, limit_mb))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&e, limit_mb))?;

        let service = DocumentService::new(state.service_context());
        let response = service
            .upload(&query.model_name, &file_name, &content_type, bytes.to_vec())
            .await?;
        return Ok(Created(Json(response)));
    }

    Err(ApiError::invalid_body("multipart body carries no file"))
}

fn multipart_error(err: &MultipartError, limit_mb: u32) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(limit_mb)
    } else {
        ApiError::invalid_body(err.body_text())
    }
}
