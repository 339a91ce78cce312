//! Dashboard and document upload services

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, instrument};

use crate::dto::{DashboardCountsResponse, DocumentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Headline counts for the admin dashboard
    #[instrument(skip(self))]
    pub async fn counts(&self) -> ServiceResult<DashboardCountsResponse> {
        let counts = self.ctx.dashboard_repo().counts().await?;
        Ok(DashboardCountsResponse::from(counts))
    }
}

/// Document upload service
pub struct DocumentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DocumentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded file under `{model_name}/{millis}_{file_name}`
    ///
    /// The request size limit is enforced by the HTTP layer before the bytes
    /// reach this point.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        model_name: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ServiceResult<DocumentResponse> {
        let prefix = sanitize(model_name);
        if prefix.is_empty() {
            return Err(ServiceError::validation("model_name must not be empty"));
        }
        if bytes.is_empty() {
            return Err(ServiceError::validation("Uploaded file is empty"));
        }

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .as_millis();
        let name = match sanitize(file_name) {
            name if name.is_empty() => "upload".to_string(),
            name => name,
        };
        let key = format!("{prefix}/{stamp}_{name}");

        let document_url = self
            .ctx
            .object_store()
            .put(&key, bytes, content_type)
            .await?;

        info!(key = %key, "Document stored");

        Ok(DocumentResponse { document_url })
    }
}

/// Keep ASCII letters, digits, dots, dashes and underscores
fn sanitize(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::Harness;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("photo 1.png"), "photo_1.png");
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
        assert_eq!(sanitize("C:\\tmp\\price list.pdf"), "price_list.pdf");
        assert_eq!(sanitize(".hidden"), "hidden");
        assert_eq!(sanitize(""), "");
    }

    #[tokio::test]
    async fn test_upload_key_layout() {
        let h = Harness::new();
        let response = DocumentService::new(&h.ctx)
            .upload("item", "front view.jpg", "image/jpeg", vec![1, 2, 3])
            .await
            .unwrap();

        let keys = h.store.keys.lock().unwrap().clone();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].starts_with("item/"));
        assert!(keys[0].ends_with("_front_view.jpg"));
        assert_eq!(response.document_url, format!("https://cdn.example.com/{}", keys[0]));
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file() {
        let h = Harness::new();
        let err = DocumentService::new(&h.ctx)
            .upload("item", "a.png", "image/png", Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(h.store.keys.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let h = Harness::new();
        let counts = DashboardService::new(&h.ctx).counts().await.unwrap();
        assert_eq!(counts.total_items, 0);
    }
}
