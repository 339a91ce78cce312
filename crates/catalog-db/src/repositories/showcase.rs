//! PostgreSQL implementations of AdvertisementRepository and WhoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{Advertisement, AdvertisementDraft, Who, WhoDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{
    AdvertisementFilter, AdvertisementRepository, RepoResult, WhoFilter, WhoRepository,
};
use catalog_core::value_objects::{Page, PageRequest};

use crate::listing::{ListingQuery, Predicate};
use crate::models::{AdvertisementModel, WhoModel};

use super::common::{set_flag, soft_delete};
use super::error::map_db_error;

const ADVERTISEMENT_COLUMNS: &str = "id, image_url, is_enabled, created_at, modified_at";

const WHO_COLUMNS: &str = "id, key, value, mdi_icon, is_enabled, created_at, modified_at";

// ============================================================================
// Advertisements
// ============================================================================

#[derive(Clone)]
pub struct PgAdvertisementRepository {
    pool: PgPool,
}

impl PgAdvertisementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdvertisementRepository for PgAdvertisementRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Advertisement>> {
        let result = sqlx::query_as::<_, AdvertisementModel>(
            r"
            SELECT id, image_url, is_enabled, created_at, modified_at
            FROM advertisements
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Advertisement::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &AdvertisementDraft) -> RepoResult<Advertisement> {
        let model = sqlx::query_as::<_, AdvertisementModel>(
            r"
            INSERT INTO advertisements (image_url, is_enabled, created_at, modified_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, image_url, is_enabled, created_at, modified_at
            ",
        )
        .bind(&draft.image_url)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Advertisement::from(model))
    }

    #[instrument(skip(self, advertisement), fields(advertisement_id = advertisement.id))]
    async fn update(&self, advertisement: &Advertisement) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE advertisements
            SET image_url = $2, is_enabled = $3, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(advertisement.id)
        .bind(&advertisement.image_url)
        .bind(advertisement.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AdvertisementNotFound(advertisement.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "advertisements", id)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::AdvertisementNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "advertisements", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::AdvertisementNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &AdvertisementFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Advertisement>> {
        ListingQuery::new("advertisements", ADVERTISEMENT_COLUMNS)
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .page::<AdvertisementModel, Advertisement>(&self.pool, page, Some("is_enabled"))
            .await
            .map_err(map_db_error)
    }
}

// ============================================================================
// Who
// ============================================================================

#[derive(Clone)]
pub struct PgWhoRepository {
    pool: PgPool,
}

impl PgWhoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WhoRepository for PgWhoRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Who>> {
        let result = sqlx::query_as::<_, WhoModel>(
            r"
            SELECT id, key, value, mdi_icon, is_enabled, created_at, modified_at
            FROM who
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Who::from))
    }

    #[instrument(skip(self, draft), fields(key = %draft.key))]
    async fn create(&self, draft: &WhoDraft) -> RepoResult<Who> {
        let model = sqlx::query_as::<_, WhoModel>(
            r"
            INSERT INTO who (key, value, mdi_icon, is_enabled, created_at, modified_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, key, value, mdi_icon, is_enabled, created_at, modified_at
            ",
        )
        .bind(&draft.key)
        .bind(&draft.value)
        .bind(&draft.mdi_icon)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Who::from(model))
    }

    #[instrument(skip(self, who), fields(who_id = who.id))]
    async fn update(&self, who: &Who) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE who
            SET key = $2, value = $3, mdi_icon = $4, is_enabled = $5, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(who.id)
        .bind(&who.key)
        .bind(&who.value)
        .bind(&who.mdi_icon)
        .bind(who.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::WhoNotFound(who.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &WhoFilter, page: PageRequest) -> RepoResult<Page<Who>> {
        ListingQuery::new("who", WHO_COLUMNS)
            .search(&["key"], filter.search.as_deref())
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .page::<WhoModel, Who>(&self.pool, page, Some("is_enabled"))
            .await
            .map_err(map_db_error)
    }
}
