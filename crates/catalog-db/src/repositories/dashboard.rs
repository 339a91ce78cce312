//! Dashboard totals and the readiness check

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::traits::{DashboardCounts, DashboardRepository, HealthCheck, RepoResult};

use crate::models::DashboardCountsModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgDashboardRepository {
    pool: PgPool,
}

impl PgDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PgDashboardRepository {
    #[instrument(skip(self))]
    async fn counts(&self) -> RepoResult<DashboardCounts> {
        let model = sqlx::query_as::<_, DashboardCountsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM items
                  WHERE is_enabled AND deleted_at IS NULL) AS total_items,
                (SELECT COUNT(*) FROM items
                  WHERE is_enabled AND deleted_at IS NULL
                    AND hot_deal_end_at IS NOT NULL) AS hot_deal_items,
                (SELECT COUNT(*) FROM items
                  WHERE is_enabled AND deleted_at IS NULL
                    AND discount_percent > 0) AS discount_items,
                (SELECT COUNT(*) FROM items
                  WHERE is_enabled AND deleted_at IS NULL AND is_featured) AS featured_items,
                (SELECT COUNT(*) FROM items
                  WHERE is_enabled AND deleted_at IS NULL AND is_sold) AS sold_items,
                (SELECT COUNT(*) FROM categories
                  WHERE is_enabled AND deleted_at IS NULL) AS total_categories,
                (SELECT COUNT(*) FROM sub_categories
                  WHERE is_enabled AND deleted_at IS NULL) AS total_sub_categories,
                (SELECT COUNT(*) FROM sub_sub_categories
                  WHERE is_enabled AND deleted_at IS NULL) AS total_sub_sub_categories,
                (SELECT COUNT(*) FROM users WHERE deleted_at IS NULL) AS total_users,
                (SELECT COUNT(*) FROM reviews WHERE deleted_at IS NULL) AS total_reviews
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DashboardCounts::from(model))
    }
}

/// Round-trips `SELECT 1` through the pool
#[derive(Clone)]
pub struct PgHealthCheck {
    pool: PgPool,
}

impl PgHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
