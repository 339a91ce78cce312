//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{Category, CategoryDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{CategoryFilter, CategoryRepository, RepoResult};
use catalog_core::value_objects::{Page, PageRequest};

use crate::listing::{ListingQuery, Predicate};
use crate::models::CategoryModel;

use super::common::{set_flag, soft_delete, value_taken};
use super::error::{map_db_error, map_unique_violation};

const CATEGORY_COLUMNS: &str =
    "id, name, description, image, is_enabled, created_at, modified_at";

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, image, is_enabled, created_at, modified_at
            FROM categories
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "categories", "name", name, exclude_id)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &CategoryDraft) -> RepoResult<Category> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, description, image, is_enabled, created_at, modified_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, name, description, image, is_enabled, created_at, modified_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateName(draft.name.clone())))?;

        Ok(Category::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE categories
            SET name = $2, description = $3, image = $4, is_enabled = $5, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.image)
        .bind(category.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| DomainError::DuplicateName(category.name.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(category.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "categories", id)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::CategoryNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "categories", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::CategoryNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Category>> {
        ListingQuery::new("categories", CATEGORY_COLUMNS)
            .search(&["name"], filter.search.as_deref())
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .splits_follow_search(filter.counts_follow_search)
            .page::<CategoryModel, Category>(&self.pool, page, Some("is_enabled"))
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn sub_category_count(&self, id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM sub_categories
            WHERE category_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCategoryRepository>();
    }
}
