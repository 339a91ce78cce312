//! PostgreSQL implementations of SubCategoryRepository and SubSubCategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{SubCategory, SubCategoryDraft, SubSubCategory, SubSubCategoryDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{
    RepoResult, SubCategoryFilter, SubCategoryRepository, SubSubCategoryFilter,
    SubSubCategoryRepository,
};
use catalog_core::value_objects::{Page, PageRequest};

use crate::listing::{ListingQuery, Predicate};
use crate::models::{SubCategoryModel, SubSubCategoryModel};

use super::common::{set_flag, soft_delete, value_taken};
use super::error::{map_db_error, map_unique_violation};

const SUB_CATEGORY_COLUMNS: &str =
    "id, category_id, name, description, image, is_enabled, created_at, modified_at";

const SUB_SUB_CATEGORY_COLUMNS: &str = "id, category_id, sub_category_id, name, description, \
                                        image, is_enabled, created_at, modified_at";

// ============================================================================
// Sub categories
// ============================================================================

#[derive(Clone)]
pub struct PgSubCategoryRepository {
    pool: PgPool,
}

impl PgSubCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubCategoryRepository for PgSubCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubCategory>> {
        let result = sqlx::query_as::<_, SubCategoryModel>(
            r"
            SELECT id, category_id, name, description, image, is_enabled, created_at, modified_at
            FROM sub_categories
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SubCategory::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "sub_categories", "name", name, exclude_id)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &SubCategoryDraft) -> RepoResult<SubCategory> {
        let model = sqlx::query_as::<_, SubCategoryModel>(
            r"
            INSERT INTO sub_categories
                (category_id, name, description, image, is_enabled, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, category_id, name, description, image, is_enabled, created_at, modified_at
            ",
        )
        .bind(draft.category_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateName(draft.name.clone())))?;

        Ok(SubCategory::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, sub_category: &SubCategory) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE sub_categories
            SET category_id = $2, name = $3, description = $4, image = $5, is_enabled = $6,
                modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(sub_category.id)
        .bind(sub_category.category_id)
        .bind(&sub_category.name)
        .bind(&sub_category.description)
        .bind(&sub_category.image)
        .bind(sub_category.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| DomainError::DuplicateName(sub_category.name.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubCategoryNotFound(sub_category.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "sub_categories", id)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::SubCategoryNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "sub_categories", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::SubCategoryNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &SubCategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<SubCategory>> {
        ListingQuery::new("sub_categories", SUB_CATEGORY_COLUMNS)
            .scope(Predicate::any_of("category_id", &filter.category_ids))
            .search(&["name"], filter.search.as_deref())
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .page::<SubCategoryModel, SubCategory>(&self.pool, page, Some("is_enabled"))
            .await
            .map_err(map_db_error)
    }
}

// ============================================================================
// Sub sub categories
// ============================================================================

#[derive(Clone)]
pub struct PgSubSubCategoryRepository {
    pool: PgPool,
}

impl PgSubSubCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubSubCategoryRepository for PgSubSubCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubSubCategory>> {
        let result = sqlx::query_as::<_, SubSubCategoryModel>(
            r"
            SELECT id, category_id, sub_category_id, name, description, image, is_enabled,
                   created_at, modified_at
            FROM sub_sub_categories
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SubSubCategory::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "sub_sub_categories", "name", name, exclude_id)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &SubSubCategoryDraft) -> RepoResult<SubSubCategory> {
        let model = sqlx::query_as::<_, SubSubCategoryModel>(
            r"
            INSERT INTO sub_sub_categories
                (category_id, sub_category_id, name, description, image, is_enabled,
                 created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, category_id, sub_category_id, name, description, image, is_enabled,
                      created_at, modified_at
            ",
        )
        .bind(draft.category_id)
        .bind(draft.sub_category_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateName(draft.name.clone())))?;

        Ok(SubSubCategory::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, sub_sub_category: &SubSubCategory) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE sub_sub_categories
            SET category_id = $2, sub_category_id = $3, name = $4, description = $5,
                image = $6, is_enabled = $7, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(sub_sub_category.id)
        .bind(sub_sub_category.category_id)
        .bind(sub_sub_category.sub_category_id)
        .bind(&sub_sub_category.name)
        .bind(&sub_sub_category.description)
        .bind(&sub_sub_category.image)
        .bind(sub_sub_category.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| {
                DomainError::DuplicateName(sub_sub_category.name.clone())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubSubCategoryNotFound(sub_sub_category.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "sub_sub_categories", id)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::SubSubCategoryNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "sub_sub_categories", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::SubSubCategoryNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &SubSubCategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<SubSubCategory>> {
        ListingQuery::new("sub_sub_categories", SUB_SUB_CATEGORY_COLUMNS)
            .scope(Predicate::any_of("category_id", &filter.category_ids))
            .scope(Predicate::any_of("sub_category_id", &filter.sub_category_ids))
            .search(&["name"], filter.search.as_deref())
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .page::<SubSubCategoryModel, SubSubCategory>(&self.pool, page, Some("is_enabled"))
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSubCategoryRepository>();
        assert_send_sync::<PgSubSubCategoryRepository>();
    }
}
