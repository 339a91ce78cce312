//! PostgreSQL implementations of ReviewRepository and ContactEmailRepository
//!
//! Both tables are written by storefront visitors and moderated by admins.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{ContactEmail, ContactEmailDraft, Review, ReviewDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{
    ContactEmailFilter, ContactEmailRepository, RepoResult, ReviewFilter, ReviewRepository,
};
use catalog_core::value_objects::{Page, PageRequest};

use crate::listing::{ListingQuery, Predicate};
use crate::models::{ContactEmailModel, ReviewModel};

use super::common::{set_flag, soft_delete};
use super::error::map_db_error;

const REVIEW_COLUMNS: &str =
    "id, review, rating, email, name, is_approved, created_at, modified_at";

const CONTACT_EMAIL_COLUMNS: &str =
    "id, name, email, phone, subject, message, is_read, created_at, modified_at";

// ============================================================================
// Reviews
// ============================================================================

#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, review, rating, email, name, is_approved, created_at, modified_at
            FROM reviews
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self, draft), fields(rating = draft.rating))]
    async fn create(&self, draft: &ReviewDraft) -> RepoResult<Review> {
        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            INSERT INTO reviews (review, rating, email, name, is_approved, created_at, modified_at)
            VALUES ($1, $2, $3, $4, FALSE, NOW(), NOW())
            RETURNING id, review, rating, email, name, is_approved, created_at, modified_at
            ",
        )
        .bind(&draft.review)
        .bind(draft.rating)
        .bind(&draft.email)
        .bind(&draft.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Review::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "reviews", id).await.map_err(map_db_error)? {
            Ok(())
        } else {
            Err(DomainError::ReviewNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_approved(&self, id: i64, approved: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "reviews", "is_approved", id, approved)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::ReviewNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ReviewFilter, page: PageRequest) -> RepoResult<Page<Review>> {
        ListingQuery::new("reviews", REVIEW_COLUMNS)
            .search(&["name", "email", "review"], filter.search.as_deref())
            .filter(Predicate::flag("is_approved", filter.is_approved))
            .page::<ReviewModel, Review>(&self.pool, page, Some("is_approved"))
            .await
            .map_err(map_db_error)
    }
}

// ============================================================================
// Contact emails
// ============================================================================

#[derive(Clone)]
pub struct PgContactEmailRepository {
    pool: PgPool,
}

impl PgContactEmailRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactEmailRepository for PgContactEmailRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ContactEmail>> {
        let result = sqlx::query_as::<_, ContactEmailModel>(
            r"
            SELECT id, name, email, phone, subject, message, is_read, created_at, modified_at
            FROM emails
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ContactEmail::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &ContactEmailDraft) -> RepoResult<ContactEmail> {
        let model = sqlx::query_as::<_, ContactEmailModel>(
            r"
            INSERT INTO emails (name, email, phone, subject, message, is_read, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, NOW(), NOW())
            RETURNING id, name, email, phone, subject, message, is_read, created_at, modified_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.subject)
        .bind(&draft.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ContactEmail::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "emails", id).await.map_err(map_db_error)? {
            Ok(())
        } else {
            Err(DomainError::ContactEmailNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: i64) -> RepoResult<()> {
        if set_flag(&self.pool, "emails", "is_read", id, true)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::ContactEmailNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &ContactEmailFilter,
        page: PageRequest,
    ) -> RepoResult<Page<ContactEmail>> {
        ListingQuery::new("emails", CONTACT_EMAIL_COLUMNS)
            .search(
                &["name", "email", "subject", "message"],
                filter.search.as_deref(),
            )
            .filter(Predicate::flag("is_read", filter.is_read))
            .page::<ContactEmailModel, ContactEmail>(&self.pool, page, Some("is_read"))
            .await
            .map_err(map_db_error)
    }
}
