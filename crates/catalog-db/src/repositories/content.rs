//! PostgreSQL implementations of FaqRepository and HeroRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{Faq, FaqDraft, Hero, HeroDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{FaqFilter, FaqRepository, HeroFilter, HeroRepository, RepoResult};
use catalog_core::value_objects::{Page, PageRequest};

use crate::listing::{ListingQuery, Predicate};
use crate::models::{FaqModel, HeroModel};

use super::common::{set_flag, soft_delete};
use super::error::map_db_error;

const FAQ_COLUMNS: &str = "id, question, answer, is_enabled, created_at, modified_at";

const HERO_COLUMNS: &str =
    "id, title, sub_title, image_url, is_enabled, created_at, modified_at";

// ============================================================================
// FAQs
// ============================================================================

#[derive(Clone)]
pub struct PgFaqRepository {
    pool: PgPool,
}

impl PgFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqRepository for PgFaqRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Faq>> {
        let result = sqlx::query_as::<_, FaqModel>(
            r"
            SELECT id, question, answer, is_enabled, created_at, modified_at
            FROM faqs
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Faq::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &FaqDraft) -> RepoResult<Faq> {
        let model = sqlx::query_as::<_, FaqModel>(
            r"
            INSERT INTO faqs (question, answer, is_enabled, created_at, modified_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, question, answer, is_enabled, created_at, modified_at
            ",
        )
        .bind(&draft.question)
        .bind(&draft.answer)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Faq::from(model))
    }

    #[instrument(skip(self, faq), fields(faq_id = faq.id))]
    async fn update(&self, faq: &Faq) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE faqs
            SET question = $2, answer = $3, is_enabled = $4, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(faq.id)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(faq.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FaqNotFound(faq.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "faqs", id).await.map_err(map_db_error)? {
            Ok(())
        } else {
            Err(DomainError::FaqNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "faqs", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::FaqNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &FaqFilter, page: PageRequest) -> RepoResult<Page<Faq>> {
        ListingQuery::new("faqs", FAQ_COLUMNS)
            .search(&["question", "answer"], filter.search.as_deref())
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .page::<FaqModel, Faq>(&self.pool, page, Some("is_enabled"))
            .await
            .map_err(map_db_error)
    }
}

// ============================================================================
// Heroes
// ============================================================================

#[derive(Clone)]
pub struct PgHeroRepository {
    pool: PgPool,
}

impl PgHeroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroRepository for PgHeroRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Hero>> {
        let result = sqlx::query_as::<_, HeroModel>(
            r"
            SELECT id, title, sub_title, image_url, is_enabled, created_at, modified_at
            FROM heros
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Hero::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &HeroDraft) -> RepoResult<Hero> {
        let model = sqlx::query_as::<_, HeroModel>(
            r"
            INSERT INTO heros (title, sub_title, image_url, is_enabled, created_at, modified_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, title, sub_title, image_url, is_enabled, created_at, modified_at
            ",
        )
        .bind(&draft.title)
        .bind(&draft.sub_title)
        .bind(&draft.image_url)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Hero::from(model))
    }

    #[instrument(skip(self, hero), fields(hero_id = hero.id))]
    async fn update(&self, hero: &Hero) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE heros
            SET title = $2, sub_title = $3, image_url = $4, is_enabled = $5, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(hero.id)
        .bind(&hero.title)
        .bind(&hero.sub_title)
        .bind(&hero.image_url)
        .bind(hero.is_enabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HeroNotFound(hero.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "heros", id).await.map_err(map_db_error)? {
            Ok(())
        } else {
            Err(DomainError::HeroNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "heros", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::HeroNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &HeroFilter, page: PageRequest) -> RepoResult<Page<Hero>> {
        ListingQuery::new("heros", HERO_COLUMNS)
            .search(&["title", "sub_title"], filter.search.as_deref())
            .filter(Predicate::flag("is_enabled", filter.is_enabled))
            .page::<HeroModel, Hero>(&self.pool, page, Some("is_enabled"))
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
        assert_send_sync::<PgFaqRepository>();
        assert_send_sync::<PgHeroRepository>();
    }
}
