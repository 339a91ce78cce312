//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{User, UserDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{OtpIssue, RepoResult, UserFilter, UserRepository};
use catalog_core::value_objects::{Page, PageRequest};

use crate::listing::ListingQuery;
use crate::models::UserModel;

use super::common::{soft_delete, value_taken};
use super::error::{map_db_error, map_unique_violation};

const USER_COLUMNS: &str = "id, email, user_name, display_name, otp, otp_count, last_otp_at, \
                            created_at, modified_at, deleted_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_user(draft_email: &str, draft_user_name: &str, constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("users_user_name_live_idx") => DomainError::DuplicateName(draft_user_name.to_string()),
        _ => DomainError::DuplicateEmail(draft_email.to_string()),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, user_name, display_name, otp, otp_count, last_otp_at,
                   created_at, modified_at, deleted_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        // a live account wins over soft-deleted rows with the same address
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, user_name, display_name, otp, otp_count, last_otp_at,
                   created_at, modified_at, deleted_at
            FROM users
            WHERE email = $1
            ORDER BY deleted_at IS NOT NULL, id DESC
            LIMIT 1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "users", "email", email, exclude_id)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn user_name_exists(
        &self,
        user_name: &str,
        exclude_id: Option<i64>,
    ) -> RepoResult<bool> {
        value_taken(&self.pool, "users", "user_name", user_name, exclude_id)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &UserDraft) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, user_name, display_name, created_at, modified_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, email, user_name, display_name, otp, otp_count, last_otp_at,
                      created_at, modified_at, deleted_at
            ",
        )
        .bind(&draft.email)
        .bind(&draft.user_name)
        .bind(&draft.display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| {
                duplicate_user(&draft.email, &draft.user_name, constraint)
            })
        })?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET email = $2, user_name = $3, display_name = $4, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.user_name)
        .bind(&user.display_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| {
                duplicate_user(&user.email, &user.user_name, constraint)
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        if soft_delete(&self.pool, "users", id).await.map_err(map_db_error)? {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &UserFilter, page: PageRequest) -> RepoResult<Page<User>> {
        ListingQuery::new("users", USER_COLUMNS)
            .search(
                &["email", "user_name", "display_name"],
                filter.search.as_deref(),
            )
            .page::<UserModel, User>(&self.pool, page, None)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, issue), fields(user_id = issue.user_id, count = issue.count))]
    async fn record_otp_issue(&self, issue: &OtpIssue) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET otp = $2, otp_count = $3, last_otp_at = $4, modified_at = NOW()
            WHERE id = $1
              AND deleted_at IS NULL
              AND otp_count = $5
              AND last_otp_at IS NOT DISTINCT FROM $6
            ",
        )
        .bind(issue.user_id)
        .bind(&issue.code)
        .bind(issue.count)
        .bind(issue.issued_at)
        .bind(issue.expected_count)
        .bind(issue.expected_last)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }

    #[test]
    fn test_duplicate_user_picks_field_from_constraint() {
        assert!(matches!(
            duplicate_user("a@x.com", "alice", Some("users_user_name_live_idx")),
            DomainError::DuplicateName(name) if name == "alice"
        ));
        assert!(matches!(
            duplicate_user("a@x.com", "alice", Some("users_email_live_idx")),
            DomainError::DuplicateEmail(email) if email == "a@x.com"
        ));
    }
}
