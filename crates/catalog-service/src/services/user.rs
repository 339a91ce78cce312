//! User service
//!
//! Admin account management. Accounts are provisioned by other admins and
//! sign in with passcodes, so there is no password handling here.

use catalog_core::entities::{User, UserDraft};
use catalog_core::traits::UserFilter;
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CreateUserRequest, CreatedResponse, Listing, ListingResponse, MessageResponse,
    UpdateUserRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, listing: Listing) -> ServiceResult<ListingResponse<UserResponse>> {
        let filter = UserFilter {
            search: listing.search,
        };
        let page = self.ctx.user_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<UserResponse> {
        let user = self.require(id).await?;
        Ok(UserResponse::from(user))
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<CreatedResponse> {
        self.ensure_unique(&request.email, &request.user_name, None)
            .await?;

        let user = self
            .ctx
            .user_repo()
            .create(&UserDraft::from(request))
            .await?;

        info!(user_id = user.id, "User created");

        Ok(CreatedResponse {
            message: format!("User '{}' created successfully", user.user_name),
            id: user.id,
        })
    }

    #[instrument(skip(self, request), fields(user_id = request.id))]
    pub async fn update(&self, request: UpdateUserRequest) -> ServiceResult<MessageResponse> {
        let mut user = self.require(request.id).await?;

        self.ensure_unique(&request.email, &request.user_name, Some(user.id))
            .await?;

        user.email = request.email;
        user.set_profile(request.user_name, request.display_name);
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = user.id, "User updated");

        Ok(MessageResponse::new(format!(
            "User '{}' updated successfully",
            user.user_name
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        let user = self.require(id).await?;
        self.ctx.user_repo().delete(user.id).await?;

        info!(user_id = id, "User deleted");

        Ok(MessageResponse::new(format!(
            "User '{}' deleted successfully",
            user.user_name
        )))
    }

    /// Load a live account
    async fn require(&self, id: i64) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .filter(|user| !user.is_deleted())
            .ok_or(DomainError::UserNotFound(id))?)
    }

    async fn ensure_unique(
        &self,
        email: &str,
        user_name: &str,
        exclude_id: Option<i64>,
    ) -> ServiceResult<()> {
        let repo = self.ctx.user_repo();

        if repo.email_exists(email, exclude_id).await? {
            return Err(DomainError::DuplicateEmail(email.to_string()).into());
        }
        if repo.user_name_exists(user_name, exclude_id).await? {
            return Err(DomainError::DuplicateName(format!("User name '{user_name}'")).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::services::testing::Harness;
    use crate::services::ServiceError;

    fn create(email: &str, user_name: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            user_name: user_name.to_string(),
            display_name: Some("Admin".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let h = Harness::new();
        let service = UserService::new(&h.ctx);

        service.create(create("a@example.com", "alice")).await.unwrap();

        let err = service
            .create(create("a@example.com", "bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::DuplicateEmail(_))));

        let err = service
            .create(create("b@example.com", "alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_update_allows_own_values() {
        let h = Harness::new();
        let service = UserService::new(&h.ctx);
        let created = service.create(create("a@example.com", "alice")).await.unwrap();

        service
            .update(UpdateUserRequest {
                id: created.id,
                email: "a@example.com".to_string(),
                user_name: "alice".to_string(),
                display_name: Some("Alice A.".to_string()),
            })
            .await
            .unwrap();

        let user = h.users.get(created.id).unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Alice A."));
        assert!(user.modified_at.is_some());
    }

    #[tokio::test]
    async fn test_deleted_user_is_not_found() {
        let h = Harness::new();
        let user = h.users.insert("a@example.com", "alice");
        h.users.modify(user.id, |u| u.deleted_at = Some(Utc::now()));
        let service = UserService::new(&h.ctx);

        let err = service.get(user.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::UserNotFound(_))));
        assert_eq!(err.status_code(), 404);

        // the address is free again
        assert!(service.create(create("a@example.com", "alice")).await.is_ok());
    }
}
