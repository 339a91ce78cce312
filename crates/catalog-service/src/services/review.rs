//! Review and contact message services
//!
//! Both are submitted anonymously from the storefront and moderated by admins.

use catalog_core::entities::{ContactEmailDraft, ReviewDraft};
use catalog_core::traits::{ContactEmailFilter, ReviewFilter};
use catalog_core::{DomainError, TriState};
use tracing::{info, instrument};

use crate::dto::{
    ContactEmailQuery, ContactEmailResponse, CreateContactEmailRequest, CreateReviewRequest,
    CreatedResponse, Listing, ListingResponse, MessageResponse, ReviewQuery, ReviewResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: ReviewQuery,
    ) -> ServiceResult<ListingResponse<ReviewResponse>> {
        let filter = ReviewFilter {
            search: listing.search,
            is_approved: query.is_approved,
        };
        let page = self.ctx.review_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    /// Storefront listing; only approved reviews are visible
    #[instrument(skip(self))]
    pub async fn list_approved(
        &self,
        listing: Listing,
    ) -> ServiceResult<ListingResponse<ReviewResponse>> {
        self.list(
            listing,
            ReviewQuery {
                is_approved: TriState::Yes,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ReviewResponse> {
        let review = self
            .ctx
            .review_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReviewNotFound(id))?;
        Ok(ReviewResponse::from(review))
    }

    /// New reviews wait for approval
    #[instrument(skip(self, request), fields(rating = request.rating))]
    pub async fn submit(&self, request: CreateReviewRequest) -> ServiceResult<CreatedResponse> {
        let review = self
            .ctx
            .review_repo()
            .create(&ReviewDraft::from(request))
            .await?;

        info!(review_id = review.id, "Review submitted");

        Ok(CreatedResponse {
            message: format!("Review with Id: {} created successfully", review.id),
            id: review.id,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.get(id).await?;
        self.ctx.review_repo().delete(id).await?;

        info!(review_id = id, "Review deleted");

        Ok(MessageResponse::new(format!(
            "Review with Id: {id} deleted successfully"
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_approved(&self, id: i64, approved: bool) -> ServiceResult<MessageResponse> {
        self.ctx.review_repo().set_approved(id, approved).await?;

        info!(review_id = id, approved, "Review moderated");

        Ok(MessageResponse::new(format!(
            "Review {id} has been {}.",
            if approved { "approved" } else { "rejected" }
        )))
    }
}

/// Contact message service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: ContactEmailQuery,
    ) -> ServiceResult<ListingResponse<ContactEmailResponse>> {
        let filter = ContactEmailFilter {
            search: listing.search,
            is_read: query.is_read,
        };
        let page = self
            .ctx
            .contact_email_repo()
            .list(&filter, listing.page)
            .await?;
        Ok(ListingResponse::from_page(page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ContactEmailResponse> {
        let email = self
            .ctx
            .contact_email_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ContactEmailNotFound(id))?;
        Ok(ContactEmailResponse::from(email))
    }

    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: CreateContactEmailRequest,
    ) -> ServiceResult<CreatedResponse> {
        let email = self
            .ctx
            .contact_email_repo()
            .create(&ContactEmailDraft::from(request))
            .await?;

        info!(contact_email_id = email.id, "Contact message received");

        Ok(CreatedResponse {
            message: format!("Email with Id: {} created successfully", email.id),
            id: email.id,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.contact_email_repo().delete(id).await?;

        Ok(MessageResponse::new(format!(
            "Email with Id: {id} deleted successfully"
        )))
    }

    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.contact_email_repo().mark_read(id).await?;

        Ok(MessageResponse::new(format!(
            "Email {id} has been marked as read."
        )))
    }
}
