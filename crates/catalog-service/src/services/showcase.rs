//! Advertisement and "who" highlight services

use catalog_core::entities::{AdvertisementDraft, WhoDraft};
use catalog_core::traits::{AdvertisementFilter, WhoFilter};
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    AdvertisementResponse, CreateAdvertisementRequest, CreateWhoRequest, CreatedResponse,
    EnabledQuery, Listing, ListingResponse, MessageResponse, UpdateAdvertisementRequest,
    UpdateWhoRequest, WhoResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Advertisement banner service
pub struct AdvertisementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdvertisementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Advertisements carry no text, so `listing.search` is ignored
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: EnabledQuery,
    ) -> ServiceResult<ListingResponse<AdvertisementResponse>> {
        let filter = AdvertisementFilter {
            is_enabled: query.is_enabled,
        };
        let page = self
            .ctx
            .advertisement_repo()
            .list(&filter, listing.page)
            .await?;
        Ok(ListingResponse::from_page(page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<AdvertisementResponse> {
        let advertisement = self
            .ctx
            .advertisement_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AdvertisementNotFound(id))?;
        Ok(AdvertisementResponse::from(advertisement))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateAdvertisementRequest,
    ) -> ServiceResult<CreatedResponse> {
        let advertisement = self
            .ctx
            .advertisement_repo()
            .create(&AdvertisementDraft::from(request))
            .await?;

        info!(advertisement_id = advertisement.id, "Advertisement created");

        Ok(CreatedResponse {
            message: format!(
                "An Advertisement with Id: {} created successfully",
                advertisement.id
            ),
            id: advertisement.id,
        })
    }

    #[instrument(skip(self, request), fields(advertisement_id = request.id))]
    pub async fn update(
        &self,
        request: UpdateAdvertisementRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut advertisement = self
            .ctx
            .advertisement_repo()
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::AdvertisementNotFound(request.id))?;

        advertisement.image_url = request.advertisement.image_url;
        advertisement.is_enabled = request.advertisement.is_enabled;
        self.ctx.advertisement_repo().update(&advertisement).await?;

        info!(advertisement_id = advertisement.id, "Advertisement updated");

        Ok(MessageResponse::new(format!(
            "Advertisement with Id: {} updated successfully",
            advertisement.id
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.advertisement_repo().delete(id).await?;

        info!(advertisement_id = id, "Advertisement deleted");

        Ok(MessageResponse::new(format!(
            "Advertisement With Id: {id} deleted successfully"
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        self.ctx.advertisement_repo().set_enabled(id, enabled).await?;

        Ok(MessageResponse::new(format!(
            "Advertisement With Id: {id} has been {}.",
            if enabled { "enabled" } else { "disabled" }
        )))
    }
}

/// "Who" highlight service; entries are created and edited, never removed
pub struct WhoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WhoService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: EnabledQuery,
    ) -> ServiceResult<ListingResponse<WhoResponse>> {
        let filter = WhoFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
        };
        let page = self.ctx.who_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<WhoResponse> {
        let who = self
            .ctx
            .who_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::WhoNotFound(id))?;
        Ok(WhoResponse::from(who))
    }

    #[instrument(skip(self, request), fields(key = %request.key))]
    pub async fn create(&self, request: CreateWhoRequest) -> ServiceResult<CreatedResponse> {
        let who = self.ctx.who_repo().create(&WhoDraft::from(request)).await?;

        info!(who_id = who.id, "Who entry created");

        Ok(CreatedResponse {
            message: format!("New entity 'Who' created successfully with Id: {}", who.id),
            id: who.id,
        })
    }

    #[instrument(skip(self, request), fields(who_id = request.id))]
    pub async fn update(&self, request: UpdateWhoRequest) -> ServiceResult<MessageResponse> {
        let mut who = self
            .ctx
            .who_repo()
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::WhoNotFound(request.id))?;

        who.key = request.who.key;
        who.value = request.who.value;
        who.mdi_icon = request.who.mdi_icon;
        who.is_enabled = request.who.is_enabled;
        self.ctx.who_repo().update(&who).await?;

        Ok(MessageResponse::new(format!(
            "Entity 'Who' with Id: {} updated successfully",
            who.id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::Harness;
    use crate::services::ServiceError;
    use catalog_core::TriState;

    fn banner(image_url: &str) -> CreateAdvertisementRequest {
        CreateAdvertisementRequest {
            image_url: image_url.to_string(),
            is_enabled: true,
        }
    }

    fn who(key: &str) -> CreateWhoRequest {
        CreateWhoRequest {
            key: key.to_string(),
            value: Some("Since 2015".to_string()),
            mdi_icon: Some("mdi-store".to_string()),
            is_enabled: true,
        }
    }

    #[tokio::test]
    async fn test_advertisement_lifecycle() {
        let h = Harness::new();
        let service = AdvertisementService::new(&h.ctx);

        let created = service
            .create(banner("https://cdn.example.com/ads/1.png"))
            .await
            .unwrap();
        assert_eq!(
            created.message,
            format!("An Advertisement with Id: {} created successfully", created.id)
        );

        service
            .update(UpdateAdvertisementRequest {
                id: created.id,
                advertisement: banner("https://cdn.example.com/ads/2.png"),
            })
            .await
            .unwrap();
        let stored = service.get(created.id).await.unwrap();
        assert_eq!(stored.image_url, "https://cdn.example.com/ads/2.png");

        let message = service.set_enabled(created.id, false).await.unwrap();
        assert_eq!(
            message.message,
            format!("Advertisement With Id: {} has been disabled.", created.id)
        );

        service.delete(created.id).await.unwrap();
        let err = service.get(created.id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::AdvertisementNotFound(_))
        ));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_advertisement_listing_filters_flag() {
        let h = Harness::new();
        let service = AdvertisementService::new(&h.ctx);
        service.create(banner("https://cdn.example.com/a.png")).await.unwrap();
        let hidden = service
            .create(banner("https://cdn.example.com/b.png"))
            .await
            .unwrap();
        service.set_enabled(hidden.id, false).await.unwrap();

        let listing = service
            .list(
                Listing::default(),
                EnabledQuery {
                    is_enabled: TriState::No,
                },
            )
            .await
            .unwrap();
        assert_eq!(listing.total_count, 1);
        assert_eq!(listing.data[0].id, hidden.id);
    }

    #[tokio::test]
    async fn test_missing_advertisement_on_toggle() {
        let h = Harness::new();
        let err = AdvertisementService::new(&h.ctx)
            .set_enabled(5, true)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::AdvertisementNotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_who_create_and_edit() {
        let h = Harness::new();
        let service = WhoService::new(&h.ctx);

        let created = service.create(who("Founded")).await.unwrap();
        assert_eq!(
            created.message,
            format!("New entity 'Who' created successfully with Id: {}", created.id)
        );

        service
            .update(UpdateWhoRequest {
                id: created.id,
                who: CreateWhoRequest {
                    value: Some("Since 2016".to_string()),
                    ..who("Founded")
                },
            })
            .await
            .unwrap();

        let stored = service.get(created.id).await.unwrap();
        assert_eq!(stored.value.as_deref(), Some("Since 2016"));
        assert_eq!(stored.mdi_icon.as_deref(), Some("mdi-store"));
    }

    #[tokio::test]
    async fn test_who_listing_searches_key() {
        let h = Harness::new();
        let service = WhoService::new(&h.ctx);
        service.create(who("Founded")).await.unwrap();
        service.create(who("Customers")).await.unwrap();

        let listing = service
            .list(
                Listing {
                    search: Some("Cust".to_string()),
                    ..Listing::default()
                },
                EnabledQuery::default(),
            )
            .await
            .unwrap();
        assert_eq!(listing.total_count, 1);
        assert_eq!(listing.data[0].key, "Customers");
    }

    #[tokio::test]
    async fn test_missing_who() {
        let h = Harness::new();
        let err = WhoService::new(&h.ctx).get(11).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::WhoNotFound(11))));
        assert_eq!(err.error_code(), "UNKNOWN_WHO");
    }
}
