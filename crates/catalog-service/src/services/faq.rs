//! FAQ and hero banner services

use catalog_core::entities::{FaqDraft, HeroDraft};
use catalog_core::traits::{FaqFilter, HeroFilter};
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CreateFaqRequest, CreateHeroRequest, CreatedResponse, EnabledQuery, FaqResponse,
    HeroResponse, Listing, ListingResponse, MessageResponse, UpdateFaqRequest, UpdateHeroRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// FAQ service
pub struct FaqService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FaqService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: EnabledQuery,
    ) -> ServiceResult<ListingResponse<FaqResponse>> {
        let filter = FaqFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
        };
        let page = self.ctx.faq_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<FaqResponse> {
        let faq = self
            .ctx
            .faq_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FaqNotFound(id))?;
        Ok(FaqResponse::from(faq))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateFaqRequest) -> ServiceResult<CreatedResponse> {
        let faq = self.ctx.faq_repo().create(&FaqDraft::from(request)).await?;

        info!(faq_id = faq.id, "FAQ created");

        Ok(CreatedResponse {
            message: format!("FAQ with Id: {} created successfully", faq.id),
            id: faq.id,
        })
    }

    #[instrument(skip(self, request), fields(faq_id = request.id))]
    pub async fn update(&self, request: UpdateFaqRequest) -> ServiceResult<MessageResponse> {
        let mut faq = self
            .ctx
            .faq_repo()
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::FaqNotFound(request.id))?;

        faq.question = request.faq.question;
        faq.answer = request.faq.answer;
        faq.is_enabled = request.faq.is_enabled;
        self.ctx.faq_repo().update(&faq).await?;

        Ok(MessageResponse::new(format!(
            "FAQ with Id: {} updated successfully",
            faq.id
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.faq_repo().delete(id).await?;

        info!(faq_id = id, "FAQ deleted");

        Ok(MessageResponse::new(format!(
            "FAQ with Id: {id} deleted successfully"
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        self.ctx.faq_repo().set_enabled(id, enabled).await?;

        Ok(MessageResponse::new(format!(
            "FAQ {id} has been {}.",
            if enabled { "enabled" } else { "disabled" }
        )))
    }
}

/// Hero banner service
pub struct HeroService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HeroService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: EnabledQuery,
    ) -> ServiceResult<ListingResponse<HeroResponse>> {
        let filter = HeroFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
        };
        let page = self.ctx.hero_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<HeroResponse> {
        let hero = self
            .ctx
            .hero_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::HeroNotFound(id))?;
        Ok(HeroResponse::from(hero))
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateHeroRequest) -> ServiceResult<CreatedResponse> {
        let hero = self
            .ctx
            .hero_repo()
            .create(&HeroDraft::from(request))
            .await?;

        info!(hero_id = hero.id, "Hero created");

        Ok(CreatedResponse {
            message: format!("Hero '{}' created successfully", hero.title),
            id: hero.id,
        })
    }

    #[instrument(skip(self, request), fields(hero_id = request.id))]
    pub async fn update(&self, request: UpdateHeroRequest) -> ServiceResult<MessageResponse> {
        let mut hero = self
            .ctx
            .hero_repo()
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::HeroNotFound(request.id))?;

        hero.title = request.hero.title;
        hero.sub_title = request.hero.sub_title;
        hero.image_url = request.hero.image_url;
        hero.is_enabled = request.hero.is_enabled;
        self.ctx.hero_repo().update(&hero).await?;

        Ok(MessageResponse::new(format!(
            "Hero '{}' updated successfully",
            hero.title
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.hero_repo().delete(id).await?;

        info!(hero_id = id, "Hero deleted");

        Ok(MessageResponse::new(format!(
            "Hero with Id: {id} deleted successfully"
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        self.ctx.hero_repo().set_enabled(id, enabled).await?;

        Ok(MessageResponse::new(format!(
            "Hero {id} has been {}.",
            if enabled { "enabled" } else { "disabled" }
        )))
    }
}
