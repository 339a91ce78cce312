//! Item service
//!
//! Items are written together with their child rows; the repository replaces
//! the children as a set inside one transaction.

use catalog_core::entities::ItemDraft;
use catalog_core::traits::ItemFilter;
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CreateItemRequest, CreatedResponse, ItemQuery, ItemResponse, Listing, ListingResponse,
    MessageResponse, UpdateItemRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sub_category::id_set;

/// Item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    /// Create a new ItemService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Admin listing over every item
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: ItemQuery,
    ) -> ServiceResult<ListingResponse<ItemResponse>> {
        self.search(listing, query, false).await
    }

    /// Storefront listing: enabled items under an enabled category chain
    #[instrument(skip(self))]
    pub async fn list_storefront(
        &self,
        listing: Listing,
        query: ItemQuery,
    ) -> ServiceResult<ListingResponse<ItemResponse>> {
        self.search(listing, query, true).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ItemResponse> {
        let detail = self
            .ctx
            .item_repo()
            .find_detail(id)
            .await?
            .ok_or(DomainError::ItemNotFound(id))?;
        Ok(ItemResponse::from(detail))
    }

    /// Single item as the storefront sees it; hidden items are not found
    #[instrument(skip(self))]
    pub async fn get_storefront(&self, id: i64) -> ServiceResult<ItemResponse> {
        let detail = self
            .ctx
            .item_repo()
            .find_storefront_detail(id)
            .await?
            .ok_or(DomainError::ItemNotFound(id))?;
        Ok(ItemResponse::from(detail))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateItemRequest) -> ServiceResult<CreatedResponse> {
        let (draft, children) = request.into_parts();

        self.ensure_ancestors(&draft).await?;
        self.ensure_unique(&draft.name, None).await?;

        let item = self.ctx.item_repo().create(&draft, &children).await?;

        info!(
            item_id = item.id,
            properties = children.properties.len(),
            features = children.features.len(),
            images = children.images.len(),
            embeds = children.embeds.len(),
            "Item created"
        );

        Ok(CreatedResponse {
            message: format!("Item '{}' created successfully.", item.name),
            id: item.id,
        })
    }

    #[instrument(skip(self, request), fields(item_id = request.id))]
    pub async fn update(&self, request: UpdateItemRequest) -> ServiceResult<MessageResponse> {
        let mut detail = self
            .ctx
            .item_repo()
            .find_detail(request.id)
            .await?
            .ok_or(DomainError::ItemNotFound(request.id))?;
        let (draft, children) = request.item.into_parts();

        self.ensure_ancestors(&draft).await?;
        self.ensure_unique(&draft.name, Some(detail.item.id)).await?;

        detail.item.apply(draft);
        self.ctx.item_repo().update(&detail.item, &children).await?;

        info!(item_id = detail.item.id, "Item updated");

        Ok(MessageResponse::new(format!(
            "Item '{}' updated successfully.",
            detail.item.name
        )))
    }

    /// Delete an item; its children go with it
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        let detail = self
            .ctx
            .item_repo()
            .find_detail(id)
            .await?
            .ok_or(DomainError::ItemNotFound(id))?;
        self.ctx.item_repo().delete(id).await?;

        info!(item_id = id, "Item deleted");

        Ok(MessageResponse::new(format!(
            "Item '{}' and its related records deleted successfully",
            detail.item.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        let detail = self
            .ctx
            .item_repo()
            .find_detail(id)
            .await?
            .ok_or(DomainError::ItemNotFound(id))?;
        self.ctx.item_repo().set_enabled(id, enabled).await?;

        Ok(MessageResponse::new(format!(
            "Item {} has been {}.",
            detail.item.name,
            if enabled { "enabled" } else { "disabled" }
        )))
    }

    async fn search(
        &self,
        listing: Listing,
        query: ItemQuery,
        storefront: bool,
    ) -> ServiceResult<ListingResponse<ItemResponse>> {
        self.ensure_scope(&query).await?;

        let filter = ItemFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
            is_featured: query.is_featured,
            is_discount: query.is_discount,
            is_hotdeal: query.is_hotdeal,
            is_sold: query.is_sold,
            category_ids: id_set(query.category_id, query.category_ids.as_deref())?,
            sub_category_ids: id_set(query.sub_category_id, query.sub_category_ids.as_deref())?,
            sub_sub_category_ids: id_set(
                query.sub_sub_category_id,
                query.sub_sub_category_ids.as_deref(),
            )?,
            storefront,
        };

        let page = self.ctx.item_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    /// Single ancestor ids in a listing query must name existing rows
    async fn ensure_scope(&self, query: &ItemQuery) -> ServiceResult<()> {
        if let Some(id) = query.category_id {
            self.ctx
                .category_repo()
                .find_by_id(id)
                .await?
                .ok_or(DomainError::CategoryNotFound(id))?;
        }
        if let Some(id) = query.sub_category_id {
            self.ctx
                .sub_category_repo()
                .find_by_id(id)
                .await?
                .ok_or(DomainError::SubCategoryNotFound(id))?;
        }
        if let Some(id) = query.sub_sub_category_id {
            self.ctx
                .sub_sub_category_repo()
                .find_by_id(id)
                .await?
                .ok_or(DomainError::SubSubCategoryNotFound(id))?;
        }
        Ok(())
    }

    /// The category chain named by a draft exists and is consistent
    async fn ensure_ancestors(&self, draft: &ItemDraft) -> ServiceResult<()> {
        self.ctx
            .category_repo()
            .find_by_id(draft.category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(draft.category_id))?;

        let sub = match draft.sub_category_id {
            Some(id) => {
                let sub = self
                    .ctx
                    .sub_category_repo()
                    .find_by_id(id)
                    .await?
                    .ok_or(DomainError::SubCategoryNotFound(id))?;
                sub.ensure_parent(draft.category_id)?;
                Some(sub)
            }
            None => None,
        };

        if let Some(leaf_id) = draft.sub_sub_category_id {
            let Some(sub) = sub else {
                return Err(DomainError::ValidationError(
                    "sub_sub_category_id requires sub_category_id".to_string(),
                )
                .into());
            };

            let leaf = self
                .ctx
                .sub_sub_category_repo()
                .find_by_id(leaf_id)
                .await?
                .ok_or(DomainError::SubSubCategoryNotFound(leaf_id))?;
            leaf.ensure_parents(draft.category_id, sub.id)?;
        }

        Ok(())
    }

    async fn ensure_unique(&self, name: &str, exclude_id: Option<i64>) -> ServiceResult<()> {
        if self.ctx.item_repo().name_exists(name, exclude_id).await? {
            return Err(DomainError::DuplicateName(format!("Item '{name}'")).into());
        }
        Ok(())
    }
}
