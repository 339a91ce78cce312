//! Sub category and sub sub category services
//!
//! Both levels check that every referenced ancestor exists, and the third
//! level also checks that its sub category belongs to its category.

use catalog_core::entities::{SubCategory, SubCategoryDraft, SubSubCategory, SubSubCategoryDraft};
use catalog_core::traits::{SubCategoryFilter, SubSubCategoryFilter};
use catalog_core::{parse_id_set, DomainError, TriState};
use tracing::{info, instrument};

use crate::dto::{
    CreateSubCategoryRequest, CreateSubSubCategoryRequest, CreatedResponse, Listing,
    ListingResponse, MessageResponse, SubCategoryQuery, SubCategoryResponse, SubSubCategoryQuery,
    SubSubCategoryResponse, UpdateSubCategoryRequest, UpdateSubSubCategoryRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Merge a single id parameter into an id-set parameter
pub(crate) fn id_set(single: Option<i64>, set: Option<&str>) -> ServiceResult<Vec<i64>> {
    let mut ids = parse_id_set(set)?;
    if let Some(id) = single {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn toggled(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

// ============================================================================
// Sub categories
// ============================================================================

/// Sub category service
pub struct SubCategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubCategoryService<'a> {
    /// Create a new SubCategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Admin listing; a single `category_id` must name an existing category
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: SubCategoryQuery,
    ) -> ServiceResult<ListingResponse<SubCategoryResponse>> {
        if let Some(category_id) = query.category_id {
            self.require_category(category_id).await?;
        }

        let filter = SubCategoryFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
            category_ids: id_set(query.category_id, query.category_ids.as_deref())?,
        };
        let page = self
            .ctx
            .sub_category_repo()
            .list(&filter, listing.page)
            .await?;
        Ok(ListingResponse::from_page(page))
    }

    /// Storefront listing: enabled sub categories only
    #[instrument(skip(self))]
    pub async fn list_enabled(
        &self,
        listing: Listing,
        query: SubCategoryQuery,
    ) -> ServiceResult<ListingResponse<SubCategoryResponse>> {
        self.list(
            listing,
            SubCategoryQuery {
                is_enabled: TriState::Yes,
                ..query
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<SubCategoryResponse> {
        Ok(SubCategoryResponse::from(self.require(id).await?))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        request: CreateSubCategoryRequest,
    ) -> ServiceResult<CreatedResponse> {
        self.require_category(request.category_id).await?;
        self.ensure_unique(&request.name, None).await?;

        let sub = self
            .ctx
            .sub_category_repo()
            .create(&SubCategoryDraft::from(request))
            .await?;

        info!(sub_category_id = sub.id, category_id = sub.category_id, "Sub category created");

        Ok(CreatedResponse {
            message: format!("Sub Category '{}' created successfully", sub.name),
            id: sub.id,
        })
    }

    #[instrument(skip(self, request), fields(sub_category_id = request.id))]
    pub async fn update(
        &self,
        request: UpdateSubCategoryRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut sub = self.require(request.id).await?;
        let fields = request.sub_category;

        // a sub category never moves to another category
        sub.ensure_parent(fields.category_id)?;
        self.require_category(fields.category_id).await?;
        self.ensure_unique(&fields.name, Some(sub.id)).await?;

        sub.name = fields.name;
        sub.description = fields.description;
        sub.image = fields.image;
        sub.is_enabled = fields.is_enabled;
        self.ctx.sub_category_repo().update(&sub).await?;

        info!(sub_category_id = sub.id, "Sub category updated");

        Ok(MessageResponse::new(format!(
            "Sub Category '{}' updated successfully",
            sub.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        let sub = self.require(id).await?;
        self.ctx.sub_category_repo().delete(id).await?;

        info!(sub_category_id = id, "Sub category deleted");

        Ok(MessageResponse::new(format!(
            "Sub Category '{}' deleted successfully",
            sub.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        let sub = self.require(id).await?;
        self.ctx.sub_category_repo().set_enabled(id, enabled).await?;

        Ok(MessageResponse::new(format!(
            "Sub Category {} has been {}.",
            sub.name,
            toggled(enabled)
        )))
    }

    async fn require(&self, id: i64) -> ServiceResult<SubCategory> {
        Ok(self
            .ctx
            .sub_category_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SubCategoryNotFound(id))?)
    }

    async fn require_category(&self, id: i64) -> ServiceResult<()> {
        self.ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))?;
        Ok(())
    }

    async fn ensure_unique(&self, name: &str, exclude_id: Option<i64>) -> ServiceResult<()> {
        if self
            .ctx
            .sub_category_repo()
            .name_exists(name, exclude_id)
            .await?
        {
            return Err(DomainError::DuplicateName(format!("Sub category '{name}'")).into());
        }
        Ok(())
    }
}

// ============================================================================
// Sub sub categories
// ============================================================================

/// Sub sub category service
pub struct SubSubCategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubSubCategoryService<'a> {
    /// Create a new SubSubCategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Admin listing; single parent ids must exist and agree with each other
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: SubSubCategoryQuery,
    ) -> ServiceResult<ListingResponse<SubSubCategoryResponse>> {
        if let Some(category_id) = query.category_id {
            self.require_category(category_id).await?;
        }
        if let Some(sub_category_id) = query.sub_category_id {
            let sub = self.require_sub_category(sub_category_id).await?;
            if let Some(category_id) = query.category_id {
                sub.ensure_parent(category_id)?;
            }
        }

        let filter = SubSubCategoryFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
            category_ids: id_set(query.category_id, query.category_ids.as_deref())?,
            sub_category_ids: id_set(query.sub_category_id, query.sub_category_ids.as_deref())?,
        };
        let page = self
            .ctx
            .sub_sub_category_repo()
            .list(&filter, listing.page)
            .await?;
        Ok(ListingResponse::from_page(page))
    }

    /// Storefront listing: enabled sub sub categories only
    #[instrument(skip(self))]
    pub async fn list_enabled(
        &self,
        listing: Listing,
        query: SubSubCategoryQuery,
    ) -> ServiceResult<ListingResponse<SubSubCategoryResponse>> {
        self.list(
            listing,
            SubSubCategoryQuery {
                is_enabled: TriState::Yes,
                ..query
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<SubSubCategoryResponse> {
        Ok(SubSubCategoryResponse::from(self.require(id).await?))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        request: CreateSubSubCategoryRequest,
    ) -> ServiceResult<CreatedResponse> {
        self.ensure_parents(request.category_id, request.sub_category_id)
            .await?;
        self.ensure_unique(&request.name, None).await?;

        let leaf = self
            .ctx
            .sub_sub_category_repo()
            .create(&SubSubCategoryDraft::from(request))
            .await?;

        info!(
            sub_sub_category_id = leaf.id,
            sub_category_id = leaf.sub_category_id,
            "Sub sub category created"
        );

        Ok(CreatedResponse {
            message: format!("Sub Sub Category '{}' created successfully", leaf.name),
            id: leaf.id,
        })
    }

    #[instrument(skip(self, request), fields(sub_sub_category_id = request.id))]
    pub async fn update(
        &self,
        request: UpdateSubSubCategoryRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut leaf = self.require(request.id).await?;
        let fields = request.sub_sub_category;

        leaf.ensure_parents(fields.category_id, fields.sub_category_id)?;
        self.ensure_parents(fields.category_id, fields.sub_category_id)
            .await?;
        self.ensure_unique(&fields.name, Some(leaf.id)).await?;

        leaf.name = fields.name;
        leaf.description = fields.description;
        leaf.image = fields.image;
        leaf.is_enabled = fields.is_enabled;
        self.ctx.sub_sub_category_repo().update(&leaf).await?;

        info!(sub_sub_category_id = leaf.id, "Sub sub category updated");

        Ok(MessageResponse::new(format!(
            "Sub Sub Category '{}' updated successfully",
            leaf.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        let leaf = self.require(id).await?;
        self.ctx.sub_sub_category_repo().delete(id).await?;

        info!(sub_sub_category_id = id, "Sub sub category deleted");

        Ok(MessageResponse::new(format!(
            "Sub Sub Category '{}' deleted successfully",
            leaf.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        let leaf = self.require(id).await?;
        self.ctx
            .sub_sub_category_repo()
            .set_enabled(id, enabled)
            .await?;

        Ok(MessageResponse::new(format!(
            "Sub Sub Category {} has been {}.",
            leaf.name,
            toggled(enabled)
        )))
    }

    /// Both parents exist and the sub category sits under the category
    async fn ensure_parents(&self, category_id: i64, sub_category_id: i64) -> ServiceResult<()> {
        self.require_category(category_id).await?;
        let sub = self.require_sub_category(sub_category_id).await?;
        sub.ensure_parent(category_id)?;
        Ok(())
    }

    async fn require(&self, id: i64) -> ServiceResult<SubSubCategory> {
        Ok(self
            .ctx
            .sub_sub_category_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SubSubCategoryNotFound(id))?)
    }

    async fn require_category(&self, id: i64) -> ServiceResult<()> {
        self.ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))?;
        Ok(())
    }

    async fn require_sub_category(&self, id: i64) -> ServiceResult<SubCategory> {
        Ok(self
            .ctx
            .sub_category_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SubCategoryNotFound(id))?)
    }

    async fn ensure_unique(&self, name: &str, exclude_id: Option<i64>) -> ServiceResult<()> {
        if self
            .ctx
            .sub_sub_category_repo()
            .name_exists(name, exclude_id)
            .await?
        {
            return Err(DomainError::DuplicateName(format!("Sub sub category '{name}'")).into());
        }
        Ok(())
    }
}
