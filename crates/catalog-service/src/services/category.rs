//! Category service
//!
//! Top-level categories, plus the public category tree.

use catalog_core::entities::{Category, CategoryDraft};
use catalog_core::traits::{CategoryFilter, SubCategoryFilter, SubSubCategoryFilter};
use catalog_core::{DomainError, PageRequest, TriState};
use tracing::{info, instrument};

use crate::dto::{
    CategoryDetailResponse, CategoryNode, CategoryResponse, CreateCategoryRequest,
    CreatedResponse, EnabledQuery, Listing, ListingResponse, MessageResponse, SubCategoryNode,
    SubSubCategoryNode, UpdateCategoryRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        listing: Listing,
        query: EnabledQuery,
    ) -> ServiceResult<ListingResponse<CategoryResponse>> {
        let filter = CategoryFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
            ..CategoryFilter::default()
        };
        let page = self.ctx.category_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    /// Same rows as [`list`](Self::list), but the enabled/disabled counts
    /// follow the search term while `all` stays the whole table
    #[instrument(skip(self))]
    pub async fn list_all(
        &self,
        listing: Listing,
        query: EnabledQuery,
    ) -> ServiceResult<ListingResponse<CategoryResponse>> {
        let filter = CategoryFilter {
            search: listing.search,
            is_enabled: query.is_enabled,
            counts_follow_search: true,
        };
        let page = self.ctx.category_repo().list(&filter, listing.page).await?;
        Ok(ListingResponse::from_page(page))
    }

    /// Get a category together with its live sub category count
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<CategoryDetailResponse> {
        let category = self.require(id).await?;
        let sub_category_count = self.ctx.category_repo().sub_category_count(id).await?;

        Ok(CategoryDetailResponse {
            category: CategoryResponse::from(category),
            sub_category_count,
        })
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateCategoryRequest) -> ServiceResult<CreatedResponse> {
        self.ensure_unique(&request.name, None).await?;

        let category = self
            .ctx
            .category_repo()
            .create(&CategoryDraft::from(request))
            .await?;

        info!(category_id = category.id, "Category created");

        Ok(CreatedResponse {
            message: format!("Category '{}' created successfully", category.name),
            id: category.id,
        })
    }

    #[instrument(skip(self, request), fields(category_id = request.id))]
    pub async fn update(&self, request: UpdateCategoryRequest) -> ServiceResult<MessageResponse> {
        let mut category = self.require(request.id).await?;
        let fields = request.category;

        self.ensure_unique(&fields.name, Some(category.id)).await?;

        category.name = fields.name;
        category.description = fields.description;
        category.image = fields.image;
        category.is_enabled = fields.is_enabled;
        self.ctx.category_repo().update(&category).await?;

        info!(category_id = category.id, "Category updated");

        Ok(MessageResponse::new(format!(
            "Category '{}' updated successfully",
            category.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        let category = self.require(id).await?;
        self.ctx.category_repo().delete(id).await?;

        info!(category_id = id, "Category deleted");

        Ok(MessageResponse::new(format!(
            "Category '{}' deleted successfully",
            category.name
        )))
    }

    #[instrument(skip(self))]
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> ServiceResult<MessageResponse> {
        let category = self.require(id).await?;
        self.ctx.category_repo().set_enabled(id, enabled).await?;

        info!(category_id = id, enabled, "Category toggled");

        Ok(MessageResponse::new(format!(
            "Category {} has been {}.",
            category.name,
            if enabled { "enabled" } else { "disabled" }
        )))
    }

    /// Enabled categories with their enabled descendants
    #[instrument(skip(self))]
    pub async fn tree(&self) -> ServiceResult<Vec<CategoryNode>> {
        let all = PageRequest::unbounded();

        let categories = self
            .ctx
            .category_repo()
            .list(
                &CategoryFilter {
                    is_enabled: TriState::Yes,
                    ..CategoryFilter::default()
                },
                all,
            )
            .await?
            .data;
        let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sub_categories = self
            .ctx
            .sub_category_repo()
            .list(
                &SubCategoryFilter {
                    is_enabled: TriState::Yes,
                    category_ids: category_ids.clone(),
                    ..SubCategoryFilter::default()
                },
                all,
            )
            .await?
            .data;
        let sub_category_ids: Vec<i64> = sub_categories.iter().map(|s| s.id).collect();

        let sub_sub_categories = if sub_category_ids.is_empty() {
            Vec::new()
        } else {
            self.ctx
                .sub_sub_category_repo()
                .list(
                    &SubSubCategoryFilter {
                        is_enabled: TriState::Yes,
                        sub_category_ids,
                        ..SubSubCategoryFilter::default()
                    },
                    all,
                )
                .await?
                .data
        };

        let tree = categories
            .into_iter()
            .map(|category| CategoryNode {
                id: category.id,
                name: category.name,
                sub_categories: sub_categories
                    .iter()
                    .filter(|sub| sub.category_id == category.id)
                    .map(|sub| SubCategoryNode {
                        id: sub.id,
                        name: sub.name.clone(),
                        sub_sub_categories: sub_sub_categories
                            .iter()
                            .filter(|leaf| leaf.sub_category_id == sub.id)
                            .map(|leaf| SubSubCategoryNode {
                                id: leaf.id,
                                name: leaf.name.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(tree)
    }

    async fn require(&self, id: i64) -> ServiceResult<Category> {
        Ok(self
            .ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))?)
    }

    async fn ensure_unique(&self, name: &str, exclude_id: Option<i64>) -> ServiceResult<()> {
        if self.ctx.category_repo().name_exists(name, exclude_id).await? {
            return Err(DomainError::DuplicateName(format!("Category '{name}'")).into());
        }
        Ok(())
    }
}
