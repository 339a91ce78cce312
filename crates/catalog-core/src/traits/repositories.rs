//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Every read excludes soft-deleted rows unless a method says otherwise.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Advertisement, AdvertisementDraft, Category, CategoryDraft, ContactEmail, ContactEmailDraft,
    Faq, FaqDraft, Hero, HeroDraft, Item, ItemChildren, ItemDetail, ItemDraft, Review,
    ReviewDraft, SubCategory, SubCategoryDraft, SubSubCategory, SubSubCategoryDraft, User,
    UserDraft, Who, WhoDraft,
};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest, TriState};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Matched against email, user name and display name
    pub search: Option<String>,
}

/// A passcode issuance to persist, guarded by the counter state it was
/// computed from
#[derive(Debug, Clone)]
pub struct OtpIssue {
    pub user_id: i64,
    pub code: String,
    pub count: i32,
    pub issued_at: DateTime<Utc>,
    pub expected_count: i32,
    pub expected_last: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, including soft-deleted accounts
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email, including soft-deleted accounts
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is taken by another live account
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// Check if user name is taken by another live account
    async fn user_name_exists(&self, user_name: &str, exclude_id: Option<i64>)
        -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, draft: &UserDraft) -> RepoResult<User>;

    /// Update profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn list(&self, filter: &UserFilter, page: PageRequest) -> RepoResult<Page<User>>;

    /// Store a new passcode.
    ///
    /// Returns `false` without writing when the stored counter no longer
    /// matches `expected_count`/`expected_last`.
    async fn record_otp_issue(&self, issue: &OtpIssue) -> RepoResult<bool>;
}

// ============================================================================
// Category Repositories
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
    /// Narrow the enabled/disabled counts by `search`; `all` never is
    pub counts_follow_search: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SubCategoryFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
    /// Restrict to these parents; empty means any
    pub category_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct SubSubCategoryFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
    pub category_ids: Vec<i64>,
    pub sub_category_ids: Vec<i64>,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>>;

    /// Check if a live category other than `exclude_id` uses `name`
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    async fn create(&self, draft: &CategoryDraft) -> RepoResult<Category>;

    async fn update(&self, category: &Category) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(&self, filter: &CategoryFilter, page: PageRequest)
        -> RepoResult<Page<Category>>;

    /// Live sub categories under a category
    async fn sub_category_count(&self, id: i64) -> RepoResult<i64>;
}

#[async_trait]
pub trait SubCategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubCategory>>;

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    async fn create(&self, draft: &SubCategoryDraft) -> RepoResult<SubCategory>;

    async fn update(&self, sub_category: &SubCategory) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(
        &self,
        filter: &SubCategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<SubCategory>>;
}

#[async_trait]
pub trait SubSubCategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubSubCategory>>;

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    async fn create(&self, draft: &SubSubCategoryDraft) -> RepoResult<SubSubCategory>;

    async fn update(&self, sub_sub_category: &SubSubCategory) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(
        &self,
        filter: &SubSubCategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<SubSubCategory>>;
}

// ============================================================================
// Item Repository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
    pub is_featured: TriState,
    /// `Yes` means a discount above zero is recorded
    pub is_discount: TriState,
    /// `Yes` means a hot deal deadline is set
    pub is_hotdeal: TriState,
    pub is_sold: TriState,
    pub category_ids: Vec<i64>,
    pub sub_category_ids: Vec<i64>,
    pub sub_sub_category_ids: Vec<i64>,
    /// Only enabled items whose category chain is enabled and live
    pub storefront: bool,
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item with its children
    async fn find_detail(&self, id: i64) -> RepoResult<Option<ItemDetail>>;

    /// Like [`Self::find_detail`], restricted to items visible on the storefront
    async fn find_storefront_detail(&self, id: i64) -> RepoResult<Option<ItemDetail>>;

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// Insert an item and its children in one transaction
    async fn create(&self, draft: &ItemDraft, children: &ItemChildren) -> RepoResult<Item>;

    /// Update an item and replace all of its children in one transaction
    async fn update(&self, item: &Item, children: &ItemChildren) -> RepoResult<()>;

    /// Soft delete an item and its children in one transaction
    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(&self, filter: &ItemFilter, page: PageRequest) -> RepoResult<Page<ItemDetail>>;
}

// ============================================================================
// Content Repositories
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct FaqFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
}

#[derive(Debug, Clone, Default)]
pub struct HeroFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
}

/// Advertisements have nothing to search, only the flag filter
#[derive(Debug, Clone, Default)]
pub struct AdvertisementFilter {
    pub is_enabled: TriState,
}

#[derive(Debug, Clone, Default)]
pub struct WhoFilter {
    pub search: Option<String>,
    pub is_enabled: TriState,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub search: Option<String>,
    pub is_approved: TriState,
}

#[derive(Debug, Clone, Default)]
pub struct ContactEmailFilter {
    pub search: Option<String>,
    pub is_read: TriState,
}

#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Faq>>;

    async fn create(&self, draft: &FaqDraft) -> RepoResult<Faq>;

    async fn update(&self, faq: &Faq) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(&self, filter: &FaqFilter, page: PageRequest) -> RepoResult<Page<Faq>>;
}

#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Hero>>;

    async fn create(&self, draft: &HeroDraft) -> RepoResult<Hero>;

    async fn update(&self, hero: &Hero) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(&self, filter: &HeroFilter, page: PageRequest) -> RepoResult<Page<Hero>>;
}

#[async_trait]
pub trait AdvertisementRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Advertisement>>;

    async fn create(&self, draft: &AdvertisementDraft) -> RepoResult<Advertisement>;

    async fn update(&self, advertisement: &Advertisement) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()>;

    async fn list(
        &self,
        filter: &AdvertisementFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Advertisement>>;
}

/// "Who" entries can be edited but not deleted or toggled
#[async_trait]
pub trait WhoRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Who>>;

    async fn create(&self, draft: &WhoDraft) -> RepoResult<Who>;

    async fn update(&self, who: &Who) -> RepoResult<()>;

    async fn list(&self, filter: &WhoFilter, page: PageRequest) -> RepoResult<Page<Who>>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Review>>;

    /// Store a submitted review, pending approval
    async fn create(&self, draft: &ReviewDraft) -> RepoResult<Review>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_approved(&self, id: i64, approved: bool) -> RepoResult<()>;

    async fn list(&self, filter: &ReviewFilter, page: PageRequest) -> RepoResult<Page<Review>>;
}

#[async_trait]
pub trait ContactEmailRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ContactEmail>>;

    async fn create(&self, draft: &ContactEmailDraft) -> RepoResult<ContactEmail>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn mark_read(&self, id: i64) -> RepoResult<()>;

    async fn list(
        &self,
        filter: &ContactEmailFilter,
        page: PageRequest,
    ) -> RepoResult<Page<ContactEmail>>;
}

// ============================================================================
// Dashboard / Health
// ============================================================================

/// Totals shown on the admin dashboard; item and category figures count
/// enabled rows only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_items: i64,
    pub hot_deal_items: i64,
    pub discount_items: i64,
    pub featured_items: i64,
    pub sold_items: i64,
    pub total_categories: i64,
    pub total_sub_categories: i64,
    pub total_sub_sub_categories: i64,
    pub total_users: i64,
    pub total_reviews: i64,
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn counts(&self) -> RepoResult<DashboardCounts>;
}

/// Liveness check for the backing store
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
