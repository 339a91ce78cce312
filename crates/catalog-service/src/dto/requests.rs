//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Query-string filter sets live at the bottom of the file.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use catalog_core::{DomainError, PageRequest, TriState};

// ============================================================================
// Auth Requests
// ============================================================================

/// Ask for a login passcode
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Optional second factor; must match the account when given
    #[validate(length(min = 1, max = 64, message = "User name must be 1-64 characters"))]
    pub user_name: Option<String>,
}

/// Exchange a passcode for a session token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 16, message = "OTP must be 1-16 characters"))]
    pub otp: String,
}

// ============================================================================
// Shared Requests
// ============================================================================

/// Body of the delete/enable/disable/approve style endpoints
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct IdRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,
}

// ============================================================================
// User Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 64, message = "User name must be 1-64 characters"))]
    pub user_name: String,

    #[validate(length(max = 128, message = "Display name must be at most 128 characters"))]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 64, message = "User name must be 1-64 characters"))]
    pub user_name: String,

    #[validate(length(max = 128, message = "Display name must be at most 128 characters"))]
    pub display_name: Option<String>,
}

// ============================================================================
// Category Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub image: Option<String>,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub category: CreateCategoryRequest,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubCategoryRequest {
    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i64,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub image: Option<String>,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSubCategoryRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub sub_category: CreateSubCategoryRequest,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubSubCategoryRequest {
    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i64,

    #[validate(range(min = 1, message = "sub_category_id must be a positive integer"))]
    pub sub_category_id: i64,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub image: Option<String>,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSubSubCategoryRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub sub_sub_category: CreateSubSubCategoryRequest,
}

// ============================================================================
// Item Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemPropertyInput {
    #[validate(length(min = 1, max = 255, message = "Property key must be 1-255 characters"))]
    pub key: String,

    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemFeatureInput {
    #[validate(length(min = 1, max = 255, message = "Feature name must be 1-255 characters"))]
    pub name: String,

    pub icon_url: Option<String>,

    pub mdi_icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemImageInput {
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemEmbedInput {
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Embed HTML must not be empty"))]
    pub html: String,
}

/// Item fields plus the full set of child rows
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i64,

    pub sub_category_id: Option<i64>,

    pub sub_sub_category_id: Option<i64>,

    #[validate(range(min = 0.0, message = "price_lkr must not be negative"))]
    pub price_lkr: f64,

    #[validate(range(min = 0.0, message = "price_usd must not be negative"))]
    pub price_usd: f64,

    pub per_unit: Option<String>,

    #[validate(length(min = 1, max = 32, message = "price_type must be 1-32 characters"))]
    pub price_type: String,

    #[validate(range(min = 0.0, max = 100.0, message = "discount_percent must be 0-100"))]
    pub discount_percent: Option<f64>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,

    #[serde(default)]
    pub is_sold: bool,

    pub hot_deal_end_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(nested)]
    pub item_properties: Vec<ItemPropertyInput>,

    #[serde(default)]
    #[validate(nested)]
    pub item_features: Vec<ItemFeatureInput>,

    #[serde(default)]
    #[validate(nested)]
    pub item_images: Vec<ItemImageInput>,

    #[serde(default)]
    #[validate(nested)]
    pub item_embeds: Vec<ItemEmbedInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub item: CreateItemRequest,
}

// ============================================================================
// Content Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaqRequest {
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: String,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFaqRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub faq: CreateFaqRequest,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub sub_title: Option<String>,

    pub image_url: Option<String>,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateHeroRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub hero: CreateHeroRequest,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdvertisementRequest {
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: String,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAdvertisementRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub advertisement: CreateAdvertisementRequest,
}

/// One "who" highlight; `mdi_icon` is a Material Design icon name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWhoRequest {
    #[validate(length(min = 1, max = 255, message = "Key must be 1-255 characters"))]
    pub key: String,

    pub value: Option<String>,

    pub mdi_icon: Option<String>,

    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWhoRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub who: CreateWhoRequest,
}

/// Review submitted from the storefront
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 2000, message = "Review must be 1-2000 characters"))]
    pub review: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Message from the storefront contact form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactEmailRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

fn enabled_by_default() -> bool {
    true
}

// ============================================================================
// Listing Filters (query string)
// ============================================================================

/// Raw `?page=&limit=&search=` parameters shared by every listing
#[derive(Debug, Clone, Deserialize)]
pub struct ListingParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> i64 {
    PageRequest::DEFAULT_PAGE
}

fn default_limit() -> i64 {
    PageRequest::DEFAULT_LIMIT
}

/// Validated listing parameters; a blank search is no search
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub page: PageRequest,
    pub search: Option<String>,
}

impl TryFrom<ListingParams> for Listing {
    type Error = DomainError;

    fn try_from(params: ListingParams) -> Result<Self, Self::Error> {
        Ok(Self {
            page: PageRequest::new(params.page, params.limit)?,
            search: params.search.filter(|s| !s.trim().is_empty()),
        })
    }
}

/// `?is_enabled=` for categories, FAQs and heroes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnabledQuery {
    #[serde(default)]
    pub is_enabled: TriState,
}

/// Sub category filters; `category_ids` is a JSON array string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubCategoryQuery {
    #[serde(default)]
    pub is_enabled: TriState,
    pub category_id: Option<i64>,
    pub category_ids: Option<String>,
}

/// Sub sub category filters; the `*_ids` fields are JSON array strings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubSubCategoryQuery {
    #[serde(default)]
    pub is_enabled: TriState,
    pub category_id: Option<i64>,
    pub category_ids: Option<String>,
    pub sub_category_id: Option<i64>,
    pub sub_category_ids: Option<String>,
}

/// Item filters accepted by both the admin and the storefront listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub is_enabled: TriState,
    #[serde(default)]
    pub is_featured: TriState,
    #[serde(default)]
    pub is_discount: TriState,
    #[serde(default)]
    pub is_hotdeal: TriState,
    #[serde(default)]
    pub is_sold: TriState,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub sub_sub_category_id: Option<i64>,
    pub category_ids: Option<String>,
    pub sub_category_ids: Option<String>,
    pub sub_sub_category_ids: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub is_approved: TriState,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactEmailQuery {
    #[serde(default)]
    pub is_read: TriState,
}

/// `?model_name=` on the upload endpoint; becomes the key prefix
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadQuery {
    #[serde(default = "default_model_name")]
    #[validate(length(min = 1, max = 64, message = "model_name must be 1-64 characters"))]
    pub model_name: String,
}

fn default_model_name() -> String {
    "deal-partner".to_string()
}
