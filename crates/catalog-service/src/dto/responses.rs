//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::{ListingCounts, Page};

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of a listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<T> {
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub count: CountsResponse,
    pub data: Vec<T>,
}

impl<T> ListingResponse<T> {
    /// Shape a page, converting each row with `From`
    pub fn from_page<E>(page: Page<E>) -> Self
    where
        T: From<E>,
    {
        let total_pages = page.total_pages();
        Self {
            page: page.request.page(),
            limit: page.request.limit(),
            total_pages,
            total_count: page.total_count,
            count: CountsResponse::from(&page.counts),
            data: page.data.into_iter().map(T::from).collect(),
        }
    }
}

/// Auxiliary listing counts; absent counts are omitted
#[derive(Debug, Serialize)]
pub struct CountsResponse {
    pub all: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_sub_category: Option<i64>,
}

impl From<&ListingCounts> for CountsResponse {
    fn from(counts: &ListingCounts) -> Self {
        Self {
            all: counts.all,
            enabled: counts.enabled,
            disabled: counts.disabled,
            category: counts.category,
            sub_category: counts.sub_category,
            sub_sub_category: counts.sub_sub_category,
        }
    }
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement of a create, carrying the new id
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Result of a passcode request; the code itself is never echoed
#[derive(Debug, Serialize)]
pub struct SendOtpResponse {
    pub message: String,
    pub delivered: bool,
}

/// Session issued after a successful passcode check
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: i64,
    pub email: String,
    pub display_name: Option<String>,
    pub user_name: String,
    pub token: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// Account as shown in the admin UI; passcode state is never exposed
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub user_name: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Category Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Category detail with the number of live sub categories under it
#[derive(Debug, Serialize)]
pub struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    pub sub_category_count: i64,
}

#[derive(Debug, Serialize)]
pub struct SubCategoryResponse {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SubSubCategoryResponse {
    pub id: i64,
    pub category_id: i64,
    pub sub_category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Node of the public category tree
#[derive(Debug, Serialize)]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    pub sub_categories: Vec<SubCategoryNode>,
}

#[derive(Debug, Serialize)]
pub struct SubCategoryNode {
    pub id: i64,
    pub name: String,
    pub sub_sub_categories: Vec<SubSubCategoryNode>,
}

#[derive(Debug, Serialize)]
pub struct SubSubCategoryNode {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Item Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ItemPropertyResponse {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ItemFeatureResponse {
    pub name: String,
    pub icon_url: Option<String>,
    pub mdi_icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemImageResponse {
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct ItemEmbedResponse {
    pub title: Option<String>,
    pub html: String,
}

/// Item with all of its child rows
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub sub_category_id: Option<i64>,
    pub sub_sub_category_id: Option<i64>,
    pub price_lkr: f64,
    pub price_usd: f64,
    pub per_unit: Option<String>,
    pub price_type: String,
    pub discount_percent: Option<f64>,
    pub is_featured: bool,
    pub is_enabled: bool,
    pub is_sold: bool,
    pub hot_deal_end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub item_properties: Vec<ItemPropertyResponse>,
    pub item_features: Vec<ItemFeatureResponse>,
    pub item_images: Vec<ItemImageResponse>,
    pub item_embeds: Vec<ItemEmbedResponse>,
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FaqResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub id: i64,
    pub title: String,
    pub sub_title: Option<String>,
    pub image_url: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AdvertisementResponse {
    pub id: i64,
    pub image_url: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct WhoResponse {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    pub mdi_icon: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub review: String,
    pub rating: i32,
    pub email: String,
    pub name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ContactEmailResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Dashboard / Upload / Health Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DashboardCountsResponse {
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

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document_url: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" }.to_string(),
            database,
        }
    }
}
