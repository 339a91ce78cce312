//! Test fixtures and data generators
//!
//! Request bodies are plain JSON values; response types only carry the
//! fields the tests look at.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique name that survives reruns against the same database
pub fn unique_name(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{prefix}{}{n}", Utc::now().timestamp_millis())
}

pub fn category_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Created by integration tests",
        "is_enabled": true
    })
}

pub fn sub_category_body(category_id: i64, name: &str) -> Value {
    json!({
        "category_id": category_id,
        "name": name,
        "is_enabled": true
    })
}

pub fn item_body(category_id: i64, sub_category_id: Option<i64>, name: &str) -> Value {
    json!({
        "name": name,
        "category_id": category_id,
        "sub_category_id": sub_category_id,
        "price_lkr": 45000.0,
        "price_usd": 150.0,
        "price_type": "fixed",
        "discount_percent": 10.0,
        "item_properties": [
            { "key": "Colour", "value": "Black" },
            { "key": "Warranty", "value": "1 year" }
        ],
        "item_images": [
            { "image_url": "https://cdn.example.com/item/front.jpg" }
        ]
    })
}

pub fn review_body(rating: i32) -> Value {
    json!({
        "review": "Arrived on time and well packed",
        "rating": rating,
        "email": "buyer@example.com",
        "name": "Test Buyer"
    })
}

pub fn contact_body() -> Value {
    json!({
        "name": "Test Visitor",
        "email": "visitor@example.com",
        "subject": "Bulk order",
        "message": "Do you ship to Kandy?"
    })
}

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub id: i64,
    pub email: String,
    pub user_name: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<T> {
    pub page: i64,
    pub limit: i64,
    pub total_count: i64,
    pub count: ListingCounts,
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingCounts {
    pub all: i64,
    pub enabled: Option<i64>,
    pub disabled: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AdvertisementResponse {
    pub id: i64,
    pub image_url: String,
    pub is_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct WhoResponse {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    pub mdi_icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub is_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    pub sub_category_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    pub sub_categories: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ItemProperty {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub sub_category_id: Option<i64>,
    pub is_enabled: bool,
    pub item_properties: Vec<ItemProperty>,
    pub item_images: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub rating: i32,
    pub is_approved: bool,
}

#[derive(Debug, Deserialize)]
pub struct ContactEmailResponse {
    pub id: i64,
    pub is_read: bool,
}

#[derive(Debug, Deserialize)]
pub struct DashboardCountsResponse {
    pub total_items: i64,
}

#[derive(Debug, Deserialize)]
pub struct DocumentResponse {
    pub document_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
