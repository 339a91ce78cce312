//! Item and item child database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for items table
#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
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
}

#[derive(Debug, Clone, FromRow)]
pub struct ItemPropertyModel {
    pub item_id: i64,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ItemFeatureModel {
    pub item_id: i64,
    pub name: String,
    pub icon_url: Option<String>,
    pub mdi_icon: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ItemImageModel {
    pub item_id: i64,
    pub image_url: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ItemEmbedModel {
    pub item_id: i64,
    pub title: Option<String>,
    pub html: String,
}
