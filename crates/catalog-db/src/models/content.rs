//! Storefront content database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct FaqModel {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct HeroModel {
    pub id: i64,
    pub title: String,
    pub sub_title: Option<String>,
    pub image_url: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AdvertisementModel {
    pub id: i64,
    pub image_url: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct WhoModel {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    pub mdi_icon: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub review: String,
    pub rating: i32,
    pub email: String,
    pub name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Database model for the emails (contact inbox) table
#[derive(Debug, Clone, FromRow)]
pub struct ContactEmailModel {
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

/// Single row of dashboard totals
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCountsModel {
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
