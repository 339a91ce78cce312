//! Category hierarchy database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Database model for sub_categories table
#[derive(Debug, Clone, FromRow)]
pub struct SubCategoryModel {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Database model for sub_sub_categories table
#[derive(Debug, Clone, FromRow)]
pub struct SubSubCategoryModel {
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
