//! Category hierarchy: category -> sub category -> sub sub category

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Top level category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Second level category, owned by a [`Category`]
#[derive(Debug, Clone, PartialEq)]
pub struct SubCategory {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl SubCategory {
    /// Fail with `InvalidParent` unless this sub category sits under `category_id`
    pub fn ensure_parent(&self, category_id: i64) -> Result<(), DomainError> {
        if self.category_id == category_id {
            Ok(())
        } else {
            Err(DomainError::invalid_parent(
                format!("Sub category {}", self.id),
                format!("category {category_id}"),
            ))
        }
    }
}

/// Third level category, owned by a [`SubCategory`]
#[derive(Debug, Clone, PartialEq)]
pub struct SubSubCategory {
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

impl SubSubCategory {
    /// Both parents are pinned: the category is checked first, then the sub category
    pub fn ensure_parents(&self, category_id: i64, sub_category_id: i64) -> Result<(), DomainError> {
        if self.category_id != category_id {
            return Err(DomainError::invalid_parent(
                format!("Sub sub category {}", self.id),
                format!("category {category_id}"),
            ));
        }
        if self.sub_category_id != sub_category_id {
            return Err(DomainError::invalid_parent(
                format!("Sub sub category {}", self.id),
                format!("sub category {sub_category_id}"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SubCategoryDraft {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SubSubCategoryDraft {
    pub category_id: i64,
    pub sub_category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_enabled: bool,
}
