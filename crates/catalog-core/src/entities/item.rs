//! Item entity and its child records (properties, features, images, embeds)

use chrono::{DateTime, Utc};

/// A catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
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

impl Item {
    /// An item is discounted when a discount above zero is recorded
    pub fn is_discounted(&self) -> bool {
        self.discount_percent.is_some_and(|percent| percent > 0.0)
    }

    /// An item is a hot deal when it carries a hot deal deadline
    pub fn is_hot_deal(&self) -> bool {
        self.hot_deal_end_at.is_some()
    }

    /// Overwrite the editable fields from a draft
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.category_id = draft.category_id;
        self.sub_category_id = draft.sub_category_id;
        self.sub_sub_category_id = draft.sub_sub_category_id;
        self.price_lkr = draft.price_lkr;
        self.price_usd = draft.price_usd;
        self.per_unit = draft.per_unit;
        self.price_type = draft.price_type;
        self.discount_percent = draft.discount_percent;
        self.is_featured = draft.is_featured;
        self.is_enabled = draft.is_enabled;
        self.is_sold = draft.is_sold;
        self.hot_deal_end_at = draft.hot_deal_end_at;
        self.modified_at = Some(Utc::now());
    }
}

/// Editable item fields
#[derive(Debug, Clone)]
pub struct ItemDraft {
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
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProperty {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFeature {
    pub name: String,
    pub icon_url: Option<String>,
    pub mdi_icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemImage {
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEmbed {
    pub title: Option<String>,
    pub html: String,
}

/// Child rows written and replaced together with their item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChildren {
    pub properties: Vec<ItemProperty>,
    pub features: Vec<ItemFeature>,
    pub images: Vec<ItemImage>,
    pub embeds: Vec<ItemEmbed>,
}

/// Item together with its children
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub item: Item,
    pub children: ItemChildren,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft {
            name: "Galaxy S24".to_string(),
            description: None,
            category_id: 1,
            sub_category_id: Some(2),
            sub_sub_category_id: None,
            price_lkr: 250_000.0,
            price_usd: 830.0,
            per_unit: None,
            price_type: "fixed".to_string(),
            discount_percent: Some(10.0),
            is_featured: true,
            is_enabled: true,
            is_sold: false,
            hot_deal_end_at: None,
        }
    }

    #[test]
    fn test_apply_draft() {
        let mut item = Item {
            id: 9,
            name: "old".to_string(),
            description: Some("old".to_string()),
            category_id: 3,
            sub_category_id: None,
            sub_sub_category_id: None,
            price_lkr: 1.0,
            price_usd: 1.0,
            per_unit: None,
            price_type: "fixed".to_string(),
            discount_percent: None,
            is_featured: false,
            is_enabled: false,
            is_sold: false,
            hot_deal_end_at: None,
            created_at: Utc::now(),
            modified_at: None,
        };

        item.apply(draft());

        assert_eq!(item.id, 9);
        assert_eq!(item.name, "Galaxy S24");
        assert_eq!(item.category_id, 1);
        assert!(item.is_discounted());
        assert!(!item.is_hot_deal());
        assert!(item.modified_at.is_some());
    }
}
