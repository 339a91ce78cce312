//! Item model -> entity mappers

use std::collections::HashMap;

use catalog_core::entities::{
    Item, ItemChildren, ItemEmbed, ItemFeature, ItemImage, ItemProperty,
};

use crate::models::{
    ItemEmbedModel, ItemFeatureModel, ItemImageModel, ItemModel, ItemPropertyModel,
};

impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Item {
            id: model.id,
            name: model.name,
            description: model.description,
            category_id: model.category_id,
            sub_category_id: model.sub_category_id,
            sub_sub_category_id: model.sub_sub_category_id,
            price_lkr: model.price_lkr,
            price_usd: model.price_usd,
            per_unit: model.per_unit,
            price_type: model.price_type,
            discount_percent: model.discount_percent,
            is_featured: model.is_featured,
            is_enabled: model.is_enabled,
            is_sold: model.is_sold,
            hot_deal_end_at: model.hot_deal_end_at,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

/// Bucket child rows by their `item_id`
pub fn group_children(
    properties: Vec<ItemPropertyModel>,
    features: Vec<ItemFeatureModel>,
    images: Vec<ItemImageModel>,
    embeds: Vec<ItemEmbedModel>,
) -> HashMap<i64, ItemChildren> {
    let mut grouped: HashMap<i64, ItemChildren> = HashMap::new();

    for row in properties {
        grouped.entry(row.item_id).or_default().properties.push(ItemProperty {
            key: row.key,
            value: row.value,
        });
    }
    for row in features {
        grouped.entry(row.item_id).or_default().features.push(ItemFeature {
            name: row.name,
            icon_url: row.icon_url,
            mdi_icon: row.mdi_icon,
        });
    }
    for row in images {
        grouped.entry(row.item_id).or_default().images.push(ItemImage {
            image_url: row.image_url,
        });
    }
    for row in embeds {
        grouped.entry(row.item_id).or_default().embeds.push(ItemEmbed {
            title: row.title,
            html: row.html,
        });
    }

    grouped
}
