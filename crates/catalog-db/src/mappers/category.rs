//! Category hierarchy model -> entity mappers

use catalog_core::entities::{Category, SubCategory, SubSubCategory};

use crate::models::{CategoryModel, SubCategoryModel, SubSubCategoryModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            image: model.image,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<SubCategoryModel> for SubCategory {
    fn from(model: SubCategoryModel) -> Self {
        SubCategory {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
            description: model.description,
            image: model.image,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<SubSubCategoryModel> for SubSubCategory {
    fn from(model: SubSubCategoryModel) -> Self {
        SubSubCategory {
            id: model.id,
            category_id: model.category_id,
            sub_category_id: model.sub_category_id,
            name: model.name,
            description: model.description,
            image: model.image,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}
