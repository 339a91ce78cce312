//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod content;
mod item;
mod user;

pub use category::{CategoryModel, SubCategoryModel, SubSubCategoryModel};
pub use content::{
    AdvertisementModel, ContactEmailModel, DashboardCountsModel, FaqModel, HeroModel,
    ReviewModel, WhoModel,
};
pub use item::{ItemEmbedModel, ItemFeatureModel, ItemImageModel, ItemModel, ItemPropertyModel};
pub use user::UserModel;
