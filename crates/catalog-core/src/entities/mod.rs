//! Domain entities - core business objects

mod category;
mod content;
mod item;
mod user;

pub use category::{
    Category, CategoryDraft, SubCategory, SubCategoryDraft, SubSubCategory, SubSubCategoryDraft,
};
pub use content::{
    Advertisement, AdvertisementDraft, ContactEmail, ContactEmailDraft, Faq, FaqDraft, Hero,
    HeroDraft, Review, ReviewDraft, Who, WhoDraft,
};
pub use item::{
    Item, ItemChildren, ItemDetail, ItemDraft, ItemEmbed, ItemFeature, ItemImage, ItemProperty,
};
pub use user::{User, UserDraft};
