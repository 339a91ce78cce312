//! # catalog-core
//!
//! Domain layer containing entities, value objects, repository traits, and outbound ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Advertisement, AdvertisementDraft, Category, CategoryDraft, ContactEmail, ContactEmailDraft, Faq, FaqDraft, Hero, HeroDraft,
    Item, ItemChildren, ItemDetail, ItemDraft, ItemEmbed, ItemFeature, ItemImage, ItemProperty,
    Review, ReviewDraft, SubCategory, SubCategoryDraft, SubSubCategory, SubSubCategoryDraft, User,
    UserDraft, Who, WhoDraft,
};
pub use error::DomainError;
pub use traits::{
    AdvertisementFilter, AdvertisementRepository, CategoryFilter, CategoryRepository, ContactEmailFilter, ContactEmailRepository,
    DashboardCounts, DashboardRepository, Delivery, FaqFilter, FaqRepository, HealthCheck,
    HeroFilter, HeroRepository, ItemFilter, ItemRepository, Mailer, ObjectStore, OtpIssue,
    OutgoingEmail, RepoResult, ReviewFilter, ReviewRepository, SubCategoryFilter,
    SubCategoryRepository, SubSubCategoryFilter, SubSubCategoryRepository, UserFilter,
    UserRepository, WhoFilter, WhoRepository,
};
pub use value_objects::{
    parse_id_set, ListingCounts, OtpCode, OtpPolicy, Page, PageRequest, TriState,
};
