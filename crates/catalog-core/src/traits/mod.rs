//! Ports implemented by the infrastructure crates

mod outbound;
mod repositories;

pub use outbound::{Delivery, Mailer, ObjectStore, OutgoingEmail};
pub use repositories::{
    AdvertisementFilter, AdvertisementRepository, CategoryFilter, CategoryRepository, ContactEmailFilter, ContactEmailRepository,
    DashboardCounts, DashboardRepository, FaqFilter, FaqRepository, HealthCheck, HeroFilter,
    HeroRepository, ItemFilter, ItemRepository, OtpIssue, RepoResult, ReviewFilter,
    ReviewRepository, SubCategoryFilter, SubCategoryRepository, SubSubCategoryFilter,
    SubSubCategoryRepository, UserFilter, UserRepository, WhoFilter, WhoRepository,
};
