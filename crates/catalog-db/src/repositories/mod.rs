//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in catalog-core.
//! Each repository handles database operations for one table or one small
//! group of related tables.

mod category;
mod common;
mod content;
mod dashboard;
mod error;
mod inbox;
mod item;
mod showcase;
mod sub_category;
mod user;

pub use category::PgCategoryRepository;
pub use content::{PgFaqRepository, PgHeroRepository};
pub use dashboard::{PgDashboardRepository, PgHealthCheck};
pub use inbox::{PgContactEmailRepository, PgReviewRepository};
pub use item::PgItemRepository;
pub use showcase::{PgAdvertisementRepository, PgWhoRepository};
pub use sub_category::{PgSubCategoryRepository, PgSubSubCategoryRepository};
pub use user::PgUserRepository;
