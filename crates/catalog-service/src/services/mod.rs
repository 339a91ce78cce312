//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and turns request DTOs
//! into repository calls and response DTOs.

pub mod auth;
pub mod category;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod faq;
pub mod item;
pub mod review;
pub mod showcase;
pub mod sub_category;
pub mod user;

#[cfg(test)]
mod testing;

pub use auth::AuthService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::{DashboardService, DocumentService};
pub use error::{ServiceError, ServiceResult};
pub use faq::{FaqService, HeroService};
pub use item::ItemService;
pub use review::{ContactService, ReviewService};
pub use showcase::{AdvertisementService, WhoService};
pub use sub_category::{SubCategoryService, SubSubCategoryService};
pub use user::UserService;
