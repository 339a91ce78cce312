//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, listings, and path ids.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AdminUser;
pub use pagination::{FilterQuery, ListingQuery};
pub use path::IdPath;
pub use validated::ValidatedJson;
