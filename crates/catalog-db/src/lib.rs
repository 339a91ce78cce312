//! # catalog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `catalog-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers
//! - The SQL side of paginated listings ([`listing::ListingQuery`])
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use catalog_db::repositories::PgItemRepository;
//! use catalog_core::traits::ItemRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let items = PgItemRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod listing;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAdvertisementRepository, PgCategoryRepository, PgContactEmailRepository,
    PgDashboardRepository, PgFaqRepository, PgHealthCheck, PgHeroRepository, PgItemRepository,
    PgReviewRepository, PgSubCategoryRepository, PgSubSubCategoryRepository, PgUserRepository,
    PgWhoRepository,
};
