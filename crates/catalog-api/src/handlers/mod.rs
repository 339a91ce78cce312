//! Route handlers
//!
//! All HTTP request handlers organized by resource. Admin handlers sit
//! behind the session-token layer installed in [`crate::routes`].

pub mod advertisements;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod emails;
pub mod faqs;
pub mod health;
pub mod heros;
pub mod items;
pub mod reviews;
pub mod storefront;
pub mod sub_categories;
pub mod sub_sub_categories;
pub mod users;
pub mod who;
