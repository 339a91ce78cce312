//! Route definitions
//!
//! Four API families: passcode auth, the token-protected admin surface,
//! the public storefront, and reference data.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_extractor_with_state,
    routing::{get, post},
    Router,
};

use crate::extractors::AdminUser;
use crate::handlers::{
    advertisements, auth, categories, dashboard, emails, faqs, health, heros, items, reviews,
    storefront, sub_categories, sub_sub_categories, users, who,
};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately)
///
/// `upload_limit` caps the request body of the document upload route.
pub fn create_router(state: &AppState, upload_limit: usize) -> Router<AppState> {
    Router::new()
        .nest("/api/auth/v1", auth_routes())
        .nest("/api/admin/v1", admin_routes(state, upload_limit))
        .nest("/api/end-user/v1", end_user_routes())
        .nest("/api/data/v1", data_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/send-otp", post(auth::send_otp))
        .route("/check-otp", post(auth::check_otp))
}

/// Every admin route requires a valid session token
fn admin_routes(state: &AppState, upload_limit: usize) -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(category_routes())
        .merge(item_routes())
        .merge(content_routes())
        .route("/dashboard/counts", get(dashboard::dashboard_counts))
        .route(
            "/document/upload",
            post(dashboard::upload_document).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route_layer(from_extractor_with_state::<AdminUser, AppState>(
            state.clone(),
        ))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:id", get(users::get_user))
        .route("/users/new", post(users::create_user))
        .route("/users/edit", post(users::update_user))
        .route("/users/delete", post(users::delete_user))
}

fn category_routes() -> Router<AppState> {
    Router::new()
        // Categories
        .route("/categories", get(categories::list_categories))
        .route("/categories/all", get(categories::list_all_categories))
        .route("/categories/:id", get(categories::get_category))
        .route("/categories/new", post(categories::create_category))
        .route("/categories/edit", post(categories::update_category))
        .route("/categories/delete", post(categories::delete_category))
        .route("/categories/enable", post(categories::enable_category))
        .route("/categories/disable", post(categories::disable_category))
        // Sub categories
        .route("/sub-categories", get(sub_categories::list_sub_categories))
        .route(
            "/sub-categories/all",
            get(sub_categories::list_all_sub_categories),
        )
        .route("/sub-categories/:id", get(sub_categories::get_sub_category))
        .route(
            "/sub-categories/new",
            post(sub_categories::create_sub_category),
        )
        .route(
            "/sub-categories/edit",
            post(sub_categories::update_sub_category),
        )
        .route(
            "/sub-categories/delete",
            post(sub_categories::delete_sub_category),
        )
        .route(
            "/sub-categories/enable",
            post(sub_categories::enable_sub_category),
        )
        .route(
            "/sub-categories/disable",
            post(sub_categories::disable_sub_category),
        )
        // Sub sub categories
        .route(
            "/sub-sub-categories",
            get(sub_sub_categories::list_sub_sub_categories),
        )
        .route(
            "/sub-sub-categories/all",
            get(sub_sub_categories::list_all_sub_sub_categories),
        )
        .route(
            "/sub-sub-categories/:id",
            get(sub_sub_categories::get_sub_sub_category),
        )
        .route(
            "/sub-sub-categories/new",
            post(sub_sub_categories::create_sub_sub_category),
        )
        .route(
            "/sub-sub-categories/edit",
            post(sub_sub_categories::update_sub_sub_category),
        )
        .route(
            "/sub-sub-categories/delete",
            post(sub_sub_categories::delete_sub_sub_category),
        )
        .route(
            "/sub-sub-categories/enable",
            post(sub_sub_categories::enable_sub_sub_category),
        )
        .route(
            "/sub-sub-categories/disable",
            post(sub_sub_categories::disable_sub_sub_category),
        )
}

fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items))
        .route("/items/:id", get(items::get_item))
        .route("/items/new", post(items::create_item))
        .route("/items/edit", post(items::update_item))
        .route("/items/delete", post(items::delete_item))
        .route("/items/enable", post(items::enable_item))
        .route("/items/disable", post(items::disable_item))
}

fn content_routes() -> Router<AppState> {
    Router::new()
        // FAQs
        .route("/faqs", get(faqs::list_faqs))
        .route("/faqs/:id", get(faqs::get_faq))
        .route("/faqs/new", post(faqs::create_faq))
        .route("/faqs/edit", post(faqs::update_faq))
        .route("/faqs/delete", post(faqs::delete_faq))
        .route("/faqs/enable", post(faqs::enable_faq))
        .route("/faqs/disable", post(faqs::disable_faq))
        // Heros
        .route("/heros", get(heros::list_heros))
        .route("/heros/:id", get(heros::get_hero))
        .route("/heros/new", post(heros::create_hero))
        .route("/heros/edit", post(heros::update_hero))
        .route("/heros/delete", post(heros::delete_hero))
        .route("/heros/enable", post(heros::enable_hero))
        .route("/heros/disable", post(heros::disable_hero))
        // Advertisements
        .route("/advertisements", get(advertisements::list_advertisements))
        .route("/advertisements/:id", get(advertisements::get_advertisement))
        .route("/advertisements/new", post(advertisements::create_advertisement))
        .route("/advertisements/edit", post(advertisements::update_advertisement))
        .route("/advertisements/delete", post(advertisements::delete_advertisement))
        .route("/advertisements/enable", post(advertisements::enable_advertisement))
        .route("/advertisements/disable", post(advertisements::disable_advertisement))
        // Who
        .route("/who", get(who::list_who))
        .route("/who/:id", get(who::get_who))
        .route("/who/new", post(who::create_who))
        .route("/who/edit", post(who::update_who))
        // Reviews
        .route("/reviews", get(reviews::list_reviews))
        .route("/reviews/:id", get(reviews::get_review))
        .route("/reviews/delete", post(reviews::delete_review))
        .route("/reviews/approve", post(reviews::approve_review))
        .route("/reviews/reject", post(reviews::reject_review))
        // Contact emails
        .route("/emails", get(emails::list_emails))
        .route("/emails/:id", get(emails::get_email))
        .route("/emails/delete", post(emails::delete_email))
        .route("/emails/mark-as-read", post(emails::mark_email_read))
}

fn end_user_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(storefront::list_items))
        .route("/items/:id", get(storefront::get_item))
        .route("/sub-categories", get(storefront::list_sub_categories))
        .route(
            "/sub-sub-categories",
            get(storefront::list_sub_sub_categories),
        )
        .route("/reviews", get(storefront::list_reviews))
        .route("/reviews/new", post(storefront::submit_review))
        .route("/emails/new", post(storefront::submit_email))
}

fn data_routes() -> Router<AppState> {
    Router::new().route("/categories", get(storefront::category_tree))
}
