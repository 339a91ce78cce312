//! Service context - dependency container for services
//!
//! Holds all repositories, outbound adapters, and the session token service.

use std::sync::Arc;

use catalog_common::SessionTokenService;
use catalog_core::traits::{
    AdvertisementRepository, CategoryRepository, ContactEmailRepository, DashboardRepository, FaqRepository, HealthCheck,
    HeroRepository, ItemRepository, Mailer, ObjectStore, ReviewRepository, SubCategoryRepository,
    SubSubCategoryRepository, UserRepository, WhoRepository,
};
use catalog_core::OtpPolicy;
use catalog_db::{
    PgAdvertisementRepository, PgCategoryRepository, PgContactEmailRepository,
    PgDashboardRepository, PgFaqRepository, PgHealthCheck, PgHeroRepository, PgItemRepository,
    PgPool, PgReviewRepository, PgSubCategoryRepository, PgSubSubCategoryRepository,
    PgUserRepository, PgWhoRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for every table
/// - The readiness check of the backing store
/// - Mail delivery and object storage
/// - Session token signing and the passcode policy
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    sub_category_repo: Arc<dyn SubCategoryRepository>,
    sub_sub_category_repo: Arc<dyn SubSubCategoryRepository>,
    item_repo: Arc<dyn ItemRepository>,
    faq_repo: Arc<dyn FaqRepository>,
    hero_repo: Arc<dyn HeroRepository>,
    advertisement_repo: Arc<dyn AdvertisementRepository>,
    who_repo: Arc<dyn WhoRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    contact_email_repo: Arc<dyn ContactEmailRepository>,
    dashboard_repo: Arc<dyn DashboardRepository>,
    health: Arc<dyn HealthCheck>,

    // Outbound
    mailer: Arc<dyn Mailer>,
    object_store: Arc<dyn ObjectStore>,

    // Auth
    session_tokens: Arc<SessionTokenService>,
    otp_policy: OtpPolicy,
}

impl ServiceContext {
    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn sub_category_repo(&self) -> &dyn SubCategoryRepository {
        self.sub_category_repo.as_ref()
    }

    pub fn sub_sub_category_repo(&self) -> &dyn SubSubCategoryRepository {
        self.sub_sub_category_repo.as_ref()
    }

    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    pub fn faq_repo(&self) -> &dyn FaqRepository {
        self.faq_repo.as_ref()
    }

    pub fn hero_repo(&self) -> &dyn HeroRepository {
        self.hero_repo.as_ref()
    }

    pub fn advertisement_repo(&self) -> &dyn AdvertisementRepository {
        self.advertisement_repo.as_ref()
    }

    pub fn who_repo(&self) -> &dyn WhoRepository {
        self.who_repo.as_ref()
    }

    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    pub fn contact_email_repo(&self) -> &dyn ContactEmailRepository {
        self.contact_email_repo.as_ref()
    }

    pub fn dashboard_repo(&self) -> &dyn DashboardRepository {
        self.dashboard_repo.as_ref()
    }

    /// Get the readiness check of the backing store
    pub fn health(&self) -> &dyn HealthCheck {
        self.health.as_ref()
    }

    // === Outbound ===

    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    pub fn object_store(&self) -> &dyn ObjectStore {
        self.object_store.as_ref()
    }

    // === Auth ===

    /// Get the session token service
    pub fn session_tokens(&self) -> &SessionTokenService {
        self.session_tokens.as_ref()
    }

    pub fn otp_policy(&self) -> &OtpPolicy {
        &self.otp_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("outbound", &"...")
            .field("session_tokens", &self.session_tokens)
            .field("otp_policy", &self.otp_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    sub_category_repo: Option<Arc<dyn SubCategoryRepository>>,
    sub_sub_category_repo: Option<Arc<dyn SubSubCategoryRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    faq_repo: Option<Arc<dyn FaqRepository>>,
    hero_repo: Option<Arc<dyn HeroRepository>>,
    advertisement_repo: Option<Arc<dyn AdvertisementRepository>>,
    who_repo: Option<Arc<dyn WhoRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    contact_email_repo: Option<Arc<dyn ContactEmailRepository>>,
    dashboard_repo: Option<Arc<dyn DashboardRepository>>,
    health: Option<Arc<dyn HealthCheck>>,
    mailer: Option<Arc<dyn Mailer>>,
    object_store: Option<Arc<dyn ObjectStore>>,
    session_tokens: Option<Arc<SessionTokenService>>,
    otp_policy: Option<OtpPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire every repository and the readiness check to one PostgreSQL pool
    pub fn with_postgres(self, pool: PgPool) -> Self {
        self.user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
            .sub_category_repo(Arc::new(PgSubCategoryRepository::new(pool.clone())))
            .sub_sub_category_repo(Arc::new(PgSubSubCategoryRepository::new(pool.clone())))
            .item_repo(Arc::new(PgItemRepository::new(pool.clone())))
            .faq_repo(Arc::new(PgFaqRepository::new(pool.clone())))
            .hero_repo(Arc::new(PgHeroRepository::new(pool.clone())))
            .advertisement_repo(Arc::new(PgAdvertisementRepository::new(pool.clone())))
            .who_repo(Arc::new(PgWhoRepository::new(pool.clone())))
            .review_repo(Arc::new(PgReviewRepository::new(pool.clone())))
            .contact_email_repo(Arc::new(PgContactEmailRepository::new(pool.clone())))
            .dashboard_repo(Arc::new(PgDashboardRepository::new(pool.clone())))
            .health(Arc::new(PgHealthCheck::new(pool)))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn sub_category_repo(mut self, repo: Arc<dyn SubCategoryRepository>) -> Self {
        self.sub_category_repo = Some(repo);
        self
    }

    pub fn sub_sub_category_repo(mut self, repo: Arc<dyn SubSubCategoryRepository>) -> Self {
        self.sub_sub_category_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn faq_repo(mut self, repo: Arc<dyn FaqRepository>) -> Self {
        self.faq_repo = Some(repo);
        self
    }

    pub fn hero_repo(mut self, repo: Arc<dyn HeroRepository>) -> Self {
        self.hero_repo = Some(repo);
        self
    }

    pub fn advertisement_repo(mut self, repo: Arc<dyn AdvertisementRepository>) -> Self {
        self.advertisement_repo = Some(repo);
        self
    }

    pub fn who_repo(mut self, repo: Arc<dyn WhoRepository>) -> Self {
        self.who_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn contact_email_repo(mut self, repo: Arc<dyn ContactEmailRepository>) -> Self {
        self.contact_email_repo = Some(repo);
        self
    }

    pub fn dashboard_repo(mut self, repo: Arc<dyn DashboardRepository>) -> Self {
        self.dashboard_repo = Some(repo);
        self
    }

    pub fn health(mut self, health: Arc<dyn HealthCheck>) -> Self {
        self.health = Some(health);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    pub fn session_tokens(mut self, service: Arc<SessionTokenService>) -> Self {
        self.session_tokens = Some(service);
        self
    }

    /// Override the passcode policy; defaults to [`OtpPolicy::default`]
    pub fn otp_policy(mut self, policy: OtpPolicy) -> Self {
        self.otp_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            category_repo: required(self.category_repo, "category_repo")?,
            sub_category_repo: required(self.sub_category_repo, "sub_category_repo")?,
            sub_sub_category_repo: required(self.sub_sub_category_repo, "sub_sub_category_repo")?,
            item_repo: required(self.item_repo, "item_repo")?,
            faq_repo: required(self.faq_repo, "faq_repo")?,
            hero_repo: required(self.hero_repo, "hero_repo")?,
            advertisement_repo: required(self.advertisement_repo, "advertisement_repo")?,
            who_repo: required(self.who_repo, "who_repo")?,
            review_repo: required(self.review_repo, "review_repo")?,
            contact_email_repo: required(self.contact_email_repo, "contact_email_repo")?,
            dashboard_repo: required(self.dashboard_repo, "dashboard_repo")?,
            health: required(self.health, "health")?,
            mailer: required(self.mailer, "mailer")?,
            object_store: required(self.object_store, "object_store")?,
            session_tokens: required(self.session_tokens, "session_tokens")?,
            otp_policy: self.otp_policy.unwrap_or_default(),
        })
    }
}
