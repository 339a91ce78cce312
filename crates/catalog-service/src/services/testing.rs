//! In-memory fakes of the repository and outbound ports for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use catalog_common::SessionTokenService;
use catalog_core::entities::{
    Advertisement, AdvertisementDraft, Category, CategoryDraft, ContactEmail, ContactEmailDraft, Faq, FaqDraft, Hero, HeroDraft,
    Item, ItemChildren, ItemDetail, ItemDraft, Review, ReviewDraft, SubCategory,
    SubCategoryDraft, SubSubCategory, SubSubCategoryDraft, User, UserDraft, Who, WhoDraft,
};
use catalog_core::traits::{
    AdvertisementFilter, AdvertisementRepository, CategoryFilter, CategoryRepository, ContactEmailFilter, ContactEmailRepository,
    DashboardCounts, DashboardRepository, Delivery, FaqFilter, FaqRepository, HealthCheck,
    HeroFilter, HeroRepository, ItemFilter, ItemRepository, Mailer, ObjectStore, OtpIssue,
    OutgoingEmail, RepoResult, ReviewFilter, ReviewRepository, SubCategoryFilter,
    SubCategoryRepository, SubSubCategoryFilter, SubSubCategoryRepository, UserFilter,
    UserRepository, WhoFilter, WhoRepository,
};
use catalog_core::{DomainError, ListingCounts, OtpPolicy, Page, PageRequest};

use super::context::{ServiceContext, ServiceContextBuilder};

fn paged<T>(rows: Vec<T>, request: PageRequest) -> Page<T> {
    let total = rows.len() as i64;
    let data = match request.window() {
        Some((limit, skip)) => rows
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect(),
        None => rows,
    };
    Page::new(request, data, total)
}

fn searched(search: Option<&str>, fields: &[&str]) -> bool {
    search.map_or(true, |needle| fields.iter().any(|f| f.contains(needle)))
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct FakeUsers {
    rows: Mutex<Vec<User>>,
    /// Number of upcoming `record_otp_issue` calls that lose the race
    pub lost_races: AtomicUsize,
}

impl FakeUsers {
    pub fn insert(&self, email: &str, user_name: &str) -> User {
        let mut rows = self.rows.lock().unwrap();
        let user = User {
            id: rows.len() as i64 + 1,
            email: email.to_string(),
            user_name: user_name.to_string(),
            display_name: None,
            otp: None,
            otp_count: 0,
            last_otp_at: None,
            created_at: Utc::now(),
            modified_at: None,
            deleted_at: None,
        };
        rows.push(user.clone());
        user
    }

    pub fn modify(&self, id: i64, f: impl FnOnce(&mut User)) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(user) = rows.iter_mut().find(|u| u.id == id) {
            f(user);
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|u| {
            !u.is_deleted() && u.email == email && Some(u.id) != exclude_id
        }))
    }

    async fn user_name_exists(&self, user_name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|u| {
            !u.is_deleted() && u.user_name == user_name && Some(u.id) != exclude_id
        }))
    }

    async fn create(&self, draft: &UserDraft) -> RepoResult<User> {
        let user = self.insert(&draft.email, &draft.user_name);
        self.modify(user.id, |u| u.display_name = draft.display_name.clone());
        Ok(self.get(user.id).unwrap_or(user))
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|u| u.id == user.id && !u.is_deleted())
            .ok_or(DomainError::UserNotFound(user.id))?;
        *slot = user.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id && !u.is_deleted())
            .ok_or(DomainError::UserNotFound(id))?;
        user.deleted_at = Some(Utc::now());
        Ok(())
    }

    async fn list(&self, filter: &UserFilter, page: PageRequest) -> RepoResult<Page<User>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| !u.is_deleted())
            .filter(|u| searched(filter.search.as_deref(), &[&u.email, &u.user_name]))
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }

    async fn record_otp_issue(&self, issue: &OtpIssue) -> RepoResult<bool> {
        if self
            .lost_races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Ok(false);
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| {
            u.id == issue.user_id
                && !u.is_deleted()
                && u.otp_count == issue.expected_count
                && u.last_otp_at == issue.expected_last
        }) {
            Some(user) => {
                user.otp = Some(issue.code.clone());
                user.otp_count = issue.count;
                user.last_otp_at = Some(issue.issued_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ============================================================================
// Category hierarchy
// ============================================================================

#[derive(Default)]
pub struct FakeCategories {
    rows: Mutex<Vec<Category>>,
    pub last_filter: Mutex<Option<CategoryFilter>>,
}

#[async_trait]
impl CategoryRepository for FakeCategories {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.name == name && Some(c.id) != exclude_id))
    }

    async fn create(&self, draft: &CategoryDraft) -> RepoResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        let category = Category {
            id: rows.len() as i64 + 1,
            name: draft.name.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
            is_enabled: draft.is_enabled,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(DomainError::CategoryNotFound(category.id))?;
        *slot = category.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::CategoryNotFound(id));
        }
        Ok(())
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let category = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::CategoryNotFound(id))?;
        category.is_enabled = enabled;
        Ok(())
    }

    async fn list(&self, filter: &CategoryFilter, page: PageRequest) -> RepoResult<Page<Category>> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        let all = self.rows.lock().unwrap().clone();
        let split: Vec<&Category> = all
            .iter()
            .filter(|c| {
                !filter.counts_follow_search || searched(filter.search.as_deref(), &[&c.name])
            })
            .collect();
        let counts = ListingCounts {
            all: all.len() as i64,
            enabled: Some(split.iter().filter(|c| c.is_enabled).count() as i64),
            disabled: Some(split.iter().filter(|c| !c.is_enabled).count() as i64),
            ..ListingCounts::default()
        };

        let rows = all
            .iter()
            .filter(|c| filter.is_enabled.matches(c.is_enabled))
            .filter(|c| searched(filter.search.as_deref(), &[&c.name]))
            .cloned()
            .collect();
        Ok(paged(rows, page).with_counts(counts))
    }

    async fn sub_category_count(&self, _id: i64) -> RepoResult<i64> {
        Ok(0)
    }
}

#[derive(Default)]
pub struct FakeSubCategories {
    rows: Mutex<Vec<SubCategory>>,
}

#[async_trait]
impl SubCategoryRepository for FakeSubCategories {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubCategory>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.name == name && Some(s.id) != exclude_id))
    }

    async fn create(&self, draft: &SubCategoryDraft) -> RepoResult<SubCategory> {
        let mut rows = self.rows.lock().unwrap();
        let sub = SubCategory {
            id: rows.len() as i64 + 1,
            category_id: draft.category_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
            is_enabled: draft.is_enabled,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(sub.clone());
        Ok(sub)
    }

    async fn update(&self, sub_category: &SubCategory) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|s| s.id == sub_category.id)
            .ok_or(DomainError::SubCategoryNotFound(sub_category.id))?;
        *slot = sub_category.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.rows.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if let Some(sub) = self.rows.lock().unwrap().iter_mut().find(|s| s.id == id) {
            sub.is_enabled = enabled;
        }
        Ok(())
    }

    async fn list(
        &self,
        filter: &SubCategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<SubCategory>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| filter.is_enabled.matches(s.is_enabled))
            .filter(|s| filter.category_ids.is_empty() || filter.category_ids.contains(&s.category_id))
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }
}

#[derive(Default)]
pub struct FakeSubSubCategories {
    rows: Mutex<Vec<SubSubCategory>>,
}

#[async_trait]
impl SubSubCategoryRepository for FakeSubSubCategories {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SubSubCategory>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.name == name && Some(s.id) != exclude_id))
    }

    async fn create(&self, draft: &SubSubCategoryDraft) -> RepoResult<SubSubCategory> {
        let mut rows = self.rows.lock().unwrap();
        let sub = SubSubCategory {
            id: rows.len() as i64 + 1,
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
            is_enabled: draft.is_enabled,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(sub.clone());
        Ok(sub)
    }

    async fn update(&self, sub_sub_category: &SubSubCategory) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|s| s.id == sub_sub_category.id)
            .ok_or(DomainError::SubSubCategoryNotFound(sub_sub_category.id))?;
        *slot = sub_sub_category.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.rows.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if let Some(sub) = self.rows.lock().unwrap().iter_mut().find(|s| s.id == id) {
            sub.is_enabled = enabled;
        }
        Ok(())
    }

    async fn list(
        &self,
        filter: &SubSubCategoryFilter,
        page: PageRequest,
    ) -> RepoResult<Page<SubSubCategory>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| filter.is_enabled.matches(s.is_enabled))
            .filter(|s| {
                filter.sub_category_ids.is_empty()
                    || filter.sub_category_ids.contains(&s.sub_category_id)
            })
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }
}

// ============================================================================
// Items
// ============================================================================

#[derive(Default)]
pub struct FakeItems {
    rows: Mutex<Vec<ItemDetail>>,
    /// Filter seen by the last `list` call
    pub last_filter: Mutex<Option<ItemFilter>>,
}

impl FakeItems {
    pub fn get(&self, id: i64) -> Option<ItemDetail> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.item.id == id)
            .cloned()
    }
}

#[async_trait]
impl ItemRepository for FakeItems {
    async fn find_detail(&self, id: i64) -> RepoResult<Option<ItemDetail>> {
        Ok(self.get(id))
    }

    async fn find_storefront_detail(&self, id: i64) -> RepoResult<Option<ItemDetail>> {
        Ok(self.get(id).filter(|d| d.item.is_enabled))
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|d| d.item.name == name && Some(d.item.id) != exclude_id))
    }

    async fn create(&self, draft: &ItemDraft, children: &ItemChildren) -> RepoResult<Item> {
        let mut rows = self.rows.lock().unwrap();
        let draft = draft.clone();
        let item = Item {
            id: rows.len() as i64 + 1,
            name: draft.name,
            description: draft.description,
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
            sub_sub_category_id: draft.sub_sub_category_id,
            price_lkr: draft.price_lkr,
            price_usd: draft.price_usd,
            per_unit: draft.per_unit,
            price_type: draft.price_type,
            discount_percent: draft.discount_percent,
            is_featured: draft.is_featured,
            is_enabled: draft.is_enabled,
            is_sold: draft.is_sold,
            hot_deal_end_at: draft.hot_deal_end_at,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(ItemDetail {
            item: item.clone(),
            children: children.clone(),
        });
        Ok(item)
    }

    async fn update(&self, item: &Item, children: &ItemChildren) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|d| d.item.id == item.id)
            .ok_or(DomainError::ItemNotFound(item.id))?;
        *slot = ItemDetail {
            item: item.clone(),
            children: children.clone(),
        };
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.item.id != id);
        if rows.len() == before {
            return Err(DomainError::ItemNotFound(id));
        }
        Ok(())
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let detail = rows
            .iter_mut()
            .find(|d| d.item.id == id)
            .ok_or(DomainError::ItemNotFound(id))?;
        detail.item.is_enabled = enabled;
        Ok(())
    }

    async fn list(&self, filter: &ItemFilter, page: PageRequest) -> RepoResult<Page<ItemDetail>> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| !filter.storefront || d.item.is_enabled)
            .filter(|d| filter.is_enabled.matches(d.item.is_enabled))
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }
}

// ============================================================================
// Content, dashboard and health
// ============================================================================

/// Stands in for every port a test does not exercise
#[derive(Default)]
pub struct Unused;

#[async_trait]
impl FaqRepository for Unused {
    async fn find_by_id(&self, _id: i64) -> RepoResult<Option<Faq>> {
        Ok(None)
    }

    async fn create(&self, _draft: &FaqDraft) -> RepoResult<Faq> {
        Err(DomainError::InternalError("unused".to_string()))
    }

    async fn update(&self, faq: &Faq) -> RepoResult<()> {
        Err(DomainError::FaqNotFound(faq.id))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        Err(DomainError::FaqNotFound(id))
    }

    async fn set_enabled(&self, id: i64, _enabled: bool) -> RepoResult<()> {
        Err(DomainError::FaqNotFound(id))
    }

    async fn list(&self, _filter: &FaqFilter, page: PageRequest) -> RepoResult<Page<Faq>> {
        Ok(Page::new(page, Vec::new(), 0))
    }
}

#[async_trait]
impl HeroRepository for Unused {
    async fn find_by_id(&self, _id: i64) -> RepoResult<Option<Hero>> {
        Ok(None)
    }

    async fn create(&self, _draft: &HeroDraft) -> RepoResult<Hero> {
        Err(DomainError::InternalError("unused".to_string()))
    }

    async fn update(&self, hero: &Hero) -> RepoResult<()> {
        Err(DomainError::HeroNotFound(hero.id))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        Err(DomainError::HeroNotFound(id))
    }

    async fn set_enabled(&self, id: i64, _enabled: bool) -> RepoResult<()> {
        Err(DomainError::HeroNotFound(id))
    }

    async fn list(&self, _filter: &HeroFilter, page: PageRequest) -> RepoResult<Page<Hero>> {
        Ok(Page::new(page, Vec::new(), 0))
    }
}

#[derive(Default)]
pub struct FakeAdvertisements {
    rows: Mutex<Vec<Advertisement>>,
}

#[async_trait]
impl AdvertisementRepository for FakeAdvertisements {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Advertisement>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, draft: &AdvertisementDraft) -> RepoResult<Advertisement> {
        let mut rows = self.rows.lock().unwrap();
        let advertisement = Advertisement {
            id: rows.len() as i64 + 1,
            image_url: draft.image_url.clone(),
            is_enabled: draft.is_enabled,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(advertisement.clone());
        Ok(advertisement)
    }

    async fn update(&self, advertisement: &Advertisement) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == advertisement.id)
            .ok_or(DomainError::AdvertisementNotFound(advertisement.id))?;
        *row = advertisement.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(DomainError::AdvertisementNotFound(id));
        }
        Ok(())
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let advertisement = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::AdvertisementNotFound(id))?;
        advertisement.is_enabled = enabled;
        Ok(())
    }

    async fn list(
        &self,
        filter: &AdvertisementFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Advertisement>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| filter.is_enabled.matches(a.is_enabled))
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }
}

#[derive(Default)]
pub struct FakeWho {
    rows: Mutex<Vec<Who>>,
}

#[async_trait]
impl WhoRepository for FakeWho {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Who>> {
        Ok(self.rows.lock().unwrap().iter().find(|w| w.id == id).cloned())
    }

    async fn create(&self, draft: &WhoDraft) -> RepoResult<Who> {
        let mut rows = self.rows.lock().unwrap();
        let who = Who {
            id: rows.len() as i64 + 1,
            key: draft.key.clone(),
            value: draft.value.clone(),
            mdi_icon: draft.mdi_icon.clone(),
            is_enabled: draft.is_enabled,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(who.clone());
        Ok(who)
    }

    async fn update(&self, who: &Who) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|w| w.id == who.id)
            .ok_or(DomainError::WhoNotFound(who.id))?;
        *row = who.clone();
        Ok(())
    }

    async fn list(&self, filter: &WhoFilter, page: PageRequest) -> RepoResult<Page<Who>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| filter.is_enabled.matches(w.is_enabled))
            .filter(|w| searched(filter.search.as_deref(), &[&w.key]))
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }
}

#[derive(Default)]
pub struct FakeReviews {
    rows: Mutex<Vec<Review>>,
    pub last_filter: Mutex<Option<ReviewFilter>>,
}

#[async_trait]
impl ReviewRepository for FakeReviews {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Review>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, draft: &ReviewDraft) -> RepoResult<Review> {
        let mut rows = self.rows.lock().unwrap();
        let review = Review {
            id: rows.len() as i64 + 1,
            review: draft.review.clone(),
            rating: draft.rating,
            email: draft.email.clone(),
            name: draft.name.clone(),
            is_approved: false,
            created_at: Utc::now(),
            modified_at: None,
        };
        rows.push(review.clone());
        Ok(review)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn set_approved(&self, id: i64, approved: bool) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let review = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReviewNotFound(id))?;
        review.is_approved = approved;
        Ok(())
    }

    async fn list(&self, filter: &ReviewFilter, page: PageRequest) -> RepoResult<Page<Review>> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.is_approved.matches(r.is_approved))
            .cloned()
            .collect();
        Ok(paged(rows, page))
    }
}

#[async_trait]
impl ContactEmailRepository for Unused {
    async fn find_by_id(&self, _id: i64) -> RepoResult<Option<ContactEmail>> {
        Ok(None)
    }

    async fn create(&self, _draft: &ContactEmailDraft) -> RepoResult<ContactEmail> {
        Err(DomainError::InternalError("unused".to_string()))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        Err(DomainError::ContactEmailNotFound(id))
    }

    async fn mark_read(&self, id: i64) -> RepoResult<()> {
        Err(DomainError::ContactEmailNotFound(id))
    }

    async fn list(
        &self,
        _filter: &ContactEmailFilter,
        page: PageRequest,
    ) -> RepoResult<Page<ContactEmail>> {
        Ok(Page::new(page, Vec::new(), 0))
    }
}

#[async_trait]
impl DashboardRepository for Unused {
    async fn counts(&self) -> RepoResult<DashboardCounts> {
        Ok(DashboardCounts::default())
    }
}

#[async_trait]
impl HealthCheck for Unused {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

// ============================================================================
// Outbound
// ============================================================================

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail: bool,
    pub drop_all: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, DomainError> {
        if self.fail {
            return Err(DomainError::DeliveryError("provider unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(email.clone());
        if self.drop_all {
            return Ok(Delivery::dropped());
        }
        Ok(Delivery::default())
    }
}

#[derive(Default)]
pub struct RecordingStore {
    pub keys: Mutex<Vec<String>>,
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, DomainError> {
        self.keys.lock().unwrap().push(key.to_string());
        Ok(format!("https://cdn.example.com/{key}"))
    }
}

// ============================================================================
// Harness
// ============================================================================

pub const TEST_SECRET: &str = "test-secret-key-that-is-long-enough";

/// A service context over fresh fakes, with handles for inspection
pub struct Harness {
    pub users: Arc<FakeUsers>,
    pub categories: Arc<FakeCategories>,
    pub sub_categories: Arc<FakeSubCategories>,
    pub sub_sub_categories: Arc<FakeSubSubCategories>,
    pub items: Arc<FakeItems>,
    pub reviews: Arc<FakeReviews>,
    pub advertisements: Arc<FakeAdvertisements>,
    pub who: Arc<FakeWho>,
    pub mailer: Arc<RecordingMailer>,
    pub store: Arc<RecordingStore>,
    pub ctx: ServiceContext,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_mailer(RecordingMailer::default())
    }

    pub fn with_failing_mailer() -> Self {
        Self::with_mailer(RecordingMailer {
            fail: true,
            ..RecordingMailer::default()
        })
    }

    pub fn with_dropping_mailer() -> Self {
        Self::with_mailer(RecordingMailer {
            drop_all: true,
            ..RecordingMailer::default()
        })
    }

    fn with_mailer(mailer: RecordingMailer) -> Self {
        let users = Arc::new(FakeUsers::default());
        let categories = Arc::new(FakeCategories::default());
        let sub_categories = Arc::new(FakeSubCategories::default());
        let sub_sub_categories = Arc::new(FakeSubSubCategories::default());
        let items = Arc::new(FakeItems::default());
        let reviews = Arc::new(FakeReviews::default());
        let advertisements = Arc::new(FakeAdvertisements::default());
        let who = Arc::new(FakeWho::default());
        let mailer = Arc::new(mailer);
        let store = Arc::new(RecordingStore::default());
        let unused = Arc::new(Unused);

        let ctx = ServiceContextBuilder::new()
            .user_repo(users.clone())
            .category_repo(categories.clone())
            .sub_category_repo(sub_categories.clone())
            .sub_sub_category_repo(sub_sub_categories.clone())
            .item_repo(items.clone())
            .faq_repo(unused.clone())
            .hero_repo(unused.clone())
            .advertisement_repo(advertisements.clone())
            .who_repo(who.clone())
            .review_repo(reviews.clone())
            .contact_email_repo(unused.clone())
            .dashboard_repo(unused.clone())
            .health(unused)
            .mailer(mailer.clone())
            .object_store(store.clone())
            .session_tokens(Arc::new(SessionTokenService::new(TEST_SECRET, 2_592_000)))
            .otp_policy(OtpPolicy::default())
            .build()
            .unwrap();

        Self {
            users,
            categories,
            sub_categories,
            sub_sub_categories,
            items,
            reviews,
            advertisements,
            who,
            mailer,
            store,
            ctx,
        }
    }
}
