//! Content model -> entity mappers

use catalog_core::entities::{Advertisement, ContactEmail, Faq, Hero, Review, Who};
use catalog_core::traits::DashboardCounts;

use crate::models::{
    AdvertisementModel, ContactEmailModel, DashboardCountsModel, FaqModel, HeroModel,
    ReviewModel, WhoModel,
};

impl From<FaqModel> for Faq {
    fn from(model: FaqModel) -> Self {
        Faq {
            id: model.id,
            question: model.question,
            answer: model.answer,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<HeroModel> for Hero {
    fn from(model: HeroModel) -> Self {
        Hero {
            id: model.id,
            title: model.title,
            sub_title: model.sub_title,
            image_url: model.image_url,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<AdvertisementModel> for Advertisement {
    fn from(model: AdvertisementModel) -> Self {
        Advertisement {
            id: model.id,
            image_url: model.image_url,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<WhoModel> for Who {
    fn from(model: WhoModel) -> Self {
        Who {
            id: model.id,
            key: model.key,
            value: model.value,
            mdi_icon: model.mdi_icon,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            review: model.review,
            rating: model.rating,
            email: model.email,
            name: model.name,
            is_approved: model.is_approved,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<ContactEmailModel> for ContactEmail {
    fn from(model: ContactEmailModel) -> Self {
        ContactEmail {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            subject: model.subject,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}

impl From<DashboardCountsModel> for DashboardCounts {
    fn from(model: DashboardCountsModel) -> Self {
        DashboardCounts {
            total_items: model.total_items,
            hot_deal_items: model.hot_deal_items,
            discount_items: model.discount_items,
            featured_items: model.featured_items,
            sold_items: model.sold_items,
            total_categories: model.total_categories,
            total_sub_categories: model.total_sub_categories,
            total_sub_sub_categories: model.total_sub_sub_categories,
            total_users: model.total_users,
            total_reviews: model.total_reviews,
        }
    }
}
