//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! from request DTOs to domain drafts.

use catalog_core::entities::{
    Advertisement, AdvertisementDraft, Category, CategoryDraft, ContactEmail, ContactEmailDraft, Faq, FaqDraft, Hero, HeroDraft,
    ItemChildren, ItemDetail, ItemDraft, ItemEmbed, ItemFeature, ItemImage, ItemProperty, Review,
    ReviewDraft, SubCategory, SubCategoryDraft, SubSubCategory, SubSubCategoryDraft, User,
    UserDraft, Who, WhoDraft,
};
use catalog_core::traits::DashboardCounts;

use super::requests::{
    CreateAdvertisementRequest, CreateCategoryRequest, CreateContactEmailRequest, CreateFaqRequest, CreateHeroRequest,
    CreateItemRequest, CreateReviewRequest, CreateSubCategoryRequest, CreateSubSubCategoryRequest,
    CreateUserRequest, CreateWhoRequest,
};
use super::responses::{
    AdvertisementResponse, CategoryResponse, ContactEmailResponse, DashboardCountsResponse, FaqResponse, HeroResponse,
    ItemEmbedResponse, ItemFeatureResponse, ItemImageResponse, ItemPropertyResponse, ItemResponse,
    ReviewResponse, SubCategoryResponse, SubSubCategoryResponse, UserResponse, WhoResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            user_name: user.user_name.clone(),
            display_name: user.display_name.clone(),
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<CreateUserRequest> for UserDraft {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            user_name: request.user_name,
            display_name: request.display_name,
        }
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            image: category.image,
            is_enabled: category.is_enabled,
            created_at: category.created_at,
            modified_at: category.modified_at,
        }
    }
}

impl From<SubCategory> for SubCategoryResponse {
    fn from(sub: SubCategory) -> Self {
        Self {
            id: sub.id,
            category_id: sub.category_id,
            name: sub.name,
            description: sub.description,
            image: sub.image,
            is_enabled: sub.is_enabled,
            created_at: sub.created_at,
            modified_at: sub.modified_at,
        }
    }
}

impl From<SubSubCategory> for SubSubCategoryResponse {
    fn from(sub: SubSubCategory) -> Self {
        Self {
            id: sub.id,
            category_id: sub.category_id,
            sub_category_id: sub.sub_category_id,
            name: sub.name,
            description: sub.description,
            image: sub.image,
            is_enabled: sub.is_enabled,
            created_at: sub.created_at,
            modified_at: sub.modified_at,
        }
    }
}

impl From<CreateCategoryRequest> for CategoryDraft {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            image: request.image,
            is_enabled: request.is_enabled,
        }
    }
}

impl From<CreateSubCategoryRequest> for SubCategoryDraft {
    fn from(request: CreateSubCategoryRequest) -> Self {
        Self {
            category_id: request.category_id,
            name: request.name,
            description: request.description,
            image: request.image,
            is_enabled: request.is_enabled,
        }
    }
}

impl From<CreateSubSubCategoryRequest> for SubSubCategoryDraft {
    fn from(request: CreateSubSubCategoryRequest) -> Self {
        Self {
            category_id: request.category_id,
            sub_category_id: request.sub_category_id,
            name: request.name,
            description: request.description,
            image: request.image,
            is_enabled: request.is_enabled,
        }
    }
}

// ============================================================================
// Item Mappers
// ============================================================================

impl From<ItemDetail> for ItemResponse {
    fn from(detail: ItemDetail) -> Self {
        let ItemDetail { item, children } = detail;
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            category_id: item.category_id,
            sub_category_id: item.sub_category_id,
            sub_sub_category_id: item.sub_sub_category_id,
            price_lkr: item.price_lkr,
            price_usd: item.price_usd,
            per_unit: item.per_unit,
            price_type: item.price_type,
            discount_percent: item.discount_percent,
            is_featured: item.is_featured,
            is_enabled: item.is_enabled,
            is_sold: item.is_sold,
            hot_deal_end_at: item.hot_deal_end_at,
            created_at: item.created_at,
            modified_at: item.modified_at,
            item_properties: children
                .properties
                .into_iter()
                .map(|p| ItemPropertyResponse {
                    key: p.key,
                    value: p.value,
                })
                .collect(),
            item_features: children
                .features
                .into_iter()
                .map(|f| ItemFeatureResponse {
                    name: f.name,
                    icon_url: f.icon_url,
                    mdi_icon: f.mdi_icon,
                })
                .collect(),
            item_images: children
                .images
                .into_iter()
                .map(|i| ItemImageResponse {
                    image_url: i.image_url,
                })
                .collect(),
            item_embeds: children
                .embeds
                .into_iter()
                .map(|e| ItemEmbedResponse {
                    title: e.title,
                    html: e.html,
                })
                .collect(),
        }
    }
}

impl CreateItemRequest {
    /// Split into the item fields and its child rows
    pub fn into_parts(self) -> (ItemDraft, ItemChildren) {
        let children = ItemChildren {
            properties: self
                .item_properties
                .into_iter()
                .map(|p| ItemProperty {
                    key: p.key,
                    value: p.value,
                })
                .collect(),
            features: self
                .item_features
                .into_iter()
                .map(|f| ItemFeature {
                    name: f.name,
                    icon_url: f.icon_url,
                    mdi_icon: f.mdi_icon,
                })
                .collect(),
            images: self
                .item_images
                .into_iter()
                .map(|i| ItemImage {
                    image_url: i.image_url,
                })
                .collect(),
            embeds: self
                .item_embeds
                .into_iter()
                .map(|e| ItemEmbed {
                    title: e.title,
                    html: e.html,
                })
                .collect(),
        };

        let draft = ItemDraft {
            name: self.name,
            description: self.description,
            category_id: self.category_id,
            sub_category_id: self.sub_category_id,
            sub_sub_category_id: self.sub_sub_category_id,
            price_lkr: self.price_lkr,
            price_usd: self.price_usd,
            per_unit: self.per_unit,
            price_type: self.price_type,
            discount_percent: self.discount_percent,
            is_featured: self.is_featured,
            is_enabled: self.is_enabled,
            is_sold: self.is_sold,
            hot_deal_end_at: self.hot_deal_end_at,
        };

        (draft, children)
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
            is_enabled: faq.is_enabled,
            created_at: faq.created_at,
            modified_at: faq.modified_at,
        }
    }
}

impl From<CreateFaqRequest> for FaqDraft {
    fn from(request: CreateFaqRequest) -> Self {
        Self {
            question: request.question,
            answer: request.answer,
            is_enabled: request.is_enabled,
        }
    }
}

impl From<Hero> for HeroResponse {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            title: hero.title,
            sub_title: hero.sub_title,
            image_url: hero.image_url,
            is_enabled: hero.is_enabled,
            created_at: hero.created_at,
            modified_at: hero.modified_at,
        }
    }
}

impl From<CreateHeroRequest> for HeroDraft {
    fn from(request: CreateHeroRequest) -> Self {
        Self {
            title: request.title,
            sub_title: request.sub_title,
            image_url: request.image_url,
            is_enabled: request.is_enabled,
        }
    }
}

impl From<Advertisement> for AdvertisementResponse {
    fn from(advertisement: Advertisement) -> Self {
        Self {
            id: advertisement.id,
            image_url: advertisement.image_url,
            is_enabled: advertisement.is_enabled,
            created_at: advertisement.created_at,
            modified_at: advertisement.modified_at,
        }
    }
}

impl From<CreateAdvertisementRequest> for AdvertisementDraft {
    fn from(request: CreateAdvertisementRequest) -> Self {
        Self {
            image_url: request.image_url,
            is_enabled: request.is_enabled,
        }
    }
}

impl From<Who> for WhoResponse {
    fn from(who: Who) -> Self {
        Self {
            id: who.id,
            key: who.key,
            value: who.value,
            mdi_icon: who.mdi_icon,
            is_enabled: who.is_enabled,
            created_at: who.created_at,
            modified_at: who.modified_at,
        }
    }
}

impl From<CreateWhoRequest> for WhoDraft {
    fn from(request: CreateWhoRequest) -> Self {
        Self {
            key: request.key,
            value: request.value,
            mdi_icon: request.mdi_icon,
            is_enabled: request.is_enabled,
        }
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            review: review.review,
            rating: review.rating,
            email: review.email,
            name: review.name,
            is_approved: review.is_approved,
            created_at: review.created_at,
            modified_at: review.modified_at,
        }
    }
}

impl From<CreateReviewRequest> for ReviewDraft {
    fn from(request: CreateReviewRequest) -> Self {
        Self {
            review: request.review,
            rating: request.rating,
            email: request.email,
            name: request.name,
        }
    }
}

impl From<ContactEmail> for ContactEmailResponse {
    fn from(email: ContactEmail) -> Self {
        Self {
            id: email.id,
            name: email.name,
            email: email.email,
            phone: email.phone,
            subject: email.subject,
            message: email.message,
            is_read: email.is_read,
            created_at: email.created_at,
            modified_at: email.modified_at,
        }
    }
}

impl From<CreateContactEmailRequest> for ContactEmailDraft {
    fn from(request: CreateContactEmailRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            subject: request.subject,
            message: request.message,
        }
    }
}

impl From<DashboardCounts> for DashboardCountsResponse {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            total_items: counts.total_items,
            hot_deal_items: counts.hot_deal_items,
            discount_items: counts.discount_items,
            featured_items: counts.featured_items,
            sold_items: counts.sold_items,
            total_categories: counts.total_categories,
            total_sub_categories: counts.total_sub_categories,
            total_sub_sub_categories: counts.total_sub_sub_categories,
            total_users: counts.total_users,
            total_reviews: counts.total_reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_response_hides_otp() {
        let user = User {
            id: 3,
            email: "admin@example.com".to_string(),
            user_name: "admin".to_string(),
            display_name: None,
            otp: Some("123456".to_string()),
            otp_count: 1,
            last_otp_at: Some(Utc::now()),
            created_at: Utc::now(),
            modified_at: None,
            deleted_at: None,
        };

        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(!json.contains("123456"));
        assert!(!json.contains("otp"));
    }

    #[test]
    fn test_item_request_into_parts() {
        let request: CreateItemRequest = serde_json::from_str(
            r#"{
                "name": "Galaxy S24",
                "category_id": 1,
                "sub_category_id": 2,
                "price_lkr": 250000,
                "price_usd": 830,
                "price_type": "fixed",
                "item_features": [{"name": "5G", "mdi_icon": "mdi-signal"}],
                "item_embeds": [{"html": "<iframe></iframe>"}]
            }"#,
        )
        .unwrap();

        let (draft, children) = request.into_parts();
        assert_eq!(draft.sub_category_id, Some(2));
        assert!(draft.is_enabled);
        assert_eq!(children.features[0].mdi_icon.as_deref(), Some("mdi-signal"));
        assert_eq!(children.embeds[0].title, None);
        assert!(children.properties.is_empty());
    }
}
