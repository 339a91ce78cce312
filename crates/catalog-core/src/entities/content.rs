//! Storefront content: FAQs, banners, "who" highlights, reviews and contact messages

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub is_enabled: bool,
}

/// Hero banner shown on the storefront landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: i64,
    pub title: String,
    pub sub_title: Option<String>,
    pub image_url: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct HeroDraft {
    pub title: String,
    pub sub_title: Option<String>,
    pub image_url: Option<String>,
    pub is_enabled: bool,
}

/// Advertisement banner; nothing but an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    pub id: i64,
    pub image_url: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct AdvertisementDraft {
    pub image_url: String,
    pub is_enabled: bool,
}

/// Key/value highlight for the "who we are" section, with an optional
/// Material Design icon name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Who {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    pub mdi_icon: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct WhoDraft {
    pub key: String,
    pub value: Option<String>,
    pub mdi_icon: Option<String>,
    pub is_enabled: bool,
}

/// Customer review; only approved reviews are public
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub review: String,
    pub rating: i32,
    pub email: String,
    pub name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub review: String,
    pub rating: i32,
    pub email: String,
    pub name: String,
}

/// Message submitted through the storefront contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ContactEmailDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}
