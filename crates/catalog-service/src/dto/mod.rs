//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Query-string filter sets for listings
//! - Response DTOs for serializing API outputs
//! - Mappers between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CheckOtpRequest, ContactEmailQuery, CreateAdvertisementRequest, CreateCategoryRequest, CreateContactEmailRequest,
    CreateFaqRequest, CreateHeroRequest, CreateItemRequest, CreateReviewRequest,
    CreateSubCategoryRequest, CreateSubSubCategoryRequest, CreateUserRequest, CreateWhoRequest,
    EnabledQuery,
    IdRequest, ItemEmbedInput, ItemFeatureInput, ItemImageInput, ItemPropertyInput, ItemQuery,
    Listing, ListingParams, ReviewQuery, SendOtpRequest, SubCategoryQuery, SubSubCategoryQuery,
    UpdateAdvertisementRequest, UpdateCategoryRequest, UpdateFaqRequest, UpdateHeroRequest, UpdateItemRequest,
    UpdateSubCategoryRequest, UpdateSubSubCategoryRequest, UpdateUserRequest, UpdateWhoRequest,
    UploadQuery,
};

// Re-export commonly used response types
pub use responses::{
    AdvertisementResponse, CategoryDetailResponse, CategoryNode, CategoryResponse, ContactEmailResponse, CountsResponse,
    CreatedResponse, DashboardCountsResponse, DocumentResponse, FaqResponse, HealthResponse,
    HeroResponse, ItemResponse, ListingResponse, MessageResponse, ReadinessResponse,
    ReviewResponse, SendOtpResponse, SessionResponse, SubCategoryNode, SubCategoryResponse,
    SubSubCategoryNode, SubSubCategoryResponse, UserResponse, WhoResponse,
};
