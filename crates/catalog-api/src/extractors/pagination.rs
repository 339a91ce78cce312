//! Listing extractors
//!
//! `?page=&limit=&search=` is shared by every listing endpoint; the
//! resource-specific filters arrive through [`FilterQuery`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use catalog_service::dto::{Listing, ListingParams};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Validated page, limit and search of a listing request
#[derive(Debug, Clone, Default)]
pub struct ListingQuery(pub Listing);

#[async_trait]
impl<S> FromRequestParts<S> for ListingQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListingParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ListingQuery(Listing::try_from(params)?))
    }
}

/// Query-string filters with rejections in the API error shape
#[derive(Debug, Clone)]
pub struct FilterQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for FilterQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(FilterQuery(value))
    }
}
