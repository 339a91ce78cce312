//! Listing value objects: page requests, tri-state filters, and result pages

use serde::{Deserialize, Deserializer};

use crate::error::DomainError;

/// Filter flag that is either pinned to a boolean or ignored.
///
/// On the wire `1` means true, `0` means false, and any other integer
/// (conventionally `-1`) leaves the filter out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    Any,
    Yes,
    No,
}

impl TriState {
    pub fn from_flag(flag: i64) -> Self {
        match flag {
            1 => Self::Yes,
            0 => Self::No,
            _ => Self::Any,
        }
    }

    /// The boolean to constrain on, or `None` when the filter is omitted
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Any => None,
        }
    }

    /// Check a value against this filter
    pub fn matches(self, value: bool) -> bool {
        self.as_bool().map_or(true, |wanted| wanted == value)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::from_flag)
    }
}

/// Page position and size for a listing.
///
/// `limit == -1` means "every matching row": no offset or limit is applied
/// and the result reports a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const UNBOUNDED: i64 = -1;

    /// Validate and build a page request
    ///
    /// # Errors
    /// `ValidationError` when `page < 1`, or when `limit` is zero or a
    /// negative value other than `-1`.
    pub fn new(page: i64, limit: i64) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::ValidationError(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if limit != Self::UNBOUNDED && limit < 1 {
            return Err(DomainError::ValidationError(format!(
                "limit must be a positive integer or -1, got {limit}"
            )));
        }
        Ok(Self { page, limit })
    }

    /// Request every matching row
    pub const fn unbounded() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::UNBOUNDED,
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.limit == Self::UNBOUNDED
    }

    /// `(limit, skip)` to apply to the query, or `None` when unbounded
    pub fn window(&self) -> Option<(i64, i64)> {
        if self.is_unbounded() {
            None
        } else {
            Some((self.limit, (self.page - 1).saturating_mul(self.limit)))
        }
    }

    /// `ceil(total / limit)`, or 1 when unbounded
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if self.is_unbounded() {
            1
        } else {
            total_count / self.limit + i64::from(total_count % self.limit != 0)
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Auxiliary counts reported next to a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingCounts {
    /// Rows in scope, ignoring search and flag filters
    pub all: i64,
    pub enabled: Option<i64>,
    pub disabled: Option<i64>,
    pub category: Option<i64>,
    pub sub_category: Option<i64>,
    pub sub_sub_category: Option<i64>,
}

/// One page of a listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub request: PageRequest,
    pub total_count: i64,
    pub counts: ListingCounts,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, data: Vec<T>, total_count: i64) -> Self {
        Self {
            request,
            total_count,
            counts: ListingCounts::default(),
            data,
        }
    }

    pub fn with_counts(mut self, counts: ListingCounts) -> Self {
        self.counts = counts;
        self
    }

    pub fn total_pages(&self) -> i64 {
        self.request.total_pages(self.total_count)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            request: self.request,
            total_count: self.total_count,
            counts: self.counts,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

/// Parse an id set passed as a JSON array string, e.g. `"[1,2]"`.
///
/// A missing or blank value is the empty set.
pub fn parse_id_set(raw: Option<&str>) -> Result<Vec<i64>, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => serde_json::from_str::<Vec<i64>>(raw).map_err(|e| {
            DomainError::ValidationError(format!("expected a JSON array of ids: {e}"))
        }),
    }
}
