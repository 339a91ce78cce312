//! Value objects - immutable types that represent domain concepts

mod listing;
mod otp;

pub use listing::{parse_id_set, ListingCounts, Page, PageRequest, TriState};
pub use otp::{OtpCode, OtpPolicy};
