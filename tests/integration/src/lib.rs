//! Integration test utilities for the catalog API
//!
//! Spawns the full application on a local port and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
