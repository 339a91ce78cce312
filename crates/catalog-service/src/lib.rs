//! # catalog-service
//!
//! Application layer: services, request and response DTOs, and the outbound
//! adapters for mail delivery and file storage.

pub mod dto;
pub mod outbound;
pub mod services;

pub use outbound::{HttpMailer, LocalObjectStore, LogMailer};
pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
