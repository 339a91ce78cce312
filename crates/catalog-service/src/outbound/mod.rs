//! Outbound adapters for the mail and storage ports

mod mailer;
mod storage;

pub use mailer::{HttpMailer, LogMailer};
pub use storage::LocalObjectStore;
