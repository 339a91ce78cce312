//! Outbound ports: mail delivery and object storage

use async_trait::async_trait;

use crate::error::DomainError;

/// A plain-text message to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Receipt returned by a mail provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    pub provider_id: Option<String>,
    /// Accepted but never handed to a provider
    pub dropped: bool,
}

impl Delivery {
    pub fn dropped() -> Self {
        Self {
            provider_id: None,
            dropped: true,
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Hand a message to the provider; failures map to `DeliveryError`
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, DomainError>;
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key` and return the public URL of the object
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<String, DomainError>;
}
