//! Mail delivery adapters

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use catalog_core::traits::{Delivery, Mailer, OutgoingEmail};
use catalog_core::DomainError;

/// Sends mail through a Resend-compatible HTTP API
///
/// Each message is one JSON `POST` authenticated with a bearer key.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct SendBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendReceipt {
    id: Option<String>,
}

impl HttpMailer {
    /// # Errors
    /// `DeliveryError` if the HTTP client cannot be built
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DomainError::DeliveryError(format!("mail client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            from: from.into(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    #[instrument(skip(self, email), fields(to = %email.to))]
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, DomainError> {
        let body = SendBody {
            from: &self.from,
            to: [&email.to],
            subject: &email.subject,
            text: &email.text,
        };

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::DeliveryError(format!("mail request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::DeliveryError(format!(
                "mail provider returned {status}: {body}"
            )));
        }

        let receipt: SendReceipt = resp
            .json()
            .await
            .map_err(|e| DomainError::DeliveryError(format!("mail receipt parse failed: {e}")))?;

        Ok(Delivery {
            provider_id: receipt.id,
            dropped: false,
        })
    }
}

impl std::fmt::Debug for HttpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMailer")
            .field("api_url", &self.api_url)
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

/// Logs messages instead of sending them; used when no mail API key is set
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, DomainError> {
        // the body may hold a passcode, so only the envelope is logged
        warn!(to = %email.to, subject = %email.subject, "Mail delivery disabled, message dropped");
        Ok(Delivery::dropped())
    }
}
