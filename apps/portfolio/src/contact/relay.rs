/// Contact relay: the only outbound call the site makes.
///
/// Delivery is EmailJS's job; this side only learns success or failure.
/// One attempt per submission: no retries, no client timeout.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::RelayConfig;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay rejected message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Template parameters handed to the relay. Field names match the EmailJS
/// template variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

/// Transport that forwards a contact message. Carried in `AppState` as
/// `Arc<dyn ContactRelay>` so tests can swap in a stub.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactMessage,
}

/// EmailJS REST client.
#[derive(Clone)]
pub struct EmailJsRelay {
    client: Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn request<'a>(&'a self, message: &'a ContactMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: message,
        }
    }
}

#[async_trait]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header("content-type", "application/json")
            .json(&self.request(message))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        // EmailJS answers 200 "OK"; anything else is a failed delivery.
        if status.as_u16() != 200 {
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!(status = status.as_u16(), "Relay accepted message");
        Ok(())
    }
}
