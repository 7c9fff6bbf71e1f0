//! Outbound message relay for the contact form.
//!
//! The site has no mail server of its own; submissions are forwarded to an
//! EmailJS-compatible HTTP endpoint authenticated by a public key.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RelayConfig;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Relay credentials are absent from the configuration. Detected before
    /// any network attempt.
    #[error("message relay is not configured")]
    NotConfigured,

    #[error("relay request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("relay rejected the message: {status}")]
    Rejected { status: StatusCode },
}

/// One outgoing contact message. Field names match the relay template
/// parameters, so the struct serializes directly into the request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

/// Boundary to the external email-delivery provider. The call is atomic:
/// success or failure, exactly one resolution, no retry.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), RelayError>;
}

/// HTTP relay client for the EmailJS send API.
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutgoingMessage,
}

#[async_trait]
impl MessageRelay for EmailJsRelay {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), RelayError> {
        if !self.config.is_configured() {
            return Err(RelayError::NotConfigured);
        }

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };

        debug!(endpoint = %self.config.endpoint, "forwarding contact message to relay");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected { status });
        }

        info!(to = %message.to_email, "contact message relayed");

        Ok(())
    }
}
