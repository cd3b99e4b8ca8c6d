//! Webhook notifications

use crate::{
    config::Settings,
    constants::{REQUEST_TIMEOUT_SECS, USER_AGENT, WEBHOOK_CONTENT_TYPE},
    error::WebhookError,
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Serialize;
use std::time::Duration;

/// Trait for notification sinks
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one message
    async fn notify(&self, message: &str) -> Result<(), WebhookError>;
}

/// Body posted to the webhook
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub username: &'a str,
    pub content: &'a str,
}

/// Discord-style webhook posting `{username, content}`
pub struct DiscordWebhook {
    client: Client,
    url: String,
    username: String,
}

impl DiscordWebhook {
    /// Creates a webhook for the URL and username in `settings`
    pub fn new(settings: &Settings) -> Result<Self, WebhookError> {
        Self::with_url(&settings.discord_webhook, &settings.username)
    }

    pub fn with_url(
        url: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(WebhookError::NetworkError)?;

        Ok(Self {
            client,
            url: url.into(),
            username: username.into(),
        })
    }

    /// Encodes the JSON body for a message
    pub fn payload(&self, message: &str) -> Result<Vec<u8>, WebhookError> {
        let payload = WebhookPayload {
            username: &self.username,
            content: message,
        };
        Ok(serde_json::to_vec(&payload)?)
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn notify(&self, message: &str) -> Result<(), WebhookError> {
        let body = self.payload(message)?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, WEBHOOK_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| WebhookError::NetworkError(e.without_url()))?;

        // Delivery failures reported by the webhook do not stop the loop
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Webhook rejected notification");
        } else {
            tracing::debug!(status = %status, "Notification delivered");
        }

        Ok(())
    }
}
