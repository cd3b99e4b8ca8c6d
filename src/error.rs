//! Error types for the ticker notifier

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for the settings record
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Poll interval must be at least one second
    #[error("Intervals must be greater than zero")]
    InvalidInterval,

    /// No webhook to deliver notifications to
    #[error("DiscordWebhook is empty")]
    MissingWebhook,
}

/// Errors that can occur when fetching data from an upstream API
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Invalid response from provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider API error
    #[error("Provider API error: {0}")]
    ApiError(String),

    /// Provider answered with an empty ticker list
    #[error("No tickers returned")]
    EmptyResponse,
}

/// Errors that can occur when posting to a webhook
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Payload could not be encoded
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fatal errors that stop the poll loop
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Price fetch failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Notification failed: {0}")]
    Webhook(#[from] WebhookError),
}
