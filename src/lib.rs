//! # Ticker Notifier
//!
//! Polls a cryptocurrency ticker API on a fixed interval and posts every sampled
//! price to a chat webhook, marking whether it moved up or down since the
//! previous sample.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use ticker_notifier::{DiscordWebhook, NomicsProvider, PricePoller, Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load("config.json")?;
//!
//! let poller = PricePoller::new(
//!     Arc::new(NomicsProvider::new(&settings)?),
//!     Arc::new(DiscordWebhook::new(&settings)?),
//!     settings.poll_interval(),
//! );
//!
//! // Only returns on the first fatal error
//! poller.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Settings (config.json)
//!     ↓
//! PricePoller (ticks every `Intervals` seconds)
//!     ↓                    ↓
//! TickerProvider        Notifier
//! (Nomics ticker)       (Discord webhook)
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod provider;
pub mod providers;
pub mod types;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use config::Settings;
pub use error::{ConfigError, PollError, ProviderError, WebhookError};
pub use notifier::{DiscordWebhook, Notifier};
pub use poller::{LoopState, PricePoller, TickOutcome};
pub use provider::TickerProvider;
pub use providers::{DogechainClient, NomicsProvider};
pub use types::{ChangeWindow, PriceDirection, TickerSample};
