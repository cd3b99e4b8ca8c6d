//! Price poll loop
//!
//! Samples the ticker provider on a fixed interval, tracks running extremes
//! and posts one notification per sample.

use crate::{
    constants::{INITIAL_RUNNING_MAX, INITIAL_RUNNING_MIN},
    error::{PollError, ProviderError},
    notifier::Notifier,
    provider::TickerProvider,
    types::PriceDirection,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Running state carried between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopState {
    pub running_max: f64,
    pub running_min: f64,
    pub previous_price: f64,
}

impl Default for LoopState {
    fn default() -> Self {
        Self {
            running_max: INITIAL_RUNNING_MAX,
            running_min: INITIAL_RUNNING_MIN,
            previous_price: 0.0,
        }
    }
}

impl LoopState {
    /// Folds a sample into the state and classifies it against the previous one
    pub fn observe(&mut self, price: f64) -> PriceDirection {
        if price > self.running_max {
            self.running_max = price;
        }
        if price < self.running_min {
            self.running_min = price;
        }

        let direction = PriceDirection::from_delta(price - self.previous_price);
        self.previous_price = price;
        direction
    }
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// A sample was taken and this message was sent
    Notified(String),
    /// The provider returned no tickers; nothing was sent
    Skipped,
}

/// Timer-driven poller
pub struct PricePoller {
    provider: Arc<dyn TickerProvider>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    state: LoopState,
}

impl PricePoller {
    pub fn new(
        provider: Arc<dyn TickerProvider>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
    ) -> Self {
        Self {
            provider,
            notifier,
            interval,
            state: LoopState::default(),
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Runs one tick: fetch, update state, notify
    ///
    /// An empty ticker list skips the tick without touching the state. Any
    /// other failure is returned to the caller.
    pub async fn tick(&mut self) -> Result<TickOutcome, PollError> {
        let sample = match self.provider.fetch_price().await {
            Ok(sample) => sample,
            Err(ProviderError::EmptyResponse) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    "Provider returned no tickers, skipping tick"
                );
                return Ok(TickOutcome::Skipped);
            }
            Err(e) => return Err(e.into()),
        };

        let direction = self.state.observe(sample.price_value());
        let message = direction.message(&sample.price);

        tracing::info!(
            price = %sample.price,
            direction = ?direction,
            running_max = self.state.running_max,
            running_min = self.state.running_min,
            "Sampled price"
        );

        self.notifier.notify(&message).await?;
        Ok(TickOutcome::Notified(message))
    }

    /// Ticks every interval until a tick fails
    ///
    /// The first tick fires one full interval after start. Ticks never
    /// overlap; a slow tick delays the next one.
    pub async fn run(mut self) -> Result<(), PollError> {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            provider = self.provider.provider_name(),
            "Starting price poll loop"
        );

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick().await?;
        }
    }
}
