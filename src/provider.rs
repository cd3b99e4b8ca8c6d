//! Provider abstraction for fetching tickers from external APIs

use crate::{error::ProviderError, types::TickerSample};
use async_trait::async_trait;

/// Trait for ticker providers
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// Fetches the full ticker list for the configured asset
    ///
    /// # Returns
    /// Decoded tickers in response order, or an error if the request or
    /// decoding fails
    async fn fetch_tickers(&self) -> Result<Vec<TickerSample>, ProviderError>;

    /// Fetches the first ticker of the list
    ///
    /// # Returns
    /// The first ticker, or `ProviderError::EmptyResponse` when the provider
    /// returned no tickers
    async fn fetch_price(&self) -> Result<TickerSample, ProviderError> {
        self.fetch_tickers()
            .await?
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse)
    }

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}
