//! Nomics ticker provider implementation

use crate::{
    config::Settings,
    constants::{
        NOMICS_API_URL, NOMICS_TICKER_ENDPOINT, REQUEST_TIMEOUT_SECS, TICKER_INTERVALS,
        TICKER_PAGE_SIZE, USER_AGENT,
    },
    error::ProviderError,
    provider::TickerProvider,
    types::TickerSample,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Nomics currencies ticker provider
pub struct NomicsProvider {
    client: Client,
    base_url: String,
    api_key: String,
    asset_id: String,
}

impl NomicsProvider {
    /// Creates a provider for the asset and API key in `settings`
    pub fn new(settings: &Settings) -> Result<Self, ProviderError> {
        Self::with_base_url(NOMICS_API_URL, &settings.nomics_api, settings.asset_id())
    }

    /// Creates a provider against a custom API host
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        asset_id: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::NetworkError)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            asset_id: asset_id.into(),
        })
    }

    /// Builds the ticker URL for the configured asset
    fn build_url(&self) -> String {
        format!(
            "{}{}?key={}&ids={}&interval={}&per-page={}&page=1",
            self.base_url,
            NOMICS_TICKER_ENDPOINT,
            self.api_key,
            self.asset_id,
            TICKER_INTERVALS,
            TICKER_PAGE_SIZE
        )
    }

    /// Decodes a ticker list body
    pub fn parse_response(body: &str) -> Result<Vec<TickerSample>, ProviderError> {
        serde_json::from_str(body).map_err(|e| {
            ProviderError::InvalidResponse(format!(
                "Failed to parse Nomics response: {}. Response: {}",
                e, body
            ))
        })
    }
}

#[async_trait]
impl TickerProvider for NomicsProvider {
    async fn fetch_tickers(&self) -> Result<Vec<TickerSample>, ProviderError> {
        let url = self.build_url();
        tracing::debug!(asset = %self.asset_id, "Fetching tickers from Nomics");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url()))?;

        // Check for rate limiting
        if response.status().as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url()))?;
        let tickers = Self::parse_response(&response_text)?;

        tracing::debug!(count = tickers.len(), "Fetched tickers from Nomics");

        Ok(tickers)
    }

    fn provider_name(&self) -> &'static str {
        "nomics"
    }
}
