//! Dogechain wallet balance lookup

use crate::{
    constants::{DOGECHAIN_API_URL, DOGECHAIN_BALANCE_ENDPOINT, REQUEST_TIMEOUT_SECS, USER_AGENT},
    error::ProviderError,
};
use reqwest::Client;
use std::time::Duration;

/// Client for the Dogechain address balance endpoint
pub struct DogechainClient {
    client: Client,
    base_url: String,
}

impl DogechainClient {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(DOGECHAIN_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::NetworkError)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the balance of `address` in DOGE
    ///
    /// The endpoint answers with a bare decimal number as plain text.
    pub async fn fetch_balance(&self, address: &str) -> Result<f64, ProviderError> {
        let url = format!("{}{}/{}", self.base_url, DOGECHAIN_BALANCE_ENDPOINT, address);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url()))?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url()))?;
        body.trim().parse::<f64>().map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse balance {:?}: {}", body, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;

    #[tokio::test]
    async fn fetches_plain_text_balance() {
        let (base_url, server) = serve_once(200, "1234.5\n").await;
        let client = DogechainClient::with_base_url(base_url).unwrap();

        let balance = client.fetch_balance("DAddr").await.unwrap();
        assert_eq!(balance, 1234.5);

        let request = server.await.unwrap();
        assert_eq!(request.target, "/chain/Dogecoin/q/addressbalance/DAddr");
    }

    #[tokio::test]
    async fn non_numeric_balance_is_invalid_response() {
        let (base_url, _server) = serve_once(200, "Error: invalid address").await;
        let client = DogechainClient::with_base_url(base_url).unwrap();

        let err = client.fetch_balance("nope").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
