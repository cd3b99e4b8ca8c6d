//! Settings loaded from `config.json` at startup

use crate::{constants::DEFAULT_ASSET_ID, error::ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Static settings record
///
/// Keys match the on-disk JSON object in PascalCase; camelCase and all-lowercase
/// spellings are accepted too. Missing keys fall back to their zero value; type
/// mismatches are parse errors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name the webhook posts under
    #[serde(rename = "Username", alias = "username")]
    pub username: String,

    /// Ticker asset id (e.g. `DOGE`)
    #[serde(rename = "Coins", alias = "coins")]
    pub coins: String,

    /// Wallet address used for balance lookups
    #[serde(rename = "DogeToken", alias = "dogeToken", alias = "dogetoken")]
    pub doge_token: String,

    /// Nomics API key
    #[serde(rename = "NomicsAPI", alias = "nomicsAPI", alias = "nomicsapi")]
    pub nomics_api: String,

    /// Webhook URL notifications are posted to
    #[serde(rename = "DiscordWebhook", alias = "discordWebhook", alias = "discordwebhook")]
    pub discord_webhook: String,

    /// Poll interval in seconds
    #[serde(rename = "Intervals", alias = "intervals")]
    pub intervals: u64,

    /// Reserved; no alerting is gated on it
    #[serde(rename = "Thresholds", alias = "thresholds")]
    pub thresholds: f64,
}

impl Settings {
    /// Reads and validates settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Parses and validates settings from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.intervals == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        if self.discord_webhook.trim().is_empty() {
            return Err(ConfigError::MissingWebhook);
        }
        Ok(())
    }

    /// Poll interval as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.intervals)
    }

    /// Asset id sent to the ticker API
    pub fn asset_id(&self) -> &str {
        let coins = self.coins.trim();
        if coins.is_empty() {
            DEFAULT_ASSET_ID
        } else {
            coins
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL: &str = r#"{
        "Username": "Bot",
        "Coins": "DOGE",
        "DogeToken": "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L",
        "NomicsAPI": "secret",
        "DiscordWebhook": "https://discord.com/api/webhooks/1/abc",
        "Intervals": 60,
        "Thresholds": 1.05
    }"#;

    #[test]
    fn parses_full_settings() {
        let settings = Settings::from_json(FULL).unwrap();
        assert_eq!(
            settings,
            Settings {
                username: "Bot".to_string(),
                coins: "DOGE".to_string(),
                doge_token: "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L".to_string(),
                nomics_api: "secret".to_string(),
                discord_webhook: "https://discord.com/api/webhooks/1/abc".to_string(),
                intervals: 60,
                thresholds: 1.05,
            }
        );
        assert_eq!(settings.poll_interval(), Duration::from_secs(60));
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let settings =
            Settings::from_json(r#"{"DiscordWebhook": "http://hook", "Intervals": 5}"#).unwrap();
        assert_eq!(settings.username, "");
        assert_eq!(settings.thresholds, 0.0);
        assert_eq!(settings.asset_id(), "DOGE");
    }

    #[test]
    fn accepts_lowercase_and_camel_case_keys() {
        let settings = Settings::from_json(
            r#"{
                "username": "Bot",
                "coins": "DOGE",
                "dogetoken": "DAddr",
                "nomicsapi": "secret",
                "discordWebhook": "http://hook",
                "intervals": 30,
                "thresholds": 1.1
            }"#,
        )
        .unwrap();

        assert_eq!(settings.username, "Bot");
        assert_eq!(settings.doge_token, "DAddr");
        assert_eq!(settings.nomics_api, "secret");
        assert_eq!(settings.discord_webhook, "http://hook");
        assert_eq!(settings.intervals, 30);
        assert_eq!(settings.thresholds, 1.1);
    }

    #[test]
    fn type_mismatch_is_a_parse_error() {
        let err = Settings::from_json(r#"{"Intervals": "soon"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Settings::from_json(r#"{"DiscordWebhook": "http://hook", "Intervals": 0}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval));
    }

    #[test]
    fn empty_webhook_is_rejected() {
        let err = Settings::from_json(r#"{"Intervals": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebhook));
    }

    #[test]
    fn coins_override_default_asset() {
        let settings = Settings::from_json(
            r#"{"Coins": "BTC", "DiscordWebhook": "http://hook", "Intervals": 10}"#,
        )
        .unwrap();
        assert_eq!(settings.asset_id(), "BTC");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "ticker-notifier-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, FULL).unwrap();

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.username, "Bot");
        assert_eq!(settings.intervals, 60);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let err = Settings::load("/nonexistent/ticker-notifier/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
