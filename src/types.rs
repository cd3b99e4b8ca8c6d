//! Types for the ticker notifier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Change statistics over one summary window (`1d`, `30d`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeWindow {
    pub volume: String,
    pub price_change: String,
    pub price_change_pct: String,
    pub volume_change: String,
    pub volume_change_pct: String,
    pub market_cap_change: String,
    pub market_cap_change_pct: String,
}

/// Ticker record as returned by the Nomics currencies endpoint
///
/// Numeric values arrive as decimal strings. Only `price` is consumed by the
/// poll loop; the rest is kept so the full record can be logged or inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerSample {
    pub id: String,
    pub currency: String,
    pub symbol: String,
    pub name: String,
    pub logo_url: String,
    pub status: String,

    /// Price in USD as a decimal string
    pub price: String,

    pub price_date: Option<DateTime<Utc>>,
    pub price_timestamp: Option<DateTime<Utc>>,
    pub circulating_supply: String,
    pub market_cap: String,
    pub num_exchanges: String,
    pub num_pairs: String,
    pub num_pairs_unmapped: String,
    pub first_candle: Option<DateTime<Utc>>,
    pub first_trade: Option<DateTime<Utc>>,
    pub first_order_book: Option<DateTime<Utc>>,
    pub rank: String,
    pub rank_delta: String,
    pub high: String,
    pub high_timestamp: Option<DateTime<Utc>>,

    #[serde(rename = "1d")]
    pub one_day: Option<ChangeWindow>,

    #[serde(rename = "30d")]
    pub thirty_day: Option<ChangeWindow>,
}

impl TickerSample {
    /// Creates a sample carrying only a price
    pub fn with_price(price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            ..Default::default()
        }
    }

    /// Price as a float
    ///
    /// An unparseable price yields `0.0`, which the poll loop treats as a
    /// regular sample.
    pub fn price_value(&self) -> f64 {
        match self.price.trim().parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(price = %self.price, error = %e, "Unparseable ticker price, using 0");
                0.0
            }
        }
    }
}

/// Direction of a price move relative to the previous sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    /// Strictly higher than the previous sample
    Up,
    /// Lower than or equal to the previous sample
    Down,
}

impl PriceDirection {
    /// Classifies a price delta; a zero delta counts as `Down`
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        }
    }

    /// Marker prefixed to notifications
    pub fn marker(&self) -> &'static str {
        match self {
            PriceDirection::Up => "🟩",
            PriceDirection::Down => "🟥",
        }
    }

    /// Formats the notification for a raw price string
    pub fn message(&self, price: &str) -> String {
        format!("{} PRICE: {}", self.marker(), price)
    }
}
