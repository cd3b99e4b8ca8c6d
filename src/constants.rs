//! Constants for the ticker notifier
//!
//! Runtime settings come from `config.json`; everything that is fixed for the
//! lifetime of the binary is centralized here.

/// Settings file read at startup, relative to the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Nomics API base URL
pub const NOMICS_API_URL: &str = "https://api.nomics.com";

/// Nomics endpoint for currency tickers
pub const NOMICS_TICKER_ENDPOINT: &str = "/v1/currencies/ticker";

/// Asset id used when the settings leave `Coins` empty
pub const DEFAULT_ASSET_ID: &str = "DOGE";

/// Summary windows requested alongside each ticker
pub const TICKER_INTERVALS: &str = "1h,30d";

/// Page size for ticker queries
pub const TICKER_PAGE_SIZE: u32 = 100;

/// Dogechain explorer base URL
pub const DOGECHAIN_API_URL: &str = "https://dogechain.info";

/// Dogechain endpoint prefix for address balances
pub const DOGECHAIN_BALANCE_ENDPOINT: &str = "/chain/Dogecoin/q/addressbalance";

/// HTTP request timeout (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Content type sent with webhook posts
pub const WEBHOOK_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Starting value of the running maximum
pub const INITIAL_RUNNING_MAX: f64 = 0.0;

/// Starting value of the running minimum
pub const INITIAL_RUNNING_MIN: f64 = 9_999_999_999_999_999.0;

/// User agent for HTTP requests
pub const USER_AGENT: &str = concat!("ticker-notifier/", env!("CARGO_PKG_VERSION"));
