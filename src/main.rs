use std::sync::Arc;
use ticker_notifier::{
    constants::CONFIG_FILE, logging, DiscordWebhook, DogechainClient, NomicsProvider, PollError,
    PricePoller, Settings,
};

#[tokio::main]
async fn main() {
    logging::init_with_default("info");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Ticker notifier stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), PollError> {
    let settings = Settings::load(CONFIG_FILE)?;
    tracing::info!(
        asset = settings.asset_id(),
        interval_secs = settings.intervals,
        "Loaded settings"
    );

    if !settings.doge_token.is_empty() {
        report_wallet_balance(&settings.doge_token).await;
    }

    let provider = Arc::new(NomicsProvider::new(&settings)?);
    let notifier = Arc::new(DiscordWebhook::new(&settings)?);

    PricePoller::new(provider, notifier, settings.poll_interval())
        .run()
        .await
}

/// Logs the wallet balance once; lookup failures are not fatal
async fn report_wallet_balance(address: &str) {
    let balance = match DogechainClient::new() {
        Ok(client) => client.fetch_balance(address).await,
        Err(e) => Err(e),
    };

    match balance {
        Ok(balance) => tracing::info!(address, balance, "Wallet balance"),
        Err(e) => tracing::warn!(address, error = %e, "Failed to fetch wallet balance"),
    }
}
