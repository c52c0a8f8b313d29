use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use krypton_signals::config::AppConfig;
use krypton_signals::feed::client::HttpFeed;
use krypton_signals::services::refresh::RefreshService;
use krypton_signals::session::Session;
use krypton_signals::signals::repository::SignalRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting KryptoN signal monitor...");

    let config = AppConfig::load()?;

    let session = match std::env::var("FEED_TOKEN") {
        Ok(token) => Session::with_token(token),
        Err(_) => Session::anonymous(),
    };

    let feed = HttpFeed::new(&config.feed, session)?;
    info!("Feed URL: {}", feed.url());

    let repository = SignalRepository::new();
    let service = RefreshService::new(
        Arc::new(feed),
        repository.clone(),
        Duration::from_secs(config.feed.refresh_secs),
    );
    service.start();

    tokio::signal::ctrl_c().await?;
    info!("Shutting down ({} signals held)", repository.total_count());
    service.stop();

    Ok(())
}
