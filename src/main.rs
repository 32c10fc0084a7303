use anyhow::{Context, Result};
use chrono::Utc;

use homework_czujka::{Config, PracticumClient, TelegramClient, Watcher};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    homework_czujka::logger::init_logging();

    let config = Config::from_env().context("Configuration check failed")?;

    tracing::info!(
        endpoint = config.practicum_endpoint,
        interval_secs = config.poll_interval.as_secs(),
        "Starting homework status watcher"
    );

    let practicum = PracticumClient::new(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
    );
    let telegram = TelegramClient::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    let watcher = Watcher::new(practicum, telegram, Utc::now().timestamp());
    watcher.run(config.poll_interval).await;

    Ok(())
}
