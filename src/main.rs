mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(
        "Starting LFG bot (guild scoped commands: {}, retire on author leave: {})",
        config.guild_ids.len(),
        config.retire_on_author_leave
    );

    bot::start::start_bot(config).await
}
