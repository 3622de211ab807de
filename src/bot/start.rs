use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{config::Config, data::RequestRegistry, error::AppError};

use super::handler::Handler;

/// Starts the Discord bot and runs it until shutdown.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: Config) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let token = config.discord_bot_token.clone();
    let handler = Handler::new(Arc::new(config), RequestRegistry::shared());

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
