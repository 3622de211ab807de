//! Ready event handler for bot initialization.
//!
//! Registers the slash commands once the gateway handshake completes: per guild when
//! `LFG_GUILD_IDS` is set, which makes them available immediately, or globally
//! otherwise.

use serenity::all::{Command, Context, Ready};

use crate::{bot::command, config::Config};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Application configuration holding the command guilds
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if config.guild_ids.is_empty() {
        match Command::set_global_commands(&ctx.http, command::all()).await {
            Ok(registered) => tracing::info!("Registered {} global commands", registered.len()),
            Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
        }
        return;
    }

    for guild_id in &config.guild_ids {
        match guild_id.set_commands(&ctx.http, command::all()).await {
            Ok(registered) => tracing::info!(
                "Registered {} commands in guild {}",
                registered.len(),
                guild_id
            ),
            Err(e) => tracing::error!(
                "Failed to register commands in guild {}: {:?}",
                guild_id,
                e
            ),
        }
    }
}
