use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::handler::Handler,
    error::AppError,
    model::request::PlayerCount,
    service::{lfg::LfgService, notifier::DiscordNotifier},
    util::guild::snapshot_cached_guild,
};

use super::{missing_option, option, require_guild};

pub const NAME: &str = "lfg";

pub fn register() -> CreateCommand {
    let mut players = CreateCommandOption::new(
        CommandOptionType::Integer,
        "players",
        "The number of players you are looking for to make a group",
    )
    .required(true);

    for count in PlayerCount::MIN..=PlayerCount::MAX {
        let label = if count == 1 {
            "1 player".to_string()
        } else {
            format!("{} players", count)
        };
        players = players.add_int_choice(label, i32::from(count));
    }

    CreateCommand::new(NAME)
        .description("Create a new LFG post for group-making")
        .dm_permission(false)
        .add_option(players)
}

/// Opens an LFG request for the invoker and posts it in the invoking channel.
///
/// # Returns
/// - `Ok(String)` - Confirmation for the invoker
/// - `Err(AppError::Rejected)` - A pre-create check failed
/// - `Err(AppError)` - The guild is not cached or posting the notification failed
pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let guild_id = require_guild(command)?;
    let players = option(command, "players")
        .and_then(|value| value.as_i64())
        .ok_or_else(|| missing_option("players"))?;

    let mut registry = handler.registry.lock().await;
    let guild = snapshot_cached_guild(&ctx.cache, guild_id, &[command.user.id])?;

    let notifier = DiscordNotifier::new(ctx.http.clone());
    LfgService::new(&mut registry, &notifier, handler.config.retire_on_author_leave)
        .create_request(&guild, guild_id, command.user.id, command.channel_id, players)
        .await?;

    Ok("Your LFG request has been posted.".to_string())
}
