use serenity::all::{CommandInteraction, Context, CreateCommand, Mentionable, UserId};

use crate::{bot::handler::Handler, error::AppError, model::request::LfgRequest};

use super::require_guild;

pub const NAME: &str = "lfg_list";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("List the active LFG requests of this server (bot owner only)")
        .dm_permission(false)
}

/// Lists the guild's active requests, oldest first.
///
/// # Returns
/// - `Ok(String)` - The formatted list
/// - `Err(AppError::PermissionDenied)` - The invoker is not the bot owner
pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let guild_id = require_guild(command)?;
    ensure_owner(handler, ctx, command.user.id).await?;

    let registry = handler.registry.lock().await;

    Ok(format_requests(&registry.guild_requests(guild_id)))
}

async fn ensure_owner(handler: &Handler, ctx: &Context, user_id: UserId) -> Result<(), AppError> {
    let owner_id = match handler.config.owner_id {
        Some(owner_id) => Some(owner_id),
        None => ctx
            .http
            .get_current_application_info()
            .await?
            .owner
            .map(|owner| owner.id),
    };

    check_owner(owner_id, user_id)
}

/// Refuses everyone but the resolved bot owner. An unknown owner refuses everyone.
pub fn check_owner(owner_id: Option<UserId>, user_id: UserId) -> Result<(), AppError> {
    if owner_id != Some(user_id) {
        return Err(AppError::PermissionDenied(
            "Only the bot owner can use this command.".to_string(),
        ));
    }

    Ok(())
}

/// One line per request with a relative creation timestamp.
pub fn format_requests(requests: &[&LfgRequest]) -> String {
    if requests.is_empty() {
        return "There are no active LFG requests.".to_string();
    }

    let lines: Vec<String> = requests
        .iter()
        .map(|request| {
            format!(
                "- {} in {}: looking for {} player(s), created <t:{}:R>",
                request.author.mention(),
                request.voice_channel.mention(),
                request.looking_for.get(),
                request.created_at.timestamp()
            )
        })
        .collect();

    format!(
        "**{} active LFG request(s)**\n{}",
        requests.len(),
        lines.join("\n")
    )
}
