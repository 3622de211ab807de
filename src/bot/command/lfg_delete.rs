use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Mentionable, Permissions, UserId,
};

use crate::{
    bot::handler::Handler,
    error::AppError,
    service::{lfg::LfgService, notifier::DiscordNotifier},
};

use super::{missing_option, option, require_guild};

pub const NAME: &str = "lfg_delete";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Delete the active LFG request of a member")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "Member whose request should be deleted",
            )
            .required(true),
        )
}

/// Force-deletes a member's request.
///
/// `default_member_permissions` hides the command from members without Manage Messages,
/// but guild administrators can override that, so the permission is checked again.
///
/// # Returns
/// - `Ok(String)` - Confirmation, or a notice that the member had no request
/// - `Err(AppError::PermissionDenied)` - The invoker lacks Manage Messages
pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let guild_id = require_guild(command)?;

    check_manage_messages(command.member.as_ref().and_then(|member| member.permissions))?;

    let user_id = option(command, "user")
        .and_then(|value| value.as_user_id())
        .ok_or_else(|| missing_option("user"))?;

    let mut registry = handler.registry.lock().await;
    let notifier = DiscordNotifier::new(ctx.http.clone());
    let removed = LfgService::new(&mut registry, &notifier, handler.config.retire_on_author_leave)
        .force_delete(guild_id, user_id)
        .await;

    Ok(deletion_reply(user_id, removed.is_some()))
}

/// Requires Manage Messages among the invoker's resolved channel permissions.
pub fn check_manage_messages(permissions: Option<Permissions>) -> Result<(), AppError> {
    if !permissions.is_some_and(|permissions| permissions.manage_messages()) {
        return Err(AppError::PermissionDenied(
            "You need the Manage Messages permission to use this command.".to_string(),
        ));
    }

    Ok(())
}

pub fn deletion_reply(user_id: UserId, removed: bool) -> String {
    if removed {
        format!("Deleted the LFG request of {}.", user_id.mention())
    } else {
        format!("{} has no active LFG request.", user_id.mention())
    }
}
