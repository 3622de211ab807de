//! Slash command dispatch.
//!
//! Every command is deferred as ephemeral before it runs, since `/lfg` may wait on the
//! registry lock and post a message before it can answer. The deferred reply is then
//! edited with the result. Rejections and permission refusals are shown verbatim and
//! rejections expire after `REJECTION_LIFETIME`; any other failure is logged and
//! replaced by a generic message.

use std::time::Duration;

use serenity::all::{CommandInteraction, Context, EditInteractionResponse, Interaction};

use crate::{
    bot::command::{lfg, lfg_delete, lfg_list, LfgCommand},
    error::AppError,
};

use super::Handler;

/// How long a validation rejection stays visible before it is deleted.
pub const REJECTION_LIFETIME: Duration = Duration::from_secs(15);

/// Text of a command reply and whether it deletes itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub expire_after: Option<Duration>,
}

/// Turns a command result into the reply shown to the invoker.
pub fn reply_for(result: Result<String, AppError>) -> Reply {
    match result {
        Ok(content) => Reply {
            content,
            expire_after: None,
        },
        Err(e @ AppError::Rejected(_)) => Reply {
            content: e.user_message(),
            expire_after: Some(REJECTION_LIFETIME),
        },
        Err(e) => Reply {
            content: e.user_message(),
            expire_after: None,
        },
    }
}

/// Routes a command interaction to its command and sends the reply.
///
/// # Arguments
/// - `handler` - Event handler holding the registry and configuration
/// - `ctx` - Discord context
/// - `interaction` - The received interaction; non-command interactions are ignored
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(kind) = LfgCommand::from_name(&command.data.name) else {
        tracing::debug!("Ignoring unknown command /{}", command.data.name);
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{}: {:?}", command.data.name, e);
        return;
    }

    let result = match kind {
        LfgCommand::Lfg => lfg::run(handler, &ctx, &command).await,
        LfgCommand::List => lfg_list::run(handler, &ctx, &command).await,
        LfgCommand::Delete => lfg_delete::run(handler, &ctx, &command).await,
    };
    let reply = reply_for(result);

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(&reply.content))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
        return;
    }

    if let Some(lifetime) = reply.expire_after {
        expire_reply(ctx, command, lifetime);
    }
}

fn expire_reply(ctx: Context, command: CommandInteraction, lifetime: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(lifetime).await;

        if let Err(e) = command.delete_response(&ctx.http).await {
            tracing::debug!("Failed to delete expired reply to /{}: {:?}", command.data.name, e);
        }
    });
}
