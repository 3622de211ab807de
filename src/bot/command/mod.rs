//! Slash commands.
//!
//! Each command module exposes its `NAME`, a `register()` builder used at `ready`, and
//! a `run()` returning the ephemeral reply text.

pub mod lfg;
pub mod lfg_delete;
pub mod lfg_list;

use serenity::all::{CommandDataOptionValue, CommandInteraction, CreateCommand, GuildId};

use crate::error::{internal::InternalError, AppError};

/// Commands handled by the bot, resolved from the interaction's command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfgCommand {
    Lfg,
    List,
    Delete,
}

impl LfgCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            lfg::NAME => Some(Self::Lfg),
            lfg_list::NAME => Some(Self::List),
            lfg_delete::NAME => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Builders for every command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![lfg::register(), lfg_list::register(), lfg_delete::register()]
}

fn option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a CommandDataOptionValue> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn missing_option(name: &str) -> AppError {
    InternalError::MissingCommandOption(name.to_string()).into()
}

fn require_guild(command: &CommandInteraction) -> Result<GuildId, AppError> {
    command.guild_id.ok_or_else(|| {
        AppError::PermissionDenied("This command can only be used in a server.".to_string())
    })
}
