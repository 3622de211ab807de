//! Error types and user-facing error replies.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum serves as the
//! top-level error type wrapping domain-specific errors. Command handlers turn an
//! `AppError` into an ephemeral reply through `AppError::user_message`, which logs
//! internal failures and keeps their details away from the invoking user.

pub mod config;
pub mod internal;
pub mod rejection;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, rejection::RequestRejection};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Invariant violation inside the bot, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// `/lfg` refused by the pre-create checks.
    #[error(transparent)]
    Rejected(#[from] RequestRejection),

    /// Invoker lacks the permission a command requires.
    ///
    /// # Fields
    /// - Message shown to the invoker
    #[error("{0}")]
    PermissionDenied(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the text replied to the command invoker.
    ///
    /// Rejections and permission errors are user-caused and shown verbatim. Every
    /// other variant is logged with full details and replaced by a generic message.
    ///
    /// # Returns
    /// - `String` - Message safe to show to the invoking user
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(rejection) => rejection.to_string(),
            Self::PermissionDenied(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong while handling this command, please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::{ChannelId, GuildId, UserId};

    use super::*;

    #[test]
    fn rejection_is_shown_verbatim() {
        let err = AppError::from(RequestRejection::ChannelTaken {
            owner: UserId::new(7),
            channel: ChannelId::new(9),
        });

        assert_eq!(
            err.user_message(),
            "<@7> is already looking for players in <#9>."
        );
    }

    #[test]
    fn player_count_rejection_names_bounds() {
        assert_eq!(
            RequestRejection::InvalidPlayerCount(5).to_string(),
            "The number of players must be between 1 and 2."
        );
    }

    #[test]
    fn internal_errors_are_hidden() {
        let err = AppError::from(InternalError::GuildNotCached(GuildId::new(1)));

        assert!(!err.user_message().contains("cache"));
    }
}
