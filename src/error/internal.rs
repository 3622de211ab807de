use serenity::all::{GuildId, UserId};
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// An occupancy change targeted a request that was never displayed.
    ///
    /// Every registered request gets its notification handle right after posting, so
    /// reaching this means the request was created without ever being shown. Logged,
    /// the event is dropped and nothing is shown to the user.
    #[error("LFG request of user {user_id} in guild {guild_id} has no notification message")]
    MissingNotification {
        /// Guild the request belongs to
        guild_id: GuildId,
        /// Author of the request
        user_id: UserId,
    },

    /// The guild an event or command refers to is missing from the cache.
    #[error("Guild {0} is not available in the cache")]
    GuildNotCached(GuildId),

    /// A required slash command option was absent from the interaction payload.
    #[error("Command option `{0}` is missing from the interaction")]
    MissingCommandOption(String),

    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a valid Unix timestamp cannot be converted to Discord's
    /// timestamp format, typically due to timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
