use serenity::all::{ChannelId, UserId};
use thiserror::Error;

use crate::model::request::PlayerCount;

/// Reasons an `/lfg` invocation is refused before a request is created.
///
/// The `Display` output is the exact text shown to the invoking user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestRejection {
    #[error("You already have an active LFG request. Complete it before creating a new one.")]
    AlreadyActive,

    #[error(
        "The number of players must be between {} and {}.",
        PlayerCount::MIN,
        PlayerCount::MAX
    )]
    InvalidPlayerCount(i64),

    #[error("You're not in a voice channel.")]
    NotInVoice,

    /// The member is connected but the channel is unknown to the bot.
    #[error(
        "You're not in a voice channel, or I am not able to find your voice channel. \
         If you are connected to a voice channel, please contact an administrator about this issue."
    )]
    UnresolvedChannel(ChannelId),

    #[error("Your group in <#{channel}> is already full ({occupancy} players connected).")]
    PartyFull { channel: ChannelId, occupancy: usize },

    #[error("<@{owner}> is already looking for players in <#{channel}>.")]
    ChannelTaken { owner: UserId, channel: ChannelId },
}
