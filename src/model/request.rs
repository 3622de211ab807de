//! LFG request entity and its derived occupancy values.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId, MessageId, UserId};

/// Number of additional players a request is looking for.
///
/// Always within `MIN..=MAX`; construct through `PlayerCount::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 2;

    /// Validates a raw command argument.
    ///
    /// # Returns
    /// - `Some(PlayerCount)` - `players` is within `MIN..=MAX`
    /// - `None` - Out of range
    pub fn new(players: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&players) {
            Some(Self(players as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Party capacity including the author.
    pub fn party_size(self) -> usize {
        usize::from(self.0) + 1
    }
}

/// The posted status message tracking a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationHandle {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// One user's open call for players.
#[derive(Debug, Clone, PartialEq)]
pub struct LfgRequest {
    pub guild_id: GuildId,
    /// The requesting member. Name and roles are resolved from the guild at render time.
    pub author: UserId,
    /// Voice channel the author was connected to at creation. Never re-resolved.
    pub voice_channel: ChannelId,
    /// Text channel the command was invoked in; completion notices go here.
    pub text_channel: ChannelId,
    pub looking_for: PlayerCount,
    /// Absent until the notification has been posted.
    pub notification: Option<NotificationHandle>,
    pub created_at: DateTime<Utc>,
}

impl LfgRequest {
    pub fn new(
        guild_id: GuildId,
        author: UserId,
        voice_channel: ChannelId,
        text_channel: ChannelId,
        looking_for: PlayerCount,
    ) -> Self {
        Self {
            guild_id,
            author,
            voice_channel,
            text_channel,
            looking_for,
            notification: None,
            created_at: Utc::now(),
        }
    }

    /// Places left before the party is full, given the current channel occupancy.
    ///
    /// Recomputed on every call. Negative when the channel holds more members than the
    /// party size.
    pub fn remaining_places(&self, occupancy: usize) -> i64 {
        remaining_places(self.looking_for, occupancy)
    }

    pub fn is_complete(&self, occupancy: usize) -> bool {
        self.remaining_places(occupancy) <= 0
    }
}

/// `looking_for + 1 - occupancy`
pub fn remaining_places(looking_for: PlayerCount, occupancy: usize) -> i64 {
    let party_size = i64::from(looking_for.get()) + 1;
    party_size - i64::try_from(occupancy).unwrap_or(i64::MAX)
}
