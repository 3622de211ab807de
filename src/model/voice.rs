//! Classification of voice state transitions.

use serenity::all::ChannelId;

/// A membership change of a single voice channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceChange {
    Joined(ChannelId),
    Left(ChannelId),
}

impl VoiceChange {
    pub fn channel_id(self) -> ChannelId {
        match self {
            Self::Joined(channel_id) | Self::Left(channel_id) => channel_id,
        }
    }
}

/// Splits a member's before/after voice channel into independent channel changes.
///
/// A move between two channels yields the leave before the join, so each channel's
/// bound request is evaluated on its own. Staying in the same channel (mute, deafen,
/// stream toggles) yields nothing.
pub fn classify(before: Option<ChannelId>, after: Option<ChannelId>) -> Vec<VoiceChange> {
    match (before, after) {
        (None, Some(joined)) => vec![VoiceChange::Joined(joined)],
        (Some(left), None) => vec![VoiceChange::Left(left)],
        (Some(left), Some(joined)) if left != joined => {
            vec![VoiceChange::Left(left), VoiceChange::Joined(joined)]
        }
        _ => Vec::new(),
    }
}
