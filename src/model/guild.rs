//! Owned snapshot of the guild state used by the LFG flows.
//!
//! Captured from the serenity cache before any Discord call is awaited, so cache
//! guards never live across suspension points.

use std::collections::HashMap;

use serenity::all::{ChannelId, RoleId, UserId};

/// A voice channel together with its current occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannelInfo {
    pub id: ChannelId,
    pub name: String,
    /// `None` when the channel has no user limit.
    pub user_limit: Option<u32>,
    pub occupants: Vec<UserId>,
}

impl VoiceChannelInfo {
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }
}

/// A guild role as far as rendering is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    pub id: RoleId,
    pub name: String,
}

/// Display attributes of a guild member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub user_id: UserId,
    pub display_name: String,
    /// Colour of the member's highest coloured role, if any.
    pub colour: Option<u32>,
    pub roles: Vec<RoleInfo>,
}

impl MemberProfile {
    /// Profile used when the member is no longer cached.
    pub fn unknown(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: format!("User {}", user_id),
            colour: None,
            roles: Vec::new(),
        }
    }

    pub fn role_ids(&self) -> Vec<RoleId> {
        self.roles.iter().map(|role| role.id).collect()
    }
}

/// Where the invoker of `/lfg` currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequesterVoice {
    NotConnected,
    /// Connected to a channel the bot cannot see.
    Unresolved(ChannelId),
    Connected(VoiceChannelInfo),
}

#[derive(Debug, Clone)]
struct ChannelMeta {
    name: String,
    user_limit: Option<u32>,
}

/// Voice states, voice channels and selected member profiles of one guild.
#[derive(Debug, Clone, Default)]
pub struct GuildSnapshot {
    voice_states: HashMap<UserId, ChannelId>,
    channels: HashMap<ChannelId, ChannelMeta>,
    members: HashMap<UserId, MemberProfile>,
}

impl GuildSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voice_channel(
        mut self,
        id: ChannelId,
        name: impl Into<String>,
        user_limit: Option<u32>,
    ) -> Self {
        self.channels.insert(
            id,
            ChannelMeta {
                name: name.into(),
                user_limit,
            },
        );
        self
    }

    pub fn with_member(mut self, profile: MemberProfile) -> Self {
        self.members.insert(profile.user_id, profile);
        self
    }

    /// Records `user_id` as connected to `channel_id`.
    pub fn with_connected(mut self, user_id: UserId, channel_id: ChannelId) -> Self {
        self.voice_states.insert(user_id, channel_id);
        self
    }

    pub fn voice_channel_of(&self, user_id: UserId) -> Option<ChannelId> {
        self.voice_states.get(&user_id).copied()
    }

    /// Resolves a voice channel and its occupants, sorted by user id.
    pub fn voice_channel(&self, channel_id: ChannelId) -> Option<VoiceChannelInfo> {
        let meta = self.channels.get(&channel_id)?;
        let mut occupants: Vec<UserId> = self
            .voice_states
            .iter()
            .filter(|(_, connected_to)| **connected_to == channel_id)
            .map(|(user_id, _)| *user_id)
            .collect();
        occupants.sort();

        Some(VoiceChannelInfo {
            id: channel_id,
            name: meta.name.clone(),
            user_limit: meta.user_limit,
            occupants,
        })
    }

    pub fn requester_voice(&self, user_id: UserId) -> RequesterVoice {
        match self.voice_channel_of(user_id) {
            None => RequesterVoice::NotConnected,
            Some(channel_id) => match self.voice_channel(channel_id) {
                Some(channel) => RequesterVoice::Connected(channel),
                None => RequesterVoice::Unresolved(channel_id),
            },
        }
    }

    /// Profile of a member, falling back to an id-only profile when not captured.
    pub fn member(&self, user_id: UserId) -> MemberProfile {
        self.members
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| MemberProfile::unknown(user_id))
    }
}
