use std::{collections::HashMap, sync::Arc};

use serenity::all::{ChannelId, GuildId, UserId};
use tokio::sync::Mutex;

use crate::model::request::LfgRequest;

/// Registry handle shared between event handlers.
///
/// Handlers hold the lock for the whole of a command or voice event, including the
/// Discord calls it makes, so events are applied one at a time.
pub type SharedRegistry = Arc<Mutex<RequestRegistry>>;

/// Active LFG requests keyed by guild, then by author.
///
/// Parameter order is always `(guild_id, user_id)`. One request per author is kept;
/// the one-request-per-voice-channel rule is enforced by the `/lfg` checks before
/// `push` is called.
#[derive(Debug, Default)]
pub struct RequestRegistry {
    requests: HashMap<GuildId, HashMap<UserId, LfgRequest>>,
}

impl RequestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Inserts a request, silently replacing any existing one for the same author.
    ///
    /// Callers check `has_request` first; overwriting is not guarded here.
    pub fn push(&mut self, guild_id: GuildId, user_id: UserId, request: LfgRequest) {
        self.requests
            .entry(guild_id)
            .or_default()
            .insert(user_id, request);
    }

    pub fn has_request(&self, guild_id: GuildId, user_id: UserId) -> bool {
        self.get_request(guild_id, user_id).is_some()
    }

    pub fn get_request(&self, guild_id: GuildId, user_id: UserId) -> Option<&LfgRequest> {
        self.requests.get(&guild_id)?.get(&user_id)
    }

    /// Finds the request bound to a voice channel by scanning the guild's requests.
    ///
    /// Returns the first match; at most one exists while the per-channel rule holds.
    pub fn get_request_by_voice_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Option<&LfgRequest> {
        self.requests
            .get(&guild_id)?
            .values()
            .find(|request| request.voice_channel == channel_id)
    }

    /// Removes and returns a request. Guild maps left empty are dropped.
    pub fn pop(&mut self, guild_id: GuildId, user_id: UserId) -> Option<LfgRequest> {
        let guild_requests = self.requests.get_mut(&guild_id)?;
        let request = guild_requests.remove(&user_id);

        if guild_requests.is_empty() {
            self.requests.remove(&guild_id);
        }

        request
    }

    /// Active requests of a guild, oldest first.
    pub fn guild_requests(&self, guild_id: GuildId) -> Vec<&LfgRequest> {
        let mut requests: Vec<&LfgRequest> = self
            .requests
            .get(&guild_id)
            .map(|guild_requests| guild_requests.values().collect())
            .unwrap_or_default();
        requests.sort_by_key(|request| (request.created_at, request.author));
        requests
    }

    /// Authors with an active request in a guild.
    pub fn authors(&self, guild_id: GuildId) -> Vec<UserId> {
        self.requests
            .get(&guild_id)
            .map(|guild_requests| guild_requests.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of active requests across all guilds.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.requests.values().map(HashMap::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
