//! Pre-create checks for `/lfg`.

use serenity::all::{GuildId, UserId};

use crate::{
    data::RequestRegistry,
    error::rejection::RequestRejection,
    model::{
        guild::{RequesterVoice, VoiceChannelInfo},
        request::PlayerCount,
    },
};

/// Decides whether `user_id` may open a request for `players` more players.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. no active request by the same user in the guild
/// 2. `players` within 1..=2
/// 3. connected to voice
/// 4. voice channel resolvable
/// 5. party not already full
/// 6. no other request bound to the same voice channel
///
/// # Returns
/// - `Ok((PlayerCount, VoiceChannelInfo))` - Validated count and the channel to bind
/// - `Err(RequestRejection)` - The first failing check
pub fn check_can_start_request(
    registry: &RequestRegistry,
    guild_id: GuildId,
    user_id: UserId,
    players: i64,
    voice: &RequesterVoice,
) -> Result<(PlayerCount, VoiceChannelInfo), RequestRejection> {
    if registry.has_request(guild_id, user_id) {
        return Err(RequestRejection::AlreadyActive);
    }

    let looking_for =
        PlayerCount::new(players).ok_or(RequestRejection::InvalidPlayerCount(players))?;

    let channel = match voice {
        RequesterVoice::NotConnected => return Err(RequestRejection::NotInVoice),
        RequesterVoice::Unresolved(channel_id) => {
            tracing::warn!(
                "User {} is connected to voice channel {} missing from guild {}",
                user_id,
                channel_id,
                guild_id
            );
            return Err(RequestRejection::UnresolvedChannel(*channel_id));
        }
        RequesterVoice::Connected(channel) => channel,
    };

    if channel.occupancy() >= looking_for.party_size() {
        return Err(RequestRejection::PartyFull {
            channel: channel.id,
            occupancy: channel.occupancy(),
        });
    }

    if let Some(existing) = registry.get_request_by_voice_channel(guild_id, channel.id) {
        return Err(RequestRejection::ChannelTaken {
            owner: existing.author,
            channel: channel.id,
        });
    }

    Ok((looking_for, channel.clone()))
}
