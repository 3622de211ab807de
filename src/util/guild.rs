//! Capture of `GuildSnapshot`s from cached serenity guilds.

use serenity::all::{Cache, ChannelType, Guild, GuildId, Member, UserId};

use crate::{
    error::internal::InternalError,
    model::guild::{GuildSnapshot, MemberProfile, RoleInfo},
};

/// Snapshots a guild from the serenity cache.
///
/// The cache guard is released before returning, so the result can be held across
/// awaits.
///
/// # Returns
/// - `Ok(GuildSnapshot)` - Snapshot of the cached guild
/// - `Err(InternalError::GuildNotCached)` - The guild is not in the cache
pub fn snapshot_cached_guild(
    cache: &Cache,
    guild_id: GuildId,
    extra_members: &[UserId],
) -> Result<GuildSnapshot, InternalError> {
    let guild = cache
        .guild(guild_id)
        .ok_or(InternalError::GuildNotCached(guild_id))?;

    Ok(snapshot_guild(&guild, extra_members))
}

/// Copies the voice state of a cached guild into an owned snapshot.
///
/// Captures every voice and stage channel, every voice state, and the profiles of all
/// members connected to voice plus `extra_members` (typically request authors who may
/// have disconnected).
///
/// # Arguments
/// - `guild` - Cached guild; must not be held across an await by the caller
/// - `extra_members` - Additional members whose profiles are needed for rendering
pub fn snapshot_guild(guild: &Guild, extra_members: &[UserId]) -> GuildSnapshot {
    let mut snapshot = guild
        .channels
        .values()
        .filter(|channel| matches!(channel.kind, ChannelType::Voice | ChannelType::Stage))
        .fold(GuildSnapshot::new(), |snapshot, channel| {
            snapshot.with_voice_channel(
                channel.id,
                channel.name.clone(),
                channel.user_limit.filter(|limit| *limit > 0),
            )
        });

    let mut profiled: Vec<UserId> = extra_members.to_vec();
    for state in guild.voice_states.values() {
        if let Some(channel_id) = state.channel_id {
            snapshot = snapshot.with_connected(state.user_id, channel_id);
            profiled.push(state.user_id);
        }
    }

    profiled.sort();
    profiled.dedup();

    for user_id in profiled {
        if let Some(member) = guild.members.get(&user_id) {
            snapshot = snapshot.with_member(member_profile(guild, member));
        }
    }

    snapshot
}

/// Builds the rendering profile of a cached member.
///
/// The colour is taken from the highest positioned role with a non-zero colour.
pub fn member_profile(guild: &Guild, member: &Member) -> MemberProfile {
    let roles: Vec<_> = member
        .roles
        .iter()
        .filter_map(|role_id| guild.roles.get(role_id))
        .collect();

    let colour = roles
        .iter()
        .filter(|role| role.colour.0 != 0)
        .max_by_key(|role| role.position)
        .map(|role| role.colour.0);

    MemberProfile {
        user_id: member.user.id,
        display_name: member.display_name().to_string(),
        colour,
        roles: roles
            .into_iter()
            .map(|role| RoleInfo {
                id: role.id,
                name: role.name.clone(),
            })
            .collect(),
    }
}
