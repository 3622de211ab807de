use serenity::all::{Context, VoiceState};

use crate::{
    service::{lfg::LfgService, notifier::DiscordNotifier},
    util::guild::snapshot_cached_guild,
};

use super::Handler;

/// Handles a member's voice state transition.
///
/// Joins, leaves and moves are forwarded to the LFG service together with a snapshot
/// of the guild taken after the transition. Mute and deafen updates, and guilds
/// without requests, are skipped before touching the cache.
///
/// # Arguments
/// - `handler` - Event handler holding the registry and configuration
/// - `ctx` - Discord context for cache and HTTP access
/// - `old` - Previous voice state, if cached
/// - `new` - Current voice state
pub async fn handle_voice_state_update(
    handler: &Handler,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    let before = old.and_then(|state| state.channel_id);
    let after = new.channel_id;
    if before == after {
        return;
    }

    let mut registry = handler.registry.lock().await;

    let authors = registry.authors(guild_id);
    if authors.is_empty() {
        tracing::debug!(
            "No LFG requests in guild {}, ignoring voice update of user {}",
            guild_id,
            new.user_id
        );
        return;
    }

    let guild = match snapshot_cached_guild(&ctx.cache, guild_id, &authors) {
        Ok(guild) => guild,
        Err(e) => {
            tracing::error!("Dropping voice update of user {}: {}", new.user_id, e);
            return;
        }
    };

    let notifier = DiscordNotifier::new(ctx.http.clone());
    LfgService::new(&mut registry, &notifier, handler.config.retire_on_author_leave)
        .handle_voice_update(&guild, guild_id, new.user_id, before, after)
        .await;
}
