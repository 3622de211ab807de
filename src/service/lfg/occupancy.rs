//! Voice occupancy monitoring.
//!
//! Every voice state update is classified into per-channel joins and leaves. Each
//! change is matched against the request bound to that channel, if any, and resolved
//! into an `OccupancyOutcome`: re-render the notification, complete the request, or
//! retire it. Decisions are pure; `LfgService::handle_voice_update` applies them.

use serenity::all::{ChannelId, GuildId, UserId};

use crate::{
    data::RequestRegistry,
    error::{internal::InternalError, AppError},
    model::{
        embed::RequestEmbed,
        guild::GuildSnapshot,
        request::{LfgRequest, NotificationHandle},
        voice::{classify, VoiceChange},
    },
    service::render::{render_completion, render_request, RenderContext},
};

use super::LfgService;

/// What a single voice change means for the request bound to its channel.
#[derive(Debug, Clone, PartialEq)]
pub enum OccupancyOutcome {
    /// No request is bound to the channel.
    Unbound,
    /// The party still has room; refresh the notification.
    Update {
        handle: NotificationHandle,
        embed: RequestEmbed,
    },
    /// The party is full. The request has been removed from the registry.
    Complete {
        request: LfgRequest,
        notice: RequestEmbed,
    },
    /// The request ended without filling up (author left, channel gone). The
    /// request has been removed from the registry.
    Retire { request: LfgRequest },
}

/// Resolves one voice change against the registry.
///
/// Completed and retired requests are popped from the registry here; updates leave
/// it untouched.
///
/// # Arguments
/// - `registry` - The locked request registry
/// - `guild_id` - Guild the change happened in
/// - `guild` - Guild snapshot taken after the change
/// - `change` - The classified join or leave
/// - `member` - Member whose voice state changed
/// - `retire_on_author_leave` - Retire instead of recount when the author leaves
///
/// # Returns
/// - `Ok(OccupancyOutcome)` - The decision for this change
/// - `Err(InternalError::MissingNotification)` - An update targets a request that was
///   never displayed; the registry is unchanged
pub fn evaluate_change(
    registry: &mut RequestRegistry,
    guild_id: GuildId,
    guild: &GuildSnapshot,
    change: VoiceChange,
    member: UserId,
    retire_on_author_leave: bool,
) -> Result<OccupancyOutcome, InternalError> {
    let channel_id = change.channel_id();
    let Some(request) = registry
        .get_request_by_voice_channel(guild_id, channel_id)
        .cloned()
    else {
        return Ok(OccupancyOutcome::Unbound);
    };
    let author = request.author;

    if retire_on_author_leave && change == VoiceChange::Left(channel_id) && member == author {
        let request = registry.pop(guild_id, author).unwrap_or(request);
        return Ok(OccupancyOutcome::Retire { request });
    }

    let Some(channel) = guild.voice_channel(channel_id) else {
        tracing::warn!(
            "Voice channel {} bound to request of user {} is gone from guild {}",
            channel_id,
            author,
            guild_id
        );
        let request = registry.pop(guild_id, author).unwrap_or(request);
        return Ok(OccupancyOutcome::Retire { request });
    };

    let author_profile = guild.member(author);
    let ctx = RenderContext {
        request: &request,
        author: &author_profile,
        channel: &channel,
    };

    if request.is_complete(channel.occupancy()) {
        let notice = render_completion(&ctx);
        let request = registry.pop(guild_id, author).unwrap_or(request);
        return Ok(OccupancyOutcome::Complete { request, notice });
    }

    let handle = request
        .notification
        .ok_or(InternalError::MissingNotification {
            guild_id,
            user_id: author,
        })?;

    Ok(OccupancyOutcome::Update {
        handle,
        embed: render_request(&ctx),
    })
}

impl<'a> LfgService<'a> {
    /// Applies a member's voice state transition to the bound requests.
    ///
    /// A move between channels is handled as a leave of the old channel followed by a
    /// join of the new one. A failure while handling one change is logged and does not
    /// prevent handling the other.
    ///
    /// # Arguments
    /// - `guild` - Guild snapshot taken after the transition
    /// - `guild_id` - Guild the transition happened in
    /// - `member` - Member whose voice state changed
    /// - `before` - Channel the member was connected to, if any
    /// - `after` - Channel the member is connected to now, if any
    pub async fn handle_voice_update(
        &mut self,
        guild: &GuildSnapshot,
        guild_id: GuildId,
        member: UserId,
        before: Option<ChannelId>,
        after: Option<ChannelId>,
    ) {
        for change in classify(before, after) {
            let outcome = match evaluate_change(
                self.registry,
                guild_id,
                guild,
                change,
                member,
                self.retire_on_author_leave,
            ) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Dropping voice change {:?}: {}", change, e);
                    continue;
                }
            };

            if let Err(e) = self.apply_outcome(outcome).await {
                tracing::error!(
                    "Failed to apply voice change {:?} in guild {}: {}",
                    change,
                    guild_id,
                    e
                );
            }
        }
    }

    /// Carries out an occupancy decision through the notifier.
    ///
    /// # Returns
    /// - `Ok(())` - Decision applied, or a failed notification delete was logged
    /// - `Err(AppError)` - Editing the notification or posting the completion failed
    pub async fn apply_outcome(&self, outcome: OccupancyOutcome) -> Result<(), AppError> {
        match outcome {
            OccupancyOutcome::Unbound => {}
            OccupancyOutcome::Update { handle, embed } => {
                self.notifier.edit_notification(handle, &embed).await?;
            }
            OccupancyOutcome::Complete { request, notice } => {
                self.delete_notification_of(&request).await;
                self.notifier
                    .send_completion(request.text_channel, &notice)
                    .await?;

                tracing::info!(
                    "LFG request of user {} in guild {} completed",
                    request.author,
                    request.guild_id
                );
            }
            OccupancyOutcome::Retire { request } => {
                self.delete_notification_of(&request).await;

                tracing::info!(
                    "LFG request of user {} in guild {} retired",
                    request.author,
                    request.guild_id
                );
            }
        }

        Ok(())
    }

    async fn delete_notification_of(&self, request: &LfgRequest) {
        let Some(handle) = request.notification else {
            tracing::error!(
                "{}",
                InternalError::MissingNotification {
                    guild_id: request.guild_id,
                    user_id: request.author,
                }
            );
            return;
        };

        if let Err(e) = self.notifier.delete_notification(handle).await {
            tracing::warn!(
                "Failed to delete LFG notification {} in channel {}: {}",
                handle.message_id,
                handle.channel_id,
                e
            );
        }
    }
}
