//! Creation of new LFG requests.

use serenity::all::{ChannelId, GuildId, UserId};

use crate::{
    error::AppError,
    model::{guild::GuildSnapshot, request::LfgRequest},
    service::render::{render_request, RenderContext},
};

use super::{validation::check_can_start_request, LfgService};

impl<'a> LfgService<'a> {
    /// Validates and opens a new request, posting its notification.
    ///
    /// The request is registered only once its notification has been posted, so every
    /// registered request carries a notification handle.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild's voice state and the invoker's profile
    /// - `guild_id` - Guild the command was invoked in
    /// - `user_id` - The invoking member
    /// - `text_channel` - Channel the notification is posted to
    /// - `players` - Raw `players` argument
    ///
    /// # Returns
    /// - `Ok(LfgRequest)` - The registered request
    /// - `Err(AppError::Rejected)` - A pre-create check failed
    /// - `Err(AppError::DiscordErr)` - Posting the notification failed; nothing registered
    pub async fn create_request(
        &mut self,
        guild: &GuildSnapshot,
        guild_id: GuildId,
        user_id: UserId,
        text_channel: ChannelId,
        players: i64,
    ) -> Result<LfgRequest, AppError> {
        let (looking_for, channel) = check_can_start_request(
            self.registry,
            guild_id,
            user_id,
            players,
            &guild.requester_voice(user_id),
        )?;

        let mut request =
            LfgRequest::new(guild_id, user_id, channel.id, text_channel, looking_for);
        let author = guild.member(user_id);
        let embed = render_request(&RenderContext {
            request: &request,
            author: &author,
            channel: &channel,
        });

        let handle = self
            .notifier
            .send_notification(text_channel, &embed)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    "Failed to post LFG notification for user {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
            })?;
        request.notification = Some(handle);

        self.registry.push(guild_id, user_id, request.clone());

        tracing::info!(
            "User {} opened LFG request for {} player(s) in voice channel {} (guild {})",
            user_id,
            looking_for.get(),
            channel.id,
            guild_id
        );

        Ok(request)
    }
}
