//! Moderator force-delete of requests.

use serenity::all::{GuildId, UserId};

use crate::model::request::LfgRequest;

use super::LfgService;

impl<'a> LfgService<'a> {
    /// Removes a user's active request and deletes its notification.
    ///
    /// A failed notification delete is logged; the request is removed regardless.
    ///
    /// # Returns
    /// - `Some(LfgRequest)` - The removed request
    /// - `None` - The user had no active request; the registry is unchanged
    pub async fn force_delete(&mut self, guild_id: GuildId, user_id: UserId) -> Option<LfgRequest> {
        let request = self.registry.pop(guild_id, user_id)?;

        if let Some(handle) = request.notification {
            if let Err(e) = self.notifier.delete_notification(handle).await {
                tracing::warn!(
                    "Failed to delete notification {} of force-deleted request: {}",
                    handle.message_id,
                    e
                );
            }
        }

        tracing::info!(
            "Force-deleted LFG request of user {} in guild {}",
            user_id,
            guild_id
        );

        Some(request)
    }
}
