//! Delivery of LFG notifications to Discord.
//!
//! `Notifier` is the seam between the LFG service and Discord's message API. The
//! production `DiscordNotifier` posts, edits and deletes messages through serenity's
//! HTTP client; tests substitute a recording fake.

pub mod discord;
#[cfg(test)]
pub mod recording;

use serenity::{all::ChannelId, async_trait};

use crate::{
    error::AppError,
    model::{embed::RequestEmbed, request::NotificationHandle},
};

pub use discord::DiscordNotifier;

/// Message operations the LFG service needs.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Posts a request's status notification.
    ///
    /// # Returns
    /// - `Ok(NotificationHandle)` - Where the message was posted
    /// - `Err(AppError::DiscordErr)` - Discord rejected the message
    async fn send_notification(
        &self,
        channel_id: ChannelId,
        embed: &RequestEmbed,
    ) -> Result<NotificationHandle, AppError>;

    /// Replaces the embed of a posted notification.
    async fn edit_notification(
        &self,
        handle: NotificationHandle,
        embed: &RequestEmbed,
    ) -> Result<(), AppError>;

    async fn delete_notification(&self, handle: NotificationHandle) -> Result<(), AppError>;

    /// Posts the "group complete" notice as a new message.
    async fn send_completion(
        &self,
        channel_id: ChannelId,
        embed: &RequestEmbed,
    ) -> Result<(), AppError>;
}
