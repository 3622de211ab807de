use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage, Timestamp},
    async_trait,
    http::Http,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{embed::RequestEmbed, request::NotificationHandle},
};

use super::Notifier;

/// Converts a rendered payload into a serenity embed builder.
///
/// Runner and playstyle tags become inline fields, omitted when empty.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(AppError::InternalErr)` - Timestamp out of Discord's range
pub fn build_embed(embed: &RequestEmbed) -> Result<CreateEmbed, AppError> {
    let mut builder = CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .colour(embed.colour);

    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }

    if !embed.runners.is_empty() {
        builder = builder.field("Runners", embed.runners.join(", "), true);
    }
    if !embed.playstyles.is_empty() {
        builder = builder.field("Playstyle", embed.playstyles.join(", "), true);
    }

    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }

    if let Some(created_at) = embed.timestamp {
        let timestamp = Timestamp::from_unix_timestamp(created_at.timestamp()).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: created_at.timestamp(),
                reason: e.to_string(),
            }
        })?;
        builder = builder.timestamp(timestamp);
    }

    Ok(builder)
}

/// `Notifier` backed by serenity's HTTP client.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send_notification(
        &self,
        channel_id: ChannelId,
        embed: &RequestEmbed,
    ) -> Result<NotificationHandle, AppError> {
        let message = CreateMessage::new().embed(build_embed(embed)?);
        let posted = channel_id.send_message(&self.http, message).await?;

        tracing::debug!("Posted LFG notification {} in channel {}", posted.id, channel_id);

        Ok(NotificationHandle {
            channel_id,
            message_id: posted.id,
        })
    }

    async fn edit_notification(
        &self,
        handle: NotificationHandle,
        embed: &RequestEmbed,
    ) -> Result<(), AppError> {
        let edit_builder = EditMessage::new().embed(build_embed(embed)?);

        self.http
            .edit_message(handle.channel_id, handle.message_id, &edit_builder, vec![])
            .await?;

        tracing::debug!(
            "Updated LFG notification {} in channel {}",
            handle.message_id,
            handle.channel_id
        );

        Ok(())
    }

    async fn delete_notification(&self, handle: NotificationHandle) -> Result<(), AppError> {
        self.http
            .delete_message(handle.channel_id, handle.message_id, None)
            .await?;

        tracing::debug!(
            "Deleted LFG notification {} in channel {}",
            handle.message_id,
            handle.channel_id
        );

        Ok(())
    }

    async fn send_completion(
        &self,
        channel_id: ChannelId,
        embed: &RequestEmbed,
    ) -> Result<(), AppError> {
        let message = CreateMessage::new().embed(build_embed(embed)?);
        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}
