//! In-memory `Notifier` that records every call for assertions.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Mutex,
};

use serenity::{
    all::{ChannelId, MessageId},
    async_trait,
};

use crate::{
    error::AppError,
    model::{embed::RequestEmbed, request::NotificationHandle},
};

use super::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub enum NotifierCall {
    Sent(NotificationHandle, RequestEmbed),
    Edited(NotificationHandle, RequestEmbed),
    Deleted(NotificationHandle),
    Completed(ChannelId, RequestEmbed),
}

#[derive(Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<NotifierCall>>,
    next_message_id: AtomicU64,
    fail_sends: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `send_notification` fail.
    pub fn failing_sends(self) -> Self {
        self.fail_sends.store(true, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<NotifierCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: NotifierCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_notification(
        &self,
        channel_id: ChannelId,
        embed: &RequestEmbed,
    ) -> Result<NotificationHandle, AppError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(AppError::PermissionDenied("Missing Access".to_string()));
        }

        let id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1;
        let handle = NotificationHandle {
            channel_id,
            message_id: MessageId::new(id),
        };
        self.record(NotifierCall::Sent(handle, embed.clone()));

        Ok(handle)
    }

    async fn edit_notification(
        &self,
        handle: NotificationHandle,
        embed: &RequestEmbed,
    ) -> Result<(), AppError> {
        self.record(NotifierCall::Edited(handle, embed.clone()));
        Ok(())
    }

    async fn delete_notification(&self, handle: NotificationHandle) -> Result<(), AppError> {
        self.record(NotifierCall::Deleted(handle));
        Ok(())
    }

    async fn send_completion(
        &self,
        channel_id: ChannelId,
        embed: &RequestEmbed,
    ) -> Result<(), AppError> {
        self.record(NotifierCall::Completed(channel_id, embed.clone()));
        Ok(())
    }
}
