use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Ready, VoiceState};
use serenity::async_trait;

use crate::{config::Config, data::SharedRegistry};

pub mod interaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub registry: SharedRegistry,
}

impl Handler {
    pub fn new(config: Arc<Config>, registry: SharedRegistry) -> Self {
        Self { config, registry }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self, ctx, old, new).await;
    }
}
