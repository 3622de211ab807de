use chrono::{DateTime, Utc};
use serenity::all::ChannelId;

/// A single name/value row of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Display payload for an LFG notification or completion notice.
///
/// Kept independent of serenity builders so rendering can be asserted on directly;
/// `service::notifier` converts it into a `CreateEmbed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEmbed {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub voice_channel: ChannelId,
    pub fields: Vec<EmbedField>,
    /// Runner role names of the author, prefix stripped.
    pub runners: Vec<String>,
    /// Playstyle role names of the author, prefix stripped.
    pub playstyles: Vec<String>,
    /// Footer text, if any.
    pub footer: Option<String>,
    /// Timestamp shown next to the footer, if any.
    pub timestamp: Option<DateTime<Utc>>,
}
