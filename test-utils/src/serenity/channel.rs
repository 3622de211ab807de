//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test Serenity GuildChannel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `kind` - Discord channel type (`0` text, `2` voice, `13` stage)
/// - `user_limit` - Voice user limit; `None` or `Some(0)` means unlimited
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    user_limit: Option<u32>,
) -> GuildChannel {
    let bitrate = if kind == 0 { None } else { Some(64000) };

    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "bitrate": bitrate,
        "user_limit": user_limit,
        "rtc_region": null,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
