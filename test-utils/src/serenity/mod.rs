//! Test factories for creating Serenity API objects.
//!
//! Each factory deserializes a JSON payload with sensible defaults, customizing only
//! the fields the bot reads. Every payload carries its `guild_id` so the objects look
//! like they came from the gateway cache.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Guild with empty channel, member, role and voice maps
//! - `channel::create_test_channel` - Guild channel of any type
//! - `member::create_test_member` - Guild member with nickname and roles
//! - `role::create_test_role` - Guild role
//! - `voice_state::create_test_voice_state` - Member voice connection

pub mod channel;
pub mod guild;
pub mod member;
pub mod role;
pub mod voice_state;

pub use channel::create_test_channel;
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
pub use voice_state::create_test_voice_state;
