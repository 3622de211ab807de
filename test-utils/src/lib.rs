//! LFG Bot Test Utils
//!
//! Shared factories for unit tests of the LFG bot. The bot works on serenity's cached
//! guild state, so tests need realistic `Guild`, `GuildChannel`, `Member`, `Role` and
//! `VoiceState` values. The factories build them by deserializing JSON shaped like
//! Discord's gateway payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_voice_state};
//!
//! let mut guild = create_test_guild(123456789, "Test Guild");
//! let state = create_test_voice_state(123456789, 10, Some(501));
//! guild.voice_states.insert(state.user_id, state);
//! ```

pub mod serenity;
