//! Discord gateway integration.
//!
//! The bot keeps a single `RequestRegistry` behind a tokio mutex inside its event
//! `Handler`. Slash commands and voice state updates lock it for the whole event, so
//! events are processed one at a time.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, channel and role cache
//! - `GUILD_VOICE_STATES` - Voice joins, leaves and moves
//! - `GUILD_MEMBERS` - Member nicknames and roles for rendering (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
