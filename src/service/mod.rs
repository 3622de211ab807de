//! Business logic of the LFG bot.
//!
//! - `lfg` - Request lifecycle: validation, creation, occupancy updates and removal
//! - `render` - Affiliation-based embed rendering and template substitution
//! - `notifier` - Posting, editing and deleting notifications on Discord

pub mod lfg;
pub mod notifier;
pub mod render;
