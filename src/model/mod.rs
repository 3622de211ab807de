//! Domain models for LFG requests and the guild state they depend on.
//!
//! These types are free of Discord I/O. The serenity cache is converted into a
//! `GuildSnapshot` at the edge (see `util::guild`) so request validation, occupancy
//! evaluation and rendering can run synchronously against plain data.

pub mod affiliation;
pub mod embed;
pub mod guild;
pub mod request;
pub mod voice;
