//! LFG request service.
//!
//! `LfgService` borrows the locked registry and a `Notifier` for the duration of a
//! single command or voice event. Decisions are made synchronously against a
//! `GuildSnapshot`, then applied through the notifier. The module is split by concern:
//! - `validation` - Pre-create checks for `/lfg`
//! - `creation` - Registering and posting new requests
//! - `occupancy` - Reacting to voice channel joins and leaves
//! - `deletion` - Moderator force-delete

pub mod creation;
pub mod deletion;
pub mod occupancy;
pub mod validation;

#[cfg(test)]
mod test;

use crate::{data::RequestRegistry, service::notifier::Notifier};

pub struct LfgService<'a> {
    registry: &'a mut RequestRegistry,
    notifier: &'a dyn Notifier,
    retire_on_author_leave: bool,
}

impl<'a> LfgService<'a> {
    /// Creates a new LfgService instance.
    ///
    /// # Arguments
    /// - `registry` - The locked request registry
    /// - `notifier` - Message delivery for notifications
    /// - `retire_on_author_leave` - Retire a request when its author leaves the channel
    pub fn new(
        registry: &'a mut RequestRegistry,
        notifier: &'a dyn Notifier,
        retire_on_author_leave: bool,
    ) -> Self {
        Self {
            registry,
            notifier,
            retire_on_author_leave,
        }
    }
}
