//! In-memory storage for bot state.
//!
//! Active LFG requests live only in process memory and are lost on restart. The
//! registry is a plain data structure; callers share it through `SharedRegistry`,
//! whose single mutex serializes all command and voice event handling.

pub mod request;

pub use request::{RequestRegistry, SharedRegistry};

#[cfg(test)]
mod test;
