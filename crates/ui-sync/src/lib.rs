//! UI State Synchronization Primitives
//!
//! The three store mechanisms shared across the Dayflow frontend:
//! - recency: bounded, deduplicated most-recently-used list
//! - modal: name-keyed modal visibility + payload registry
//! - inflight: pending-mutation guard for optimistic updates
//!
//! No UI or IPC dependencies. Each structure is plain owned state so a
//! fresh instance can be constructed per test.

mod inflight;
mod modal;
mod recency;

pub use inflight::InFlight;
pub use modal::{ModalKey, ModalRegistry, ModalSlot};
pub use recency::{Keyed, Recency};
