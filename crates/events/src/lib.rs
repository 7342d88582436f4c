//! Domain events.
//!
//! Aggregates record events describing what happened; callers drain them
//! after a successful operation.

pub mod event;
pub mod pending;

pub use event::Event;
pub use pending::PendingEvents;
