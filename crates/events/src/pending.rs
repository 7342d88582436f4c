//! In-memory buffer of events recorded by an aggregate but not yet drained.

use crate::event::Event;

/// Ordered, append-only buffer of not-yet-drained events.
///
/// - No IO / no locking (owned by a single aggregate)
/// - Drain order equals record order
#[derive(Debug, Clone)]
pub struct PendingEvents<E> {
    events: Vec<E>,
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: Event> PendingEvents<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Events recorded since the last drain, oldest first.
    pub fn peek(&self) -> &[E] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
