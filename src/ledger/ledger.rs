//! Ordered buffer of pending domain events.

use std::mem;

use super::DomainEvent;

/// Per-aggregate buffer of pending domain events.
///
/// Insertion order is preserved and duplicates are allowed. Not thread-safe
/// by design: exactly one execution context mutates one aggregate instance.
#[derive(Clone, Debug, Default)]
pub struct EventLedger {
    pending: Vec<DomainEvent>,
}

impl EventLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the pending sequence.
    pub fn raise(&mut self, event: DomainEvent) {
        self.pending.push(event);
    }

    /// Return the full ordered sequence and atomically clear it.
    ///
    /// A second `drain` before any new `raise` returns empty.
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        mem::take(&mut self.pending)
    }

    /// Whether any events are pending.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The pending events, in raise order.
    pub fn pending(&self) -> &[DomainEvent] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
