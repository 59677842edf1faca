//! One-shot state transfer between views.
//!
//! Carries a value from the point it was produced to exactly one later
//! consumer. `put` replaces any undelivered value, so the slot always holds
//! the most recent result; `take` consumes it. A reader arriving with
//! nothing in the slot gets `None` and is expected to fall back to defaults.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct Handoff<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Handoff<T> {
    pub fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }

    /// Store a value, discarding any value not yet taken.
    pub fn put(&self, value: T) {
        *self.lock() = Some(value);
    }

    /// Remove and return the stored value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }

    /// Drop any undelivered value.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes() {
        let handoff = Handoff::new();
        handoff.put(42);
        assert_eq!(handoff.take(), Some(42));
        assert_eq!(handoff.take(), None);
    }

    #[test]
    fn test_put_replaces_undelivered_value() {
        let handoff = Handoff::new();
        handoff.put("older");
        handoff.put("newer");
        assert_eq!(handoff.take(), Some("newer"));
    }

    #[test]
    fn test_clear_discards() {
        let handoff = Handoff::new();
        handoff.put(1);
        handoff.clear();
        assert_eq!(handoff.take(), None);
    }
}
