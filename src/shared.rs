//! Cells for state shared between interrupt handlers and the poll loop.
//!
//! Every access runs inside a critical section, so a reader never observes a
//! half-written multi-field value. Both cells are `Sync` and meant to live in
//! `static`s:
//!
//! ```
//! use mode_clock::shared::{Mailbox, SharedCell};
//!
//! static LATEST: SharedCell<u32> = SharedCell::new(0);
//! static PENDING: Mailbox<u8> = Mailbox::new();
//!
//! LATEST.set(7);
//! PENDING.post(1);
//! assert_eq!(LATEST.get(), 7);
//! assert_eq!(PENDING.take(), Some(1));
//! assert_eq!(PENDING.take(), None);
//! ```

use core::cell::Cell;
use critical_section::Mutex;

/// Latest-value cell. Readers see the most recent write; reads do not consume.
pub struct SharedCell<T: Copy> {
    inner: Mutex<Cell<T>>,
}

impl<T: Copy> SharedCell<T> {
    /// Creates a cell holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(Cell::new(value)),
        }
    }

    /// Returns a snapshot of the current value.
    pub fn get(&self) -> T {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Replaces the current value.
    pub fn set(&self, value: T) {
        critical_section::with(|cs| self.inner.borrow(cs).set(value));
    }

    /// Read-modify-write in a single critical section.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut value = cell.get();
            f(&mut value);
            cell.set(value);
        });
    }
}

/// Single-slot mailbox with overwrite semantics.
///
/// A post replaces whatever is pending; `take` empties the slot. Nothing queues.
pub struct Mailbox<T: Copy> {
    slot: Mutex<Cell<Option<T>>>,
}

impl<T: Copy> Mailbox<T> {
    /// Creates an empty mailbox.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Posts a value, dropping any value not yet taken.
    pub fn post(&self, value: T) {
        critical_section::with(|cs| self.slot.borrow(cs).set(Some(value)));
    }

    /// Takes the pending value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// Returns true if a value is waiting.
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).get().is_some())
    }
}

impl<T: Copy> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
