//! Input edge sources for the three physical buttons.
//!
//! Pin interrupt handlers call [`InputEdges::on_rising_edge`]; the poll loop calls
//! [`InputEdges::drain`] once per iteration. Each button has a single pending
//! flag, so bounces within one poll period collapse into one event and a second
//! press before the drain is lost.

use crate::shared::Mailbox;
use crate::types::ButtonEvent;
use heapless::Vec;

/// Pending-event latches for the Next, Previous and Confirm buttons.
pub struct InputEdges {
    next: Mailbox<()>,
    previous: Mailbox<()>,
    confirm: Mailbox<()>,
}

impl InputEdges {
    /// Creates a set of latches with nothing pending.
    pub const fn new() -> Self {
        Self {
            next: Mailbox::new(),
            previous: Mailbox::new(),
            confirm: Mailbox::new(),
        }
    }

    fn latch(&self, event: ButtonEvent) -> &Mailbox<()> {
        match event {
            ButtonEvent::Next => &self.next,
            ButtonEvent::Previous => &self.previous,
            ButtonEvent::Confirm => &self.confirm,
        }
    }

    /// Latches a press. Call from the pin interrupt handler.
    pub fn on_rising_edge(&self, event: ButtonEvent) {
        self.latch(event).post(());
    }

    /// Consumes the pending press for one button.
    pub fn take(&self, event: ButtonEvent) -> bool {
        self.latch(event).take().is_some()
    }

    /// Consumes every pending press, at most one per button, ordered Next,
    /// Previous, Confirm.
    pub fn drain(&self) -> Vec<ButtonEvent, 3> {
        let mut events = Vec::new();
        for event in ButtonEvent::ALL {
            if self.take(event) {
                // capacity matches ButtonEvent::ALL
                let _ = events.push(event);
            }
        }
        events
    }
}

impl Default for InputEdges {
    fn default() -> Self {
        Self::new()
    }
}

/// Low-to-high transition detector for boards that sample button levels
/// instead of taking pin interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RisingEdge {
    high: bool,
}

impl RisingEdge {
    /// Creates a detector that assumes the input starts low.
    pub const fn new() -> Self {
        Self { high: false }
    }

    /// Feeds the current level; returns true on a rising edge.
    pub fn update(&mut self, level_high: bool) -> bool {
        let rose = level_high && !self.high;
        self.high = level_high;
        rose
    }
}
