//! Wall clock advanced by a 1 Hz tick interrupt.

use crate::shared::SharedCell;
use crate::types::WallTime;

/// Period of the tick source in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1_000;

/// Hours/minutes/seconds counter shared with the tick interrupt.
///
/// [`tick`](Self::tick) is the interrupt callback. The poll loop reads with
/// [`now`](Self::now) and writes only when a set-time edit is committed. Both
/// writes are whole-value updates inside a critical section, so a tick can
/// never interleave with a commit.
///
/// ```
/// use mode_clock::{WallClock, WallTime};
///
/// static CLOCK: WallClock = WallClock::new();
///
/// CLOCK.set(WallTime::new(12, 59, 59));
/// CLOCK.tick();
/// assert_eq!(CLOCK.now(), WallTime::new(13, 0, 0));
/// ```
pub struct WallClock {
    time: SharedCell<WallTime>,
}

impl WallClock {
    /// Creates a clock reading midnight.
    pub const fn new() -> Self {
        Self::starting_at(WallTime::MIDNIGHT)
    }

    /// Creates a clock reading `time`, with each field wrapped into range.
    pub const fn starting_at(time: WallTime) -> Self {
        Self {
            time: SharedCell::new(WallTime::new(time.hours, time.minutes, time.seconds)),
        }
    }

    /// Advances one second. O(1); call from the tick interrupt.
    pub fn tick(&self) {
        self.time.update(WallTime::advance);
    }

    /// Overwrites the current time. Out-of-range fields wrap as in [`WallTime::new`].
    pub fn set(&self, time: WallTime) {
        self.time.set(WallTime::new(time.hours, time.minutes, time.seconds));
    }

    /// Returns a consistent snapshot of the current time.
    pub fn now(&self) -> WallTime {
        self.time.get()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}
