//! Timing traits for the stopwatch and the poll cadence.
//!
//! The controller never reads a hardware timer directly. Boards implement these
//! traits over whatever monotonic counter they have (SysTick, `embassy_time`,
//! a free-running TIM peripheral).

/// Source of monotonic time instants.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// A span of time with millisecond resolution.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Whole seconds contained in this duration, rounded down.
    fn as_secs(&self) -> u64 {
        self.as_millis() / 1_000
    }
}

/// A point in time produced by a [`TimeSource`].
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
