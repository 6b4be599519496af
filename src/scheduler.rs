//! Cooperative poll scheduling.
//!
//! Boards that can sleep simply wait for the delay returned by
//! [`ModeController::poll`](crate::ModeController::poll). Boards that spin in a
//! busy loop use [`PollCadence`] to run the controller no more often than the
//! configured interval.

use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::ConfigError;

/// Minimum-interval timer for a busy poll loop.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct PollCadence<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    interval: I::Duration,
    last_run: Option<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> PollCadence<'t, I, T> {
    /// Creates a cadence that is due immediately.
    pub fn new(time_source: &'t T, interval: I::Duration) -> Result<Self, ConfigError> {
        if interval.as_millis() == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(Self {
            time_source,
            interval,
            last_run: None,
        })
    }

    /// Returns true, and restarts the interval, once at least one interval has
    /// passed since the last time it returned true.
    pub fn is_due(&mut self) -> bool {
        let now = self.time_source.now();
        let due = match self.last_run {
            None => true,
            Some(last) => now.duration_since(last).as_millis() >= self.interval.as_millis(),
        };
        if due {
            self.last_run = Some(now);
        }
        due
    }

    /// Time left until the next run is due; zero when already due.
    pub fn remaining(&self) -> I::Duration {
        match self.last_run {
            None => I::Duration::ZERO,
            Some(last) => {
                let since = self.time_source.now().duration_since(last).as_millis();
                I::Duration::from_millis(self.interval.as_millis().saturating_sub(since))
            }
        }
    }

    /// The configured interval.
    pub fn interval(&self) -> I::Duration {
        self.interval
    }
}
