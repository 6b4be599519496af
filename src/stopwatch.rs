//! Elapsed-time counter driven by explicit commands.
//!
//! Provides [`Stopwatch`], which measures time against an injected
//! [`TimeSource`] and only changes state when told to. It has no periodic
//! source of its own.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Commands accepted by a [`Stopwatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchAction {
    /// Start or resume counting.
    Start,
    /// Freeze the count.
    Stop,
    /// Clear the count to zero.
    Reset,
}

/// Start/stop/reset stopwatch.
///
/// Time accumulates across running segments. While stopped, [`elapsed`](Self::elapsed)
/// is frozen; while running it never decreases.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Stopwatch<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    accumulated_millis: u64,
    running_since: Option<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Stopwatch<'t, I, T> {
    /// Creates a stopped stopwatch reading zero.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            accumulated_millis: 0,
            running_since: None,
        }
    }

    /// Dispatches a [`StopwatchAction`].
    pub fn handle_action(&mut self, action: StopwatchAction) {
        match action {
            StopwatchAction::Start => self.start(),
            StopwatchAction::Stop => self.stop(),
            StopwatchAction::Reset => self.reset(),
        }
    }

    /// Starts counting. No effect if already running.
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(self.time_source.now());
        }
    }

    /// Stops counting and folds the current segment into the total.
    /// No effect if already stopped.
    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            let segment = self.time_source.now().duration_since(since);
            self.accumulated_millis = self.accumulated_millis.saturating_add(segment.as_millis());
        }
    }

    /// Clears the count. A running stopwatch keeps running from zero.
    pub fn reset(&mut self) {
        self.accumulated_millis = 0;
        if self.running_since.is_some() {
            self.running_since = Some(self.time_source.now());
        }
    }

    /// Returns true while counting.
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Total elapsed time across all running segments.
    pub fn elapsed(&self) -> I::Duration {
        I::Duration::from_millis(self.elapsed_millis())
    }

    /// Whole seconds elapsed.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    fn elapsed_millis(&self) -> u64 {
        let current = self
            .running_since
            .map(|since| self.time_source.now().duration_since(since).as_millis())
            .unwrap_or(0);
        self.accumulated_millis.saturating_add(current)
    }
}
