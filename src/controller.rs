//! The mode state machine and its poll loop body.
//!
//! Provides [`ModeController`], which owns the active [`Mode`], the stopwatch and
//! the set-time edit, and drives the display and indicator collaborators.
//! Interrupt handlers never touch the controller: they write into the cells
//! bundled in [`SharedState`], which the controller reads once per poll.

use crate::clock::WallClock;
use crate::config::ControllerConfig;
use crate::display::{self, DebugSink, Display, TITLE_POS, VALUE_POS};
use crate::indicator::Indicator;
use crate::input::InputEdges;
use crate::sampler::SampleChannel;
use crate::stopwatch::Stopwatch;
use crate::time::{TimeInstant, TimeSource};
#[cfg(feature = "defmt")]
use crate::time::TimeDuration;
use crate::types::{ButtonEvent, Mode, TimeEdit};

/// References to the cells written from interrupt context.
///
/// These normally point at `static`s:
///
/// ```
/// use mode_clock::{InputEdges, SampleChannel, SharedState, WallClock};
///
/// static CLOCK: WallClock = WallClock::new();
/// static HOURS: SampleChannel = SampleChannel::new();
/// static MINUTES: SampleChannel = SampleChannel::new();
/// static EDGES: InputEdges = InputEdges::new();
///
/// let shared = SharedState {
///     clock: &CLOCK,
///     hours: &HOURS,
///     minutes: &MINUTES,
///     edges: &EDGES,
/// };
/// # let _ = shared;
/// ```
#[derive(Clone, Copy)]
pub struct SharedState<'a> {
    /// Wall clock advanced by the tick interrupt.
    pub clock: &'a WallClock,
    /// Channel that dials the hours in set-time mode.
    pub hours: &'a SampleChannel,
    /// Channel that dials the minutes in set-time mode.
    pub minutes: &'a SampleChannel,
    /// Button latches set by the pin interrupts.
    pub edges: &'a InputEdges,
}

/// Four-mode controller for a clock/stopwatch device.
///
/// Call [`poll`](Self::poll) from the main loop. Each call consumes at most one
/// press per button, applies the transitions, then renders the active mode.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared cells and the time source
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `D` - Display implementation type
/// * `L` - Indicator implementation type
/// * `S` - Debug output implementation type
pub struct ModeController<'a, I, T, D, L, S>
where
    I: TimeInstant,
    T: TimeSource<I>,
    D: Display,
    L: Indicator,
    S: DebugSink,
{
    shared: SharedState<'a>,
    stopwatch: Stopwatch<'a, I, T>,
    display: D,
    indicator: L,
    debug_sink: S,
    config: ControllerConfig<I::Duration>,
    mode: Mode,
    entered: bool,
    pending: TimeEdit,
    previous: Option<TimeEdit>,
}

impl<'a, I, T, D, L, S> ModeController<'a, I, T, D, L, S>
where
    I: TimeInstant,
    T: TimeSource<I>,
    D: Display,
    L: Indicator,
    S: DebugSink,
{
    /// Creates a controller in [`Mode::SetTime`] with the indicator off.
    pub fn new(
        shared: SharedState<'a>,
        time_source: &'a T,
        display: D,
        mut indicator: L,
        debug_sink: S,
        config: ControllerConfig<I::Duration>,
    ) -> Self {
        indicator.turn_off();
        info!("mode controller ready, poll every {} ms", config.poll_interval().as_millis());

        Self {
            shared,
            stopwatch: Stopwatch::new(time_source),
            display,
            indicator,
            debug_sink,
            config,
            mode: Mode::SetTime,
            entered: true,
            pending: TimeEdit::default(),
            previous: None,
        }
    }

    /// Applies one button event.
    ///
    /// Runs the confirm action of the current mode, stops the stopwatch when
    /// navigation interrupts it, and marks the target mode as freshly entered.
    pub fn handle_event(&mut self, event: ButtonEvent) {
        let from = self.mode;
        let to = from.on_event(event);

        match (from, event) {
            (Mode::SetTime, ButtonEvent::Confirm) => {
                self.shared.clock.set(self.pending.to_wall_time());
            }
            (Mode::StopwatchPaused, ButtonEvent::Confirm) => self.stopwatch.start(),
            (Mode::StopwatchRunning, _) => self.stopwatch.stop(),
            _ => {}
        }

        if to != from || event != ButtonEvent::Confirm {
            self.entered = true;
        }
        if to != from {
            debug!("mode {} -> {}", from, to);
        }
        self.mode = to;
    }

    /// Runs one poll loop iteration and returns the delay until the next one.
    pub fn poll(&mut self) -> I::Duration {
        for event in self.shared.edges.drain() {
            self.handle_event(event);
        }

        self.debug_sink.emit(self.mode.name());

        let entered = core::mem::take(&mut self.entered);
        match self.mode {
            Mode::SetTime => self.poll_set_time(entered),
            Mode::DisplayCurrentTime => self.poll_display_time(),
            Mode::StopwatchRunning => self.poll_stopwatch_running(entered),
            Mode::StopwatchPaused => self.poll_stopwatch_paused(entered),
        }
        self.indicator.set(self.mode == Mode::StopwatchRunning);

        self.config.poll_interval()
    }

    fn poll_set_time(&mut self, entered: bool) {
        if entered {
            self.pending = TimeEdit::default();
            self.previous = None;
        }

        let current = TimeEdit::from_samples(
            self.shared.hours.scaled(),
            self.config.hours_full_scale(),
            self.shared.minutes.scaled(),
            self.config.minutes_full_scale(),
        );

        if self.previous != Some(current) {
            self.pending = current;
            self.display.clear();
            self.display
                .text(TITLE_POS.0, TITLE_POS.1, &display::set_time_line(current));
            self.previous = Some(current);
        }
    }

    fn poll_display_time(&mut self) {
        let now = self.shared.clock.now();
        self.display.clear();
        self.display
            .text(TITLE_POS.0, TITLE_POS.1, &display::clock_line(now));
    }

    fn poll_stopwatch_running(&mut self, entered: bool) {
        if entered {
            self.display.clear();
            self.display.text(TITLE_POS.0, TITLE_POS.1, "Stopwatch Running");
            self.stopwatch.start();
        }
        self.draw_elapsed();
    }

    fn poll_stopwatch_paused(&mut self, entered: bool) {
        if entered {
            self.display.clear();
            self.display.text(TITLE_POS.0, TITLE_POS.1, "Stopwatch Paused");
            self.draw_elapsed();
        }
    }

    fn draw_elapsed(&mut self) {
        let line = display::elapsed_line(self.stopwatch.elapsed_seconds());
        self.display.text(VALUE_POS.0, VALUE_POS.1, &line);
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true until the next poll runs the active mode's entry setup.
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Hours and minutes that a confirm in set-time mode would commit.
    pub fn pending_edit(&self) -> TimeEdit {
        self.pending
    }

    /// Returns the stopwatch.
    pub fn stopwatch(&self) -> &Stopwatch<'a, I, T> {
        &self.stopwatch
    }

    /// Returns a mutable reference to the stopwatch, e.g. to reset it.
    pub fn stopwatch_mut(&mut self) -> &mut Stopwatch<'a, I, T> {
        &mut self.stopwatch
    }

    /// Returns the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the indicator.
    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Returns the debug output.
    pub fn debug_sink(&self) -> &S {
        &self.debug_sink
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ControllerConfig<I::Duration> {
        &self.config
    }
}
