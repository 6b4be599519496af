//! Core value types shared between interrupt handlers and the poll loop.

/// Operating mode of the device. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Hours and minutes are dialled in from the two analog channels.
    #[default]
    SetTime,
    /// The wall clock is shown.
    DisplayCurrentTime,
    /// The stopwatch is counting.
    StopwatchRunning,
    /// The stopwatch is frozen.
    StopwatchPaused,
}

impl Mode {
    /// All modes in cyclic order.
    pub const ALL: [Mode; 4] = [
        Mode::SetTime,
        Mode::DisplayCurrentTime,
        Mode::StopwatchRunning,
        Mode::StopwatchPaused,
    ];

    /// Successor in cyclic order.
    pub fn successor(self) -> Self {
        match self {
            Mode::SetTime => Mode::DisplayCurrentTime,
            Mode::DisplayCurrentTime => Mode::StopwatchRunning,
            Mode::StopwatchRunning => Mode::StopwatchPaused,
            Mode::StopwatchPaused => Mode::SetTime,
        }
    }

    /// Predecessor in cyclic order.
    pub fn predecessor(self) -> Self {
        match self {
            Mode::SetTime => Mode::StopwatchPaused,
            Mode::DisplayCurrentTime => Mode::SetTime,
            Mode::StopwatchRunning => Mode::DisplayCurrentTime,
            Mode::StopwatchPaused => Mode::StopwatchRunning,
        }
    }

    /// Returns true for the two stopwatch modes.
    pub fn is_stopwatch(self) -> bool {
        matches!(self, Mode::StopwatchRunning | Mode::StopwatchPaused)
    }

    /// The mode reached when `event` arrives while in `self`.
    ///
    /// Total over every `(Mode, ButtonEvent)` pair. Navigating away from either
    /// stopwatch mode always lands in [`Mode::StopwatchPaused`].
    pub fn on_event(self, event: ButtonEvent) -> Self {
        match (self, event) {
            (m, ButtonEvent::Next | ButtonEvent::Previous) if m.is_stopwatch() => {
                Mode::StopwatchPaused
            }
            (m, ButtonEvent::Next) => m.successor(),
            (m, ButtonEvent::Previous) => m.predecessor(),
            (Mode::SetTime, ButtonEvent::Confirm) => Mode::DisplayCurrentTime,
            (Mode::DisplayCurrentTime, ButtonEvent::Confirm) => Mode::DisplayCurrentTime,
            (Mode::StopwatchRunning, ButtonEvent::Confirm) => Mode::StopwatchPaused,
            (Mode::StopwatchPaused, ButtonEvent::Confirm) => Mode::StopwatchRunning,
        }
    }

    /// Short label written to the debug output once per poll.
    pub fn name(self) -> &'static str {
        match self {
            Mode::SetTime => "SetTime",
            Mode::DisplayCurrentTime => "DisplayCurrentTime",
            Mode::StopwatchRunning => "StopwatchRunning",
            Mode::StopwatchPaused => "StopwatchPaused",
        }
    }
}

/// Logical button press posted by an input edge source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Advance to the next mode.
    Next,
    /// Go back to the previous mode.
    Previous,
    /// Mode-specific action (commit time, start/stop stopwatch).
    Confirm,
}

impl ButtonEvent {
    /// All events, in the order the poll loop drains them.
    pub const ALL: [ButtonEvent; 3] = [
        ButtonEvent::Next,
        ButtonEvent::Previous,
        ButtonEvent::Confirm,
    ];
}

/// Time of day on a 24 hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl WallTime {
    /// Midnight.
    pub const MIDNIGHT: WallTime = WallTime {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a time, wrapping each field into its range.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
        }
    }

    /// Advances by one second, carrying into minutes and hours.
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes >= 60 {
                self.minutes = 0;
                self.hours = (self.hours + 1) % 24;
            }
        }
    }
}

/// Hours and minutes being dialled in while in [`Mode::SetTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeEdit {
    pub hours: u8,
    pub minutes: u8,
}

impl TimeEdit {
    /// Derives an edit from two scaled analog readings.
    ///
    /// `hours = floor(v / full_scale * 24) mod 24`, likewise for minutes with 60.
    /// Readings that are negative or not finite count as zero, so the result is
    /// always a valid time. A reading at exactly full scale wraps to zero.
    pub fn from_samples(
        hours_volts: f32,
        hours_full_scale: f32,
        minutes_volts: f32,
        minutes_full_scale: f32,
    ) -> Self {
        Self {
            hours: dial(hours_volts, hours_full_scale, 24),
            minutes: dial(minutes_volts, minutes_full_scale, 60),
        }
    }

    /// The wall time this edit commits to. Seconds are forced to zero.
    pub fn to_wall_time(self) -> WallTime {
        WallTime::new(self.hours, self.minutes, 0)
    }
}

fn dial(volts: f32, full_scale: f32, divisions: u32) -> u8 {
    // float-to-int `as` saturates and maps NaN to 0
    let steps = (volts / full_scale * divisions as f32) as u32;
    (steps % divisions) as u8
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Poll interval of zero.
    ZeroPollInterval,

    /// Sampling frequency that is zero, negative or not finite.
    InvalidSamplingFrequency,

    /// Full-scale voltage that is zero, negative or not finite.
    InvalidFullScale,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPollInterval => write!(f, "poll interval must be non-zero"),
            ConfigError::InvalidSamplingFrequency => {
                write!(f, "sampling frequency must be a positive finite number")
            }
            ConfigError::InvalidFullScale => {
                write!(f, "full-scale voltage must be a positive finite number")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
