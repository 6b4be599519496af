//! Mode controller configuration.

use crate::time::TimeDuration;
use crate::types::ConfigError;

/// Default interval between poll loop iterations.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default full-scale voltage of the hours channel.
pub const DEFAULT_HOURS_FULL_SCALE: f32 = 23.0;

/// Default full-scale voltage of the minutes channel.
pub const DEFAULT_MINUTES_FULL_SCALE: f32 = 60.0;

/// Validated settings for a [`ModeController`](crate::ModeController).
///
/// The full-scale voltages here must equal the `full_scale_volts` of the
/// [`SamplerConfig`](crate::SamplerConfig) feeding each channel. The controller
/// divides the channel's scaled reading by these values, so a mismatch skews
/// the dial: a 3.3 V sampler read against the 23 V default never gets past
/// hour 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig<D: TimeDuration> {
    poll_interval: D,
    hours_full_scale: f32,
    minutes_full_scale: f32,
}

impl<D: TimeDuration> ControllerConfig<D> {
    /// Creates a new config builder with default values.
    pub fn builder() -> ControllerConfigBuilder<D> {
        ControllerConfigBuilder::new()
    }

    /// Delay the controller asks for between polls.
    pub fn poll_interval(&self) -> D {
        self.poll_interval
    }

    /// Scaled reading that maps to a full turn of the hours dial.
    pub fn hours_full_scale(&self) -> f32 {
        self.hours_full_scale
    }

    /// Scaled reading that maps to a full turn of the minutes dial.
    pub fn minutes_full_scale(&self) -> f32 {
        self.minutes_full_scale
    }
}

impl<D: TimeDuration> Default for ControllerConfig<D> {
    fn default() -> Self {
        Self {
            poll_interval: D::from_millis(DEFAULT_POLL_INTERVAL_MS),
            hours_full_scale: DEFAULT_HOURS_FULL_SCALE,
            minutes_full_scale: DEFAULT_MINUTES_FULL_SCALE,
        }
    }
}

/// Builder for [`ControllerConfig`].
#[derive(Debug)]
pub struct ControllerConfigBuilder<D: TimeDuration> {
    config: ControllerConfig<D>,
}

impl<D: TimeDuration> ControllerConfigBuilder<D> {
    /// Creates a builder holding the defaults.
    pub fn new() -> Self {
        Self {
            config: ControllerConfig::default(),
        }
    }

    /// Sets the poll interval. Default is 100 ms.
    pub fn poll_interval(mut self, interval: D) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Sets the full-scale voltage of the hours channel. Default is 23 V.
    pub fn hours_full_scale(mut self, volts: f32) -> Self {
        self.config.hours_full_scale = volts;
        self
    }

    /// Sets the full-scale voltage of the minutes channel. Default is 60 V.
    pub fn minutes_full_scale(mut self, volts: f32) -> Self {
        self.config.minutes_full_scale = volts;
        self
    }

    /// Validates and returns the config.
    ///
    /// # Errors
    /// * `ZeroPollInterval` - Poll interval is zero
    /// * `InvalidFullScale` - A full-scale voltage is not a positive finite number
    pub fn build(self) -> Result<ControllerConfig<D>, ConfigError> {
        if self.config.poll_interval.as_millis() == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        for volts in [self.config.hours_full_scale, self.config.minutes_full_scale] {
            if !(volts.is_finite() && volts > 0.0) {
                return Err(ConfigError::InvalidFullScale);
            }
        }

        Ok(self.config)
    }
}

impl<D: TimeDuration> Default for ControllerConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
