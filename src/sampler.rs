//! Periodic sampling of the analog inputs.
//!
//! Each [`PeriodicSampler`] owns one ADC channel and is driven by its own
//! hardware timer. The timer interrupt calls [`PeriodicSampler::on_timer`],
//! which publishes a [`Sample`] into a [`SampleChannel`] that the poll loop
//! reads whenever it likes.

use crate::shared::SharedCell;
use crate::types::ConfigError;

/// Default sampling frequency in hertz.
pub const DEFAULT_SAMPLING_HZ: f32 = 10.0;

/// Trait for abstracting an analog input pin.
///
/// Implement this over your ADC. Handle conversion errors internally; the
/// sampler expects a reading on every call.
pub trait AnalogInput {
    /// Reads the input as a fraction of the reference voltage, nominally 0.0-1.0.
    fn read_normalized(&mut self) -> f32;
}

/// One reading, in both normalized and volt-scaled form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Fraction of full scale.
    pub normalized: f32,
    /// `normalized` multiplied by the channel's full-scale voltage.
    pub scaled: f32,
}

/// Latest sample for one input, shared between the sampler interrupt and the
/// poll loop. Both fields are published together.
pub struct SampleChannel {
    latest: SharedCell<Sample>,
}

impl SampleChannel {
    /// Creates a channel reading zero.
    pub const fn new() -> Self {
        Self {
            latest: SharedCell::new(Sample {
                normalized: 0.0,
                scaled: 0.0,
            }),
        }
    }

    /// Publishes a new sample.
    pub fn publish(&self, sample: Sample) {
        self.latest.set(sample);
    }

    /// Returns the most recent sample.
    pub fn latest(&self) -> Sample {
        self.latest.get()
    }

    /// Returns the most recent normalized reading.
    pub fn normalized(&self) -> f32 {
        self.latest().normalized
    }

    /// Returns the most recent scaled reading.
    pub fn scaled(&self) -> f32 {
        self.latest().scaled
    }
}

impl Default for SampleChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated sampler settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    full_scale_volts: f32,
    frequency_hz: f32,
}

impl SamplerConfig {
    /// Creates a config, rejecting non-positive or non-finite values.
    pub fn new(full_scale_volts: f32, frequency_hz: f32) -> Result<Self, ConfigError> {
        if !(full_scale_volts.is_finite() && full_scale_volts > 0.0) {
            return Err(ConfigError::InvalidFullScale);
        }
        if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
            return Err(ConfigError::InvalidSamplingFrequency);
        }
        Ok(Self {
            full_scale_volts,
            frequency_hz,
        })
    }

    /// Voltage corresponding to a normalized reading of 1.0.
    pub fn full_scale_volts(&self) -> f32 {
        self.full_scale_volts
    }

    /// Sampling frequency in hertz.
    pub fn frequency_hz(&self) -> f32 {
        self.frequency_hz
    }

    /// Sampling period in milliseconds, rounded to the nearest millisecond.
    pub fn period_millis(&self) -> u32 {
        (1_000.0 / self.frequency_hz + 0.5) as u32
    }
}

/// Samples one analog input into a [`SampleChannel`] at a fixed rate.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared channel (usually `'static`)
/// * `A` - Analog input implementation
pub struct PeriodicSampler<'a, A: AnalogInput> {
    input: A,
    channel: &'a SampleChannel,
    config: SamplerConfig,
    sampling: bool,
}

impl<'a, A: AnalogInput> PeriodicSampler<'a, A> {
    /// Creates a stopped sampler.
    pub fn new(input: A, channel: &'a SampleChannel, config: SamplerConfig) -> Self {
        Self {
            input,
            channel,
            config,
            sampling: false,
        }
    }

    /// Enables sampling. Arm the hardware timer with [`period_millis`](Self::period_millis).
    /// Calling again while sampling has no effect.
    pub fn start_sampling(&mut self) {
        if !self.sampling {
            debug!("sampler start, period {} ms", self.config.period_millis());
            self.sampling = true;
        }
    }

    /// Disables sampling. The channel keeps its last sample.
    /// Calling again while stopped has no effect.
    pub fn stop_sampling(&mut self) {
        if self.sampling {
            debug!("sampler stop");
            self.sampling = false;
        }
    }

    /// Returns true while sampling is enabled.
    pub fn is_sampling(&self) -> bool {
        self.sampling
    }

    /// Timer callback: one read, one multiply, one publish. No-op while stopped.
    pub fn on_timer(&mut self) {
        if !self.sampling {
            return;
        }
        let normalized = self.input.read_normalized();
        self.channel.publish(Sample {
            normalized,
            scaled: normalized * self.config.full_scale_volts,
        });
    }

    /// Timer period for this sampler in milliseconds.
    pub fn period_millis(&self) -> u32 {
        self.config.period_millis()
    }

    /// Returns the sampler's configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }
}
