#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ModeController`**: The four-mode state machine, polled from the main loop
//! - **`Mode`** / **`ButtonEvent`**: Operating modes and the presses that move between them
//! - **`InputEdges`**: Pending-press latches written by button interrupts
//! - **`WallClock`**: Time of day, advanced by a 1 Hz tick interrupt
//! - **`PeriodicSampler`** / **`SampleChannel`**: Timer-driven analog sampling
//! - **`Stopwatch`**: Start/stop/reset elapsed-time counter
//! - **`Display`**, **`Indicator`**, **`DebugSink`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Interrupt handlers only ever write into the cells in [`shared`]; the controller
//! only ever reads them. Every access runs in a critical section, so provide a
//! `critical-section` implementation for your target (e.g. the
//! `critical-section-single-core` feature of `cortex-m`).

#[macro_use]
mod log;

pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod indicator;
pub mod input;
pub mod sampler;
pub mod scheduler;
pub mod shared;
pub mod stopwatch;
pub mod time;
pub mod types;

// Re-export Srgb from palette for indicator colours
pub use palette::Srgb;

pub use clock::{TICK_PERIOD_MS, WallClock};
pub use config::{ControllerConfig, ControllerConfigBuilder};
pub use controller::{ModeController, SharedState};
pub use display::{DebugSink, Display};
pub use indicator::{COLOR_OFF, Indicator, RUNNING_BLUE, RgbIndicator, RgbLed};
pub use input::{InputEdges, RisingEdge};
pub use sampler::{AnalogInput, PeriodicSampler, Sample, SampleChannel, SamplerConfig};
pub use scheduler::PollCadence;
pub use shared::{Mailbox, SharedCell};
pub use stopwatch::{Stopwatch, StopwatchAction};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonEvent, ConfigError, Mode, TimeEdit, WallTime};
