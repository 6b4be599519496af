//! Integration tests for the interrupt-side services and poll cadence

mod common;
use common::*;

use mode_clock::{
    AnalogInput, ButtonEvent, ConfigError, ControllerConfig, InputEdges, PeriodicSampler,
    PollCadence, RisingEdge, SampleChannel, SamplerConfig, StopwatchAction, Stopwatch,
    TimeDuration,
};
use std::cell::Cell;

/// ADC stand-in whose reading the test can change between timer firings
struct KnobInput<'a>(&'a Cell<f32>);

impl AnalogInput for KnobInput<'_> {
    fn read_normalized(&mut self) -> f32 {
        self.0.get()
    }
}

#[test]
fn samplers_publish_to_their_own_channels() {
    let hours = SampleChannel::new();
    let minutes = SampleChannel::new();
    let knob_a = Cell::new(0.25);
    let knob_b = Cell::new(0.75);

    let mut sampler_a = PeriodicSampler::new(
        KnobInput(&knob_a),
        &hours,
        SamplerConfig::new(23.0, 10.0).unwrap(),
    );
    let mut sampler_b = PeriodicSampler::new(
        KnobInput(&knob_b),
        &minutes,
        SamplerConfig::new(60.0, 10.0).unwrap(),
    );
    sampler_a.start_sampling();
    sampler_b.start_sampling();

    sampler_a.on_timer();
    assert_eq!(hours.normalized(), 0.25);
    assert_eq!(hours.scaled(), 5.75);
    assert_eq!(minutes.scaled(), 0.0);

    sampler_b.on_timer();
    assert_eq!(minutes.scaled(), 45.0);
    assert_eq!(hours.scaled(), 5.75);
}

#[test]
fn stopped_sampler_keeps_last_sample() {
    let channel = SampleChannel::new();
    let knob = Cell::new(0.5);
    let mut sampler =
        PeriodicSampler::new(KnobInput(&knob), &channel, SamplerConfig::new(10.0, 10.0).unwrap());

    sampler.start_sampling();
    sampler.on_timer();
    sampler.stop_sampling();

    knob.set(0.9);
    sampler.on_timer();
    assert_eq!(channel.scaled(), 5.0);
    assert_eq!(sampler.period_millis(), 100);
}

#[test]
fn sampler_feeds_set_time_mode() {
    let rig = Rig::new();
    let knob = Cell::new(0.5);
    let mut minutes_sampler = PeriodicSampler::new(
        KnobInput(&knob),
        &rig.minutes,
        SamplerConfig::new(60.0, 10.0).unwrap(),
    );
    let mut controller = rig.controller();

    minutes_sampler.start_sampling();
    minutes_sampler.on_timer();
    controller.poll();

    assert_eq!(controller.display().last_text(), Some("Set Time: 00:30"));
}

#[test]
fn matching_full_scale_dials_whole_range() {
    let rig = Rig::new();
    let hours_knob = Cell::new(0.52);
    let minutes_knob = Cell::new(0.51);
    let sampler_config = SamplerConfig::new(3.3, 10.0).unwrap();
    let mut hours_sampler =
        PeriodicSampler::new(KnobInput(&hours_knob), &rig.hours, sampler_config);
    let mut minutes_sampler =
        PeriodicSampler::new(KnobInput(&minutes_knob), &rig.minutes, sampler_config);
    let config = ControllerConfig::builder()
        .hours_full_scale(sampler_config.full_scale_volts())
        .minutes_full_scale(sampler_config.full_scale_volts())
        .build()
        .unwrap();
    let mut controller = rig.controller_with(config);

    hours_sampler.start_sampling();
    minutes_sampler.start_sampling();
    hours_sampler.on_timer();
    minutes_sampler.on_timer();
    controller.poll();

    assert_eq!(controller.display().last_text(), Some("Set Time: 12:30"));
}

#[test]
fn edges_drain_once_per_button() {
    let edges = InputEdges::new();
    edges.on_rising_edge(ButtonEvent::Previous);
    edges.on_rising_edge(ButtonEvent::Previous);
    edges.on_rising_edge(ButtonEvent::Next);

    assert!(edges.take(ButtonEvent::Next));
    assert!(!edges.take(ButtonEvent::Next));
    assert_eq!(edges.drain().as_slice(), &[ButtonEvent::Previous]);
}

#[test]
fn level_sampling_board_posts_edges() {
    let edges = InputEdges::new();
    let mut confirm = RisingEdge::new();

    for level in [false, true, true, true, false] {
        if confirm.update(level) {
            edges.on_rising_edge(ButtonEvent::Confirm);
        }
    }
    assert_eq!(edges.drain().as_slice(), &[ButtonEvent::Confirm]);
}

#[test]
fn stopwatch_actions_round_trip() {
    let time = MockTimeSource::new();
    let mut stopwatch: Stopwatch<'_, TestInstant, MockTimeSource> = Stopwatch::new(&time);

    stopwatch.handle_action(StopwatchAction::Start);
    time.advance_secs(42);
    stopwatch.handle_action(StopwatchAction::Stop);
    assert_eq!(stopwatch.elapsed_seconds(), 42);

    stopwatch.handle_action(StopwatchAction::Start);
    time.advance_secs(5);
    assert_eq!(stopwatch.elapsed_seconds(), 47);

    stopwatch.handle_action(StopwatchAction::Reset);
    assert_eq!(stopwatch.elapsed(), TestDuration::ZERO);
}

#[test]
fn cadence_enforces_minimum_interval() {
    let time = MockTimeSource::new();
    let mut cadence: PollCadence<'_, TestInstant, MockTimeSource> =
        PollCadence::new(&time, TestDuration(100)).unwrap();

    assert!(cadence.is_due());
    assert!(!cadence.is_due());

    time.advance(TestDuration(60));
    assert!(!cadence.is_due());
    assert_eq!(cadence.remaining(), TestDuration(40));

    time.advance(TestDuration(40));
    assert_eq!(cadence.remaining(), TestDuration::ZERO);
    assert!(cadence.is_due());
    assert!(!cadence.is_due());
    assert_eq!(cadence.interval(), TestDuration(100));
}

#[test]
fn zero_intervals_are_rejected() {
    let time = MockTimeSource::new();
    assert!(matches!(
        PollCadence::<TestInstant, MockTimeSource>::new(&time, TestDuration(0)),
        Err(ConfigError::ZeroPollInterval)
    ));
    assert_eq!(
        ControllerConfig::<TestDuration>::builder()
            .poll_interval(TestDuration(0))
            .build(),
        Err(ConfigError::ZeroPollInterval)
    );
}

#[test]
fn config_builder_validates_full_scale() {
    let result = ControllerConfig::<TestDuration>::builder()
        .hours_full_scale(-1.0)
        .build();
    assert_eq!(result, Err(ConfigError::InvalidFullScale));

    let config = ControllerConfig::<TestDuration>::builder()
        .poll_interval(TestDuration(150))
        .hours_full_scale(3.3)
        .minutes_full_scale(3.3)
        .build()
        .unwrap();
    assert_eq!(config.poll_interval(), TestDuration(150));
    assert_eq!(config.hours_full_scale(), 3.3);
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::ZeroPollInterval.to_string(),
        "poll interval must be non-zero"
    );
}
