//! Shared test infrastructure for mode-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use mode_clock::{
    ControllerConfig, DebugSink, Display, Indicator, InputEdges, ModeController, SampleChannel,
    SharedState, TimeDuration, TimeInstant, TimeSource, WallClock,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    /// Advance time by whole seconds
    pub fn advance_secs(&self, secs: u64) {
        self.advance(TestDuration(secs * 1_000));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Collaborators
// ============================================================================

/// One call made on the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Clear,
    Text(u16, u16, String),
}

/// Mock display that records every call
#[derive(Default)]
pub struct MockDisplay {
    ops: Vec<DisplayOp>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Text(_, _, text) => Some(text.as_str()),
                DisplayOp::Clear => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.texts().last().copied()
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Clear).count()
    }
}

impl Display for MockDisplay {
    fn clear(&mut self) {
        self.ops.push(DisplayOp::Clear);
    }

    fn text(&mut self, x: u16, y: u16, text: &str) {
        self.ops.push(DisplayOp::Text(x, y, text.to_string()));
    }
}

/// Mock indicator that counts state changes
#[derive(Default)]
pub struct MockIndicator {
    on: bool,
    switches: usize,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switches(&self) -> usize {
        self.switches
    }
}

impl Indicator for MockIndicator {
    fn turn_on(&mut self) {
        if !self.on {
            self.switches += 1;
        }
        self.on = true;
    }

    fn turn_off(&mut self) {
        if self.on {
            self.switches += 1;
        }
        self.on = false;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Mock debug output that keeps every line
#[derive(Default)]
pub struct MockDebug {
    lines: Vec<String>,
}

impl MockDebug {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DebugSink for MockDebug {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

// ============================================================================
// Test Rig
// ============================================================================

/// Shared cells a board would keep in statics
pub struct Rig {
    pub clock: WallClock,
    pub hours: SampleChannel,
    pub minutes: SampleChannel,
    pub edges: InputEdges,
    pub time: MockTimeSource,
}

pub type TestController<'a> =
    ModeController<'a, TestInstant, MockTimeSource, MockDisplay, MockIndicator, MockDebug>;

impl Rig {
    pub fn new() -> Self {
        Self {
            clock: WallClock::new(),
            hours: SampleChannel::new(),
            minutes: SampleChannel::new(),
            edges: InputEdges::new(),
            time: MockTimeSource::new(),
        }
    }

    pub fn shared(&self) -> SharedState<'_> {
        SharedState {
            clock: &self.clock,
            hours: &self.hours,
            minutes: &self.minutes,
            edges: &self.edges,
        }
    }

    pub fn controller(&self) -> TestController<'_> {
        self.controller_with(ControllerConfig::default())
    }

    pub fn controller_with(&self, config: ControllerConfig<TestDuration>) -> TestController<'_> {
        ModeController::new(
            self.shared(),
            &self.time,
            MockDisplay::new(),
            MockIndicator::new(),
            MockDebug::default(),
            config,
        )
    }
}
