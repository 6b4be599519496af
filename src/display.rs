//! Rendering collaborators and the text the controller writes to them.

use crate::types::{TimeEdit, WallTime};
use core::fmt::Write;
use heapless::String;

/// Longest line the controller renders.
pub const LINE_CAPACITY: usize = 24;

/// A rendered screen line.
pub type Line = String<LINE_CAPACITY>;

/// Position of the title line.
pub const TITLE_POS: (u16, u16) = (20, 10);

/// Position of the value line under the title.
pub const VALUE_POS: (u16, u16) = (20, 20);

/// Trait for abstracting a character display.
///
/// Implementations own pixel/text rendering and handle bus errors internally.
pub trait Display {
    /// Clears the whole screen.
    fn clear(&mut self);

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, x: u16, y: u16, text: &str);
}

/// Best-effort debug output, e.g. a serial port.
///
/// Lines may be dropped silently; implementations must not block.
pub trait DebugSink {
    /// Emits one line.
    fn emit(&mut self, line: &str);
}

/// Discards every line.
impl DebugSink for () {
    fn emit(&mut self, _line: &str) {}
}

/// `Set Time: HH:MM`
pub fn set_time_line(edit: TimeEdit) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Set Time: {:02}:{:02}", edit.hours, edit.minutes);
    line
}

/// `Time: HH:MM:SS`
pub fn clock_line(time: WallTime) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "Time: {:02}:{:02}:{:02}",
        time.hours, time.minutes, time.seconds
    );
    line
}

/// `NN s`
pub fn elapsed_line(seconds: u64) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "{:02} s", seconds);
    line
}
