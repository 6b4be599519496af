//! On/off indicators (status LEDs, buzzers).
//!
//! [`Indicator`] is the single capability the controller drives. [`RgbIndicator`]
//! adapts an RGB LED to it, showing one colour when on and black when off.

use palette::Srgb;

/// LED off.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Colour shown by [`RgbIndicator`] unless another is chosen.
pub const RUNNING_BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);

/// Something that can be switched on and off.
pub trait Indicator {
    /// Switches the indicator on.
    fn turn_on(&mut self);

    /// Switches the indicator off.
    fn turn_off(&mut self);

    /// Returns the last commanded state.
    fn is_on(&self) -> bool;

    /// Inverts the current state.
    fn toggle(&mut self) {
        if self.is_on() {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }

    /// Drives the indicator to `on`.
    fn set(&mut self, on: bool) {
        if on {
            self.turn_on();
        } else {
            self.turn_off();
        }
    }
}

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, etc.). Color components are
/// in the range 0.0-1.0; convert them to your hardware's native format. For
/// common-anode LEDs invert the duty cycle in the implementation. This method
/// cannot fail; handle hardware errors internally.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// RGB LED used as an on/off indicator.
pub struct RgbIndicator<L: RgbLed> {
    led: L,
    on_color: Srgb,
    on: bool,
}

impl<L: RgbLed> RgbIndicator<L> {
    /// Creates an indicator that lights blue. The LED is turned off.
    pub fn new(led: L) -> Self {
        Self::with_color(led, RUNNING_BLUE)
    }

    /// Creates an indicator that lights `on_color`. The LED is turned off.
    pub fn with_color(mut led: L, on_color: Srgb) -> Self {
        led.set_color(COLOR_OFF);
        Self {
            led,
            on_color,
            on: false,
        }
    }

    /// Colour shown while on.
    pub fn on_color(&self) -> Srgb {
        self.on_color
    }

    /// Releases the LED.
    pub fn into_inner(self) -> L {
        self.led
    }
}

impl<L: RgbLed> Indicator for RgbIndicator<L> {
    fn turn_on(&mut self) {
        if !self.on {
            self.led.set_color(self.on_color);
            self.on = true;
        }
    }

    fn turn_off(&mut self) {
        if self.on {
            self.led.set_color(COLOR_OFF);
            self.on = false;
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
