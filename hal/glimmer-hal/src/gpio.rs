//! GPIO pin abstractions
//!
//! The watchdog needs exactly one input (the PWM signal from the controller)
//! and one output (the laser driver enable).

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (laser on)
    fn set_high(&mut self);

    /// Drive the pin low (laser off)
    fn set_low(&mut self);

    /// Invert the current pin level
    fn toggle(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Sampling takes `&mut self` because some HALs (and `embedded-hal` 1.0)
/// require exclusive access to read a pin.
pub trait InputPin {
    /// Check if the pin reads high (input active)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (input idle)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}
