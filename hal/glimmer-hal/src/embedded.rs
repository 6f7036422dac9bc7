//! Adapters from `embedded-hal` 1.0 digital pins
//!
//! Any HAL whose GPIO types implement the `embedded-hal` digital traits
//! with an infallible error can drive the watchdog through these wrappers.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Input adapter for an infallible `embedded-hal` input pin
pub struct EhInput<P> {
    pin: P,
}

impl<P> EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    /// Wrap a pin; pull-up configuration is the caller's responsibility
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    #[inline(always)]
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

/// Output adapter for an infallible `embedded-hal` output pin
///
/// The driven level is tracked here so reading it back never touches the
/// hardware.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut output = Self { pin, high: true };
        output.set_low();
        output
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    #[inline(always)]
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    #[inline(always)]
    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn toggle(&mut self) {
        self.set_state(!self.high);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePin {
        level: bool,
        writes: u32,
    }

    impl digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl digital::InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level)
        }
    }

    impl digital::OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_input_reads_level() {
        let mut input = EhInput::new(FakePin {
            level: true,
            writes: 0,
        });
        assert!(input.is_high());
        assert!(!input.is_low());
    }

    #[test]
    fn test_output_starts_low() {
        let output = EhOutput::new(FakePin {
            level: true,
            writes: 0,
        });
        assert!(output.is_set_low());
        let pin = output.into_inner();
        assert!(!pin.level);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn test_output_toggle_tracks_level() {
        let mut output = EhOutput::new(FakePin {
            level: false,
            writes: 0,
        });
        output.toggle();
        assert!(output.is_set_high());
        output.toggle();
        assert!(output.is_set_low());
        assert!(!output.into_inner().level);
    }
}
