//! Calibration square wave
//!
//! Replaces the watchdog in test builds. The output toggles every 500 µs,
//! so a frequency counter on the output reads exactly 1 kHz when
//! [`ClockConfig`] matches the real core clock and loop cost. Any other
//! reading means `loop_cycles` needs adjusting.

use glimmer_hal::{LoopDelay, OutputPin};

use crate::clock::ClockConfig;
use crate::timing;

/// Half period of the 1 kHz reference
pub const HALF_PERIOD_US: u16 = 500;

/// Fixed-frequency output driver
pub struct SquareWave<O, D> {
    output: O,
    delay: D,
    half_period_loops: u16,
}

impl<O: OutputPin, D: LoopDelay> SquareWave<O, D> {
    /// Create a driver for the 1 kHz reference on `clock`
    pub fn new(output: O, delay: D, clock: &ClockConfig) -> Self {
        Self {
            output,
            delay,
            half_period_loops: clock.microseconds_to_loops(HALF_PERIOD_US),
        }
    }

    /// Spin iterations per half period
    pub fn half_period_loops(&self) -> u16 {
        self.half_period_loops
    }

    /// Wait half a period, then toggle the output
    pub fn half_period(&mut self) {
        timing::busy_wait(&mut self.delay, self.half_period_loops);
        self.output.toggle();
    }

    /// Toggle forever
    pub fn run(mut self) -> ! {
        loop {
            self.half_period();
        }
    }
}
