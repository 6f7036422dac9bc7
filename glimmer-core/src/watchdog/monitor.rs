//! Polling loop
//!
//! Single-threaded, no interrupts. Input edges are reflected on the output
//! within one poll, except while an injected pulse is being emitted: edges
//! arriving during injection are only seen once it completes.

use glimmer_hal::{InputPin, LoopDelay, OutputPin};

use super::state::MirrorState;
use crate::config::{CalibratedPulse, WatchdogConfig};
use crate::timing;

/// Input watchdog
///
/// Owns the input, the output and the spin delay for the lifetime of the
/// firmware.
pub struct Watchdog<I, O, D> {
    input: I,
    output: O,
    delay: D,
    pulse: CalibratedPulse,
    config: WatchdogConfig,
    state: MirrorState,
}

impl<I, O, D> Watchdog<I, O, D>
where
    I: InputPin,
    O: OutputPin,
    D: LoopDelay,
{
    /// Create a watchdog in [`MirrorState::Low`] with the output driven low
    pub fn new(
        input: I,
        mut output: O,
        delay: D,
        pulse: CalibratedPulse,
        config: WatchdogConfig,
    ) -> Self {
        output.set_low();
        Self {
            input,
            output,
            delay,
            pulse,
            config,
            state: MirrorState::Low,
        }
    }

    /// Current mirroring state
    pub fn state(&self) -> MirrorState {
        self.state
    }

    /// Injected pulse widths
    pub fn pulse(&self) -> CalibratedPulse {
        self.pulse
    }

    /// Polling loop configuration
    pub fn config(&self) -> WatchdogConfig {
        self.config
    }

    /// Mirror the idle phase until the input goes high
    ///
    /// Injects a pulse every `stuck_polls + 1` consecutive low polls. On
    /// return the output has been driven high and the state is
    /// [`MirrorState::High`].
    pub fn mirror_low(&mut self) {
        let mut tout = self.config.stuck_polls;
        while self.input.is_low() {
            if tout == 0 {
                self.inject();
                tout = self.config.stuck_polls;
            } else {
                tout -= 1;
            }
        }
        self.output.set_high();
        self.state = MirrorState::High;
    }

    /// Mirror the active phase until the input goes low
    ///
    /// With [`WatchdogConfig::guard_stuck_high`] set this injects exactly
    /// like [`Self::mirror_low`], which leaves the output low between
    /// injected pulses. Otherwise it waits for the falling edge without a
    /// timeout. On return the output has been driven low and the state is
    /// [`MirrorState::Low`].
    pub fn mirror_high(&mut self) {
        if self.config.guard_stuck_high {
            let mut tout = self.config.stuck_polls;
            while self.input.is_high() {
                if tout == 0 {
                    self.inject();
                    tout = self.config.stuck_polls;
                } else {
                    tout -= 1;
                }
            }
        } else {
            while self.input.is_high() {}
        }
        self.output.set_low();
        self.state = MirrorState::Low;
    }

    /// Run the current phase to its edge
    pub fn step(&mut self) {
        match self.state {
            MirrorState::Low => self.mirror_low(),
            MirrorState::High => self.mirror_high(),
        }
    }

    /// Mirror forever
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Give the hardware back
    pub fn release(self) -> (I, O, D) {
        (self.input, self.output, self.delay)
    }

    #[cold]
    #[inline(never)]
    fn inject(&mut self) {
        timing::emit_injection(&mut self.output, &mut self.delay, &self.pulse);
    }
}
