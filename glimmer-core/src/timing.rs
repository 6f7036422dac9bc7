//! Timing primitives
//!
//! All waits are blocking spins on a [`LoopDelay`]. Nothing here can fail,
//! and no input is observed while a wait is in progress.

use glimmer_hal::{LoopDelay, OutputPin};

use crate::clock::ClockConfig;
use crate::config::CalibratedPulse;

/// Spin for `loops` iterations
#[inline(always)]
pub fn busy_wait<D: LoopDelay>(delay: &mut D, loops: u16) {
    delay.spin(loops);
}

/// Drive the output high for `width_loops` iterations, then low
#[inline(always)]
pub fn emit_pulse<O: OutputPin, D: LoopDelay>(output: &mut O, delay: &mut D, width_loops: u16) {
    output.set_high();
    busy_wait(delay, width_loops);
    output.set_low();
}

/// Spin for `us` microseconds
///
/// `us` must not exceed [`ClockConfig::max_microseconds`].
pub fn delay_us<D: LoopDelay>(delay: &mut D, clock: &ClockConfig, us: u16) {
    busy_wait(delay, clock.microseconds_to_loops(us));
}

/// Emit a pulse `us` microseconds wide
pub fn emit_pulse_us<O: OutputPin, D: LoopDelay>(
    output: &mut O,
    delay: &mut D,
    clock: &ClockConfig,
    us: u16,
) {
    emit_pulse(output, delay, clock.microseconds_to_loops(us));
}

/// Emit one substitute period: high for `on_loops`, then low for `off_loops`
pub fn emit_injection<O: OutputPin, D: LoopDelay>(
    output: &mut O,
    delay: &mut D,
    pulse: &CalibratedPulse,
) {
    emit_pulse(output, delay, pulse.on_loops);
    busy_wait(delay, pulse.off_loops);
}
