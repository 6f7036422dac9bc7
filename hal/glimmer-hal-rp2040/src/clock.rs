//! Board clock calibration
//!
//! `embassy_rp::init(Default::default())` runs the system clock from the PLL
//! at 125 MHz.

use glimmer_core::ClockConfig;

/// System clock after default init
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

/// Cycles per [`crate::CycleSpin`] iteration on Cortex-M0+
///
/// `nop` + `subs` + taken `bne`. Verify with the `test-mode` firmware and a
/// frequency counter after any toolchain upgrade.
pub const LOOP_CYCLES: u32 = 4;

pub const CLOCK: ClockConfig = ClockConfig::new(SYSTEM_CLOCK_HZ).with_loop_cycles(LOOP_CYCLES);

/// Unchanged polls before injecting, roughly 1.25 ms at 125 MHz
pub const STUCK_POLLS: u16 = 12_500;

// The 1 ms injected period must fit in a 16-bit loop count
const _: () = assert!(CLOCK.max_microseconds() >= 1000);
