//! RP2040-specific HAL for the laser dot watchdog
//!
//! Implements the `glimmer-hal` traits that `embedded-hal` does not cover:
//!
//! - Cycle-counted spin delay
//! - Flash-resident intensity byte (the RP2040 has no EEPROM)
//! - Board clock calibration
//!
//! GPIO goes through `glimmer_hal::EhInput`/`EhOutput` on top of the
//! `embassy-rp` pin types.

#![no_std]

pub mod clock;
pub mod flash;
pub mod spin;

pub use clock::{CLOCK, STUCK_POLLS};
pub use flash::FlashIntensityStore;
pub use spin::CycleSpin;
