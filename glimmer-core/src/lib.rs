//! Board-agnostic core logic for the laser dot watchdog
//!
//! A laser module driven by a PWM input must never stay dark for long, or
//! the operator loses sight of the dot while aligning the machine. This crate
//! holds everything that decides when and how to light it:
//!
//! - Clock calibration (microseconds to spin iterations)
//! - Intensity calibration from the persisted byte
//! - Timing primitives (busy-wait, pulse emission)
//! - The watchdog polling loop
//! - The 1 kHz square wave used to verify the clock calibration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod square_wave;
pub mod timing;
pub mod watchdog;

#[cfg(test)]
mod sim;

pub use clock::ClockConfig;
pub use config::{calibrate, CalibratedPulse, StoredIntensity, WatchdogConfig};
pub use square_wave::SquareWave;
pub use watchdog::{MirrorState, Watchdog};
