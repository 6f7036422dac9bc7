//! Input watchdog
//!
//! Mirrors the PWM input to the laser output and injects a minimum-intensity
//! pulse whenever the input level has not changed for too long.

pub mod monitor;
pub mod state;

pub use monitor::Watchdog;
pub use state::MirrorState;
