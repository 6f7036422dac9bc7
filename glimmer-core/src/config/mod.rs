//! Configuration types
//!
//! Everything here is computed once at boot and passed by value into the
//! watchdog.

pub mod calibration;
pub mod watchdog;

pub use calibration::*;
pub use watchdog::*;
