//! Startup configuration
//!
//! Loads the persisted intensity, calibrates the injected pulse and
//! assembles the watchdog settings from build features.

use defmt::*;

use glimmer_core::{calibrate, CalibratedPulse, ClockConfig, StoredIntensity, WatchdogConfig};
use glimmer_hal::IntensityStore;
use glimmer_hal_rp2040::STUCK_POLLS;

/// Read and calibrate the injected pulse
///
/// A failed read runs at the default intensity rather than halting: a dark
/// laser is the failure this firmware exists to prevent.
pub fn load_pulse<S: IntensityStore>(store: &mut S, clock: &ClockConfig) -> CalibratedPulse {
    let intensity = match StoredIntensity::load(store) {
        Ok(intensity) if intensity.is_unset() => {
            info!(
                "Intensity unset, using default {}/1000",
                StoredIntensity::DEFAULT
            );
            intensity
        }
        Ok(intensity) => {
            info!("Intensity {}/1000", intensity.raw());
            intensity
        }
        Err(e) => {
            warn!("Failed to read intensity: {:?}, using default", e);
            StoredIntensity::unset()
        }
    };

    if intensity.exceeds_duty_cap() {
        warn!(
            "Intensity {}/1000 exceeds the {}/1000 cap, using it as stored",
            intensity.raw(),
            StoredIntensity::DUTY_CAP
        );
    }

    let pulse = calibrate(intensity.raw(), clock);
    info!(
        "Injected pulse: {} loops on, {} loops off ({} Hz, {} cycles/loop)",
        pulse.on_loops, pulse.off_loops, clock.clock_hz(), clock.loop_cycles()
    );
    pulse
}

/// Watchdog settings for this build
pub const fn watchdog_config() -> WatchdogConfig {
    WatchdogConfig::new(STUCK_POLLS).with_stuck_high_guard(cfg!(feature = "limit-pulse-up"))
}
