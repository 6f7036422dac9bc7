//! Intensity calibration
//!
//! The persisted byte is the injected pulse width in microseconds out of a
//! fixed 1 ms period, i.e. the duty cycle in thousandths.

use glimmer_hal::{IntensityStore, StorageError};

use crate::clock::ClockConfig;

/// Intensity byte as read from persisted storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredIntensity(u8);

impl StoredIntensity {
    /// Erased/unprogrammed marker
    pub const UNSET: u8 = 0xFF;

    /// Substituted for [`Self::UNSET`] (0.5% duty cycle)
    pub const DEFAULT: u8 = 5;

    /// Highest intended value (25% duty cycle)
    pub const DUTY_CAP: u8 = 250;

    /// Injected pulse period in microseconds
    pub const PERIOD_US: u16 = 1000;

    /// Wrap a raw byte
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Read the byte from storage
    pub fn load<S: IntensityStore>(store: &mut S) -> Result<Self, StorageError> {
        store.read_intensity().map(Self)
    }

    /// The unset marker, which calibrates to the default intensity
    pub const fn unset() -> Self {
        Self(Self::UNSET)
    }

    /// The byte exactly as stored
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether the byte holds the unset marker
    pub const fn is_unset(self) -> bool {
        self.0 == Self::UNSET
    }

    /// The value in effect after substituting the default for the marker
    pub const fn effective(self) -> u8 {
        if self.is_unset() {
            Self::DEFAULT
        } else {
            self.0
        }
    }

    /// Injected pulse high time in microseconds
    pub const fn on_us(self) -> u16 {
        self.effective() as u16
    }

    /// Injected pulse low time in microseconds
    pub const fn off_us(self) -> u16 {
        Self::PERIOD_US - self.effective() as u16
    }

    /// Whether the value is above the 25% cap
    ///
    /// Such values are accepted as stored and never clamped; this only lets
    /// the caller report them.
    pub const fn exceeds_duty_cap(self) -> bool {
        self.effective() > Self::DUTY_CAP
    }
}

/// Injected pulse widths in spin iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibratedPulse {
    /// Time the output is held high
    pub on_loops: u16,
    /// Time the output is held low before polling resumes
    pub off_loops: u16,
}

impl CalibratedPulse {
    /// Whole injected period in spin iterations
    pub const fn period_loops(&self) -> u32 {
        self.on_loops as u32 + self.off_loops as u32
    }
}

/// Convert a persisted intensity byte into pulse widths
///
/// `0xFF` is replaced by the 0.5% default; every other value is used as is.
/// The period is always 1000 µs split into `raw` µs high and `1000 - raw` µs
/// low.
pub fn calibrate(raw: u8, clock: &ClockConfig) -> CalibratedPulse {
    let intensity = StoredIntensity::from_raw(raw);
    CalibratedPulse {
        on_loops: clock.microseconds_to_loops(intensity.on_us()),
        off_loops: clock.microseconds_to_loops(intensity.off_us()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_hal::storage::FixedIntensity;
    use proptest::prelude::*;

    struct BrokenStore;

    impl IntensityStore for BrokenStore {
        fn read_intensity(&mut self) -> Result<u8, StorageError> {
            Err(StorageError::Read)
        }
    }

    #[test]
    fn test_unset_uses_default() {
        for clock in [ClockConfig::MHZ_16, ClockConfig::MHZ_9_6] {
            assert_eq!(calibrate(0xFF, &clock), calibrate(5, &clock));
        }
    }

    #[test]
    fn test_unset_is_half_percent() {
        let clock = ClockConfig::MHZ_16;
        let pulse = calibrate(0xFF, &clock);
        assert_eq!(pulse.on_loops, clock.microseconds_to_loops(5));
        assert_eq!(pulse.off_loops, clock.microseconds_to_loops(995));
        assert_eq!(StoredIntensity::from_raw(0xFF).effective(), 5);
    }

    #[test]
    fn test_one_percent() {
        let clock = ClockConfig::MHZ_9_6;
        let pulse = calibrate(0x0A, &clock);
        assert_eq!(pulse.on_loops, clock.microseconds_to_loops(10));
        assert_eq!(pulse.off_loops, clock.microseconds_to_loops(990));
    }

    #[test]
    fn test_zero_intensity_still_pulses() {
        let pulse = calibrate(0, &ClockConfig::MHZ_16);
        assert_eq!(pulse.on_loops, 1);
    }

    #[test]
    fn test_cap_boundary() {
        assert!(!StoredIntensity::from_raw(250).exceeds_duty_cap());
        assert!(!StoredIntensity::from_raw(0xFF).exceeds_duty_cap());
        for raw in 251..=254u8 {
            assert!(StoredIntensity::from_raw(raw).exceeds_duty_cap());
        }
    }

    #[test]
    fn test_above_cap_passed_through() {
        // Known boundary: 251..=254 are not validated
        let clock = ClockConfig::MHZ_16;
        for raw in 251..=254u8 {
            let pulse = calibrate(raw, &clock);
            assert_eq!(pulse.on_loops, clock.microseconds_to_loops(raw as u16));
            assert_eq!(pulse.off_loops, clock.microseconds_to_loops(1000 - raw as u16));
        }
    }

    #[test]
    fn test_load_from_store() {
        let intensity = StoredIntensity::load(&mut FixedIntensity(0x0A));
        assert_eq!(intensity, Ok(StoredIntensity::from_raw(0x0A)));
        assert_eq!(
            StoredIntensity::load(&mut BrokenStore),
            Err(StorageError::Read)
        );
    }

    #[test]
    fn test_unset_fallback_calibrates_to_default() {
        let clock = ClockConfig::MHZ_16;
        let intensity = StoredIntensity::unset();
        assert!(intensity.is_unset());
        assert_eq!(intensity.effective(), StoredIntensity::DEFAULT);
        assert_eq!(calibrate(intensity.raw(), &clock), calibrate(5, &clock));
    }

    proptest! {
        #[test]
        fn prop_period_is_one_millisecond(raw in 0u8..=254) {
            for clock in [ClockConfig::MHZ_16, ClockConfig::MHZ_9_6] {
                let full = clock.microseconds_to_loops(1000) as u32;
                let period = calibrate(raw, &clock).period_loops();
                // Each half rounds down and adds one
                prop_assert!(period == full || period == full + 1);
            }
        }
    }
}
