//! Persisted intensity storage
//!
//! The only persisted setting is one byte: the pulse width in microseconds
//! per millisecond. External tooling writes it; the firmware reads it once at
//! boot.

/// Errors from reading persisted storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The underlying read failed
    Read,
}

/// Source of the persisted intensity byte
pub trait IntensityStore {
    /// Read the raw intensity byte
    ///
    /// Returns the byte exactly as stored; the unset sentinel (`0xFF`) is
    /// passed through and handled by calibration.
    fn read_intensity(&mut self) -> Result<u8, StorageError>;
}

/// Fixed intensity, for boards without persisted storage and for tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIntensity(pub u8);

impl IntensityStore for FixedIntensity {
    fn read_intensity(&mut self) -> Result<u8, StorageError> {
        Ok(self.0)
    }
}
