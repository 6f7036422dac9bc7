//! Flash-resident intensity byte
//!
//! The intensity lives at the start of the last 4 KiB flash sector, which
//! `memory.x` keeps out of the program image. Erased flash reads `0xFF`,
//! the unset marker, so an unprogrammed board runs at the default 0.5%.
//!
//! To set it, flash a UF2 image containing the single byte at
//! `0x101F_F000` (XIP base + [`INTENSITY_OFFSET`]).

use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use glimmer_hal::{IntensityStore, StorageError};

/// Flash size on the Pico
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Sector reserved for settings
pub const SETTINGS_SECTOR_SIZE: usize = ERASE_SIZE;
pub const SETTINGS_OFFSET: u32 = (FLASH_SIZE - SETTINGS_SECTOR_SIZE) as u32;

/// Offset of the intensity byte from the start of flash
pub const INTENSITY_OFFSET: u32 = SETTINGS_OFFSET;

/// RP2040 intensity store
pub struct FlashIntensityStore<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> FlashIntensityStore<'d> {
    /// Take the flash peripheral in blocking mode
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        Self {
            flash: Flash::new_blocking(flash),
        }
    }
}

impl IntensityStore for FlashIntensityStore<'_> {
    fn read_intensity(&mut self) -> Result<u8, StorageError> {
        let mut byte = [0u8; 1];
        self.flash
            .blocking_read(INTENSITY_OFFSET, &mut byte)
            .map_err(|_| StorageError::Read)?;
        Ok(byte[0])
    }
}
