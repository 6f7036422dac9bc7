//! Clock calibration
//!
//! Converts wall-clock durations into iteration counts of the spin loop.
//! The cost of one iteration is a property of the core and of the code the
//! compiler emits for it, so it has to be measured (see
//! [`crate::square_wave`]) and re-measured whenever either changes.

/// Spin loop cycle cost of the reference toolchain
pub const DEFAULT_LOOP_CYCLES: u32 = 5;

/// Processor clock and spin loop cost
///
/// Fields are private so the loop cost can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    clock_hz: u32,
    loop_cycles: u32,
}

impl ClockConfig {
    /// 16 MHz core (ATtiny25/45/85 internal PLL)
    pub const MHZ_16: Self = Self::new(16_000_000);

    /// 9.6 MHz core (ATtiny13A internal oscillator)
    pub const MHZ_9_6: Self = Self::new(9_600_000);

    /// Create a clock config with the reference loop cost
    pub const fn new(clock_hz: u32) -> Self {
        Self {
            clock_hz,
            loop_cycles: DEFAULT_LOOP_CYCLES,
        }
    }

    /// Override the measured spin loop cost; zero is raised to one
    pub const fn with_loop_cycles(self, loop_cycles: u32) -> Self {
        Self {
            clock_hz: self.clock_hz,
            loop_cycles: if loop_cycles == 0 { 1 } else { loop_cycles },
        }
    }

    /// Core clock in Hz
    pub const fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    /// CPU cycles per spin iteration (never zero)
    pub const fn loop_cycles(&self) -> u32 {
        self.loop_cycles
    }

    /// Divisor applied to `us * (clock_hz / 100_000)`
    const fn divisor(&self) -> u32 {
        self.loop_cycles.saturating_mul(10)
    }

    /// Convert microseconds to spin iterations
    ///
    /// `loops = us * (clock_hz / 100_000) / (loop_cycles * 10) + 1`
    ///
    /// The `+ 1` keeps the result non-zero, so a requested width of 0 µs
    /// still produces a pulse the laser driver can register. Durations
    /// above [`Self::max_microseconds`] overflow the 16-bit count.
    #[inline(always)]
    pub const fn microseconds_to_loops(&self, us: u16) -> u16 {
        // u16::MAX * (u32::MAX / 100_000) still fits in u32
        (us as u32 * (self.clock_hz / 100_000) / self.divisor() + 1) as u16
    }

    /// Longest duration whose loop count still fits in 16 bits
    pub const fn max_microseconds(&self) -> u16 {
        let per_100khz = self.clock_hz / 100_000;
        if per_100khz == 0 {
            return u16::MAX;
        }
        let max = (u16::MAX as u64 * self.divisor() as u64 - 1) / per_100khz as u64;
        if max > u16::MAX as u64 {
            u16::MAX
        } else {
            max as u16
        }
    }
}
