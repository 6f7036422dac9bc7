//! Watchdog tuning

/// Polls of an unchanged input before a pulse is injected
///
/// About 1.25 ms at 16 MHz and 2 ms at 9.6 MHz on the reference target.
pub const DEFAULT_STUCK_POLLS: u16 = 4000;

/// Polling loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchdogConfig {
    /// Consecutive unchanged polls tolerated before injecting
    pub stuck_polls: u16,
    /// Also inject while the input is held high
    ///
    /// When set, an input stuck high is limited to the injected duty cycle
    /// instead of keeping the laser fully on. When clear, the high phase is
    /// mirrored for as long as it lasts.
    pub guard_stuck_high: bool,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STUCK_POLLS)
    }
}

impl WatchdogConfig {
    /// Low-phase guard only
    pub const fn new(stuck_polls: u16) -> Self {
        Self {
            stuck_polls,
            guard_stuck_high: false,
        }
    }

    /// Enable or disable the stuck-high guard
    pub const fn with_stuck_high_guard(self, enabled: bool) -> Self {
        Self {
            stuck_polls: self.stuck_polls,
            guard_stuck_high: enabled,
        }
    }
}
