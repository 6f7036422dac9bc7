//! Mirroring state

/// Last input level the watchdog acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MirrorState {
    /// Input idle; output low except during injected pulses
    #[default]
    Low,
    /// Input active; output high (unless the stuck-high guard fired)
    High,
}
