//! Busy-wait delay abstraction

/// Calibrated busy-wait
///
/// One call blocks for `loops` iterations of a loop the optimizer cannot
/// elide or reorder. The wall-clock cost of an iteration is fixed per core
/// and toolchain and is described by `glimmer_core::clock::ClockConfig`.
///
/// The wait is not interruptible and cannot be cancelled. An implementation
/// backed by a hardware timer is acceptable as long as it keeps the same
/// per-iteration cost.
pub trait LoopDelay {
    /// Spin for `loops` iterations
    fn spin(&mut self, loops: u16);
}

impl<T: LoopDelay + ?Sized> LoopDelay for &mut T {
    fn spin(&mut self, loops: u16) {
        T::spin(self, loops)
    }
}
