//! Cycle-counted spin delay

use glimmer_hal::LoopDelay;

/// Busy-wait on `nop`
///
/// The `nop` is inline assembly, so the loop can be neither removed nor
/// merged by the optimizer. After the first iteration the loop body is
/// served from the XIP cache and each iteration costs
/// [`crate::clock::LOOP_CYCLES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleSpin;

impl LoopDelay for CycleSpin {
    #[inline(always)]
    fn spin(&mut self, loops: u16) {
        let mut remaining = loops;
        while remaining != 0 {
            remaining -= 1;
            cortex_m::asm::nop();
        }
    }
}
