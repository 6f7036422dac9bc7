//! Glimmer - Laser Dot Watchdog Firmware
//!
//! Sits between a laser engraver's PWM output and the laser module. The
//! PWM signal is copied through unchanged, but whenever it stays low for
//! more than about 1.25 ms a short pulse is injected, so the dot stays
//! visible at minimum power while the axes are being aligned.
//!
//! | GPIO | Dir | Role                            |
//! |------|-----|---------------------------------|
//! | 0    | in  | PWM from controller (pull-up)   |
//! | 1    | out | Laser driver                    |
//!
//! Build features:
//! - `limit-pulse-up`: also inject while the input is stuck high
//! - `test-mode`: 1 kHz square wave on GPIO 1 to verify the clock calibration

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use glimmer_core::{SquareWave, Watchdog};
use glimmer_hal::{EhInput, EhOutput};
use glimmer_hal_rp2040::{CycleSpin, FlashIntensityStore, CLOCK};

mod config;

/// Main entry point
///
/// Nothing is ever spawned: the watchdog owns the core and never yields.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Glimmer firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Pin bring-up: output deasserted before anything else runs
    let output = Output::new(p.PIN_1, Level::Low);
    let input = Input::new(p.PIN_0, Pull::Up);
    info!("Peripherals initialized");

    let mut store = FlashIntensityStore::new(p.FLASH);
    let pulse = config::load_pulse(&mut store, &CLOCK);

    if cfg!(feature = "test-mode") {
        info!("Test mode: 1 kHz square wave on GPIO 1");
        SquareWave::new(EhOutput::new(output), CycleSpin, &CLOCK).run();
    }

    let config = config::watchdog_config();
    info!(
        "Watchdog running: {} polls to timeout, stuck-high guard {}",
        config.stuck_polls, config.guard_stuck_high
    );

    Watchdog::new(
        EhInput::new(input),
        EhOutput::new(output),
        CycleSpin,
        pulse,
        config,
    )
    .run();
}
