//! Glimmer Hardware Abstraction Layer
//!
//! This crate defines the few hardware primitives the watchdog consumes.
//! Chip-specific crates implement them so the polling loop in
//! `glimmer-core` stays board-agnostic and can be exercised on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  glimmer-firmware (bring-up + loop)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glimmer-core (calibration, watchdog)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glimmer-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ glimmer-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`delay::LoopDelay`] - Calibrated busy-wait
//! - [`storage::IntensityStore`] - Persisted intensity byte

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod embedded;
pub mod gpio;
pub mod storage;

pub use delay::LoopDelay;
pub use embedded::{EhInput, EhOutput};
pub use gpio::{InputPin, OutputPin};
pub use storage::{IntensityStore, StorageError};
