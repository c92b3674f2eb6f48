//! Host-testable library interface for dice595.
//!
//! The glyph table, the shift register protocol and the roll state
//! machine are hardware-independent: they are generic over
//! `embedded-hal` pins, an async delay and a `rand_core` RNG, so the
//! same code runs against embassy peripherals on target and against
//! recording mocks in `cargo test` on the host.
//!
//! The embedded binary lives in `main.rs` behind the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dice;
pub mod display;
pub mod glyphs;

pub use dice::{DiceController, DiceEvent, DiceState};
pub use display::ShiftRegisterDisplay;
