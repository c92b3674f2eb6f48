//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments and timing parameters live here so they
//! can be tuned in one place.

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your board.
//
//   74HC595 DS   (serial data)    → P0.17
//   74HC595 STCP (storage latch)  → P0.27
//   74HC595 SHCP (shift clock)    → P0.22
//   Roll button (active low)      → P0.05

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 100;

/// How long the button must be held to request shutdown (ms).
pub const SHUTDOWN_HOLD_MS: u64 = 3000;

/// Startup delay before the controller arms the button (ms).
pub const INIT_DELAY_MS: u32 = 1000;

// Shift register timing

/// Settle delay between line transitions when bit-banging the register (ms).
pub const BIT_DELAY_MS: u32 = 10;

// Roll animation

/// Number of random digits flashed during the spin phase.
pub const SPIN_STEPS: u32 = 9;

/// Delay after the first spin step (ms); doubles every step after that.
pub const SPIN_START_DELAY_MS: u32 = 5;

/// Number of on/off blink cycles in the settle phase.
pub const BLINK_CYCLES: u32 = 5;

/// How long the chosen digit stays lit per blink cycle (ms).
pub const BLINK_ON_MS: u32 = 500;

/// How long the display stays blank per blink cycle (ms).
pub const BLINK_OFF_MS: u32 = 500;
