//! 74HC595 shift register driver for the 7-segment digit.
//!
//! The register is fed serially over three GPIO lines:
//!   - DS   (data)  - the bit being transferred
//!   - SHCP (clock) - rising edge shifts DS into the internal buffer
//!   - STCP (latch) - rising edge copies the buffer to the output pins
//!
//! Generic over the HAL so callers pass in their platform's pins and
//! delay; host tests pass recording mocks.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::BIT_DELAY_MS;
use crate::glyphs::{self, BLANK};

/// Single-digit 7-segment display behind a 74HC595.
///
/// Holding the three output lines by value makes this the sole driver of
/// the register: a `shift_out` in progress cannot be interleaved with
/// another display write.
pub struct ShiftRegisterDisplay<Data, Clock, Latch, D> {
    data: Data,
    clock: Clock,
    latch: Latch,
    delay: D,
}

impl<Data, Clock, Latch, D, E> ShiftRegisterDisplay<Data, Clock, Latch, D>
where
    Data: OutputPin<Error = E>,
    Clock: OutputPin<Error = E>,
    Latch: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Wrap the three register lines and a delay source.
    ///
    /// The lines are expected to start low; `reset` puts them there
    /// regardless.
    pub fn new(data: Data, clock: Clock, latch: Latch, delay: D) -> Self {
        Self {
            data,
            clock,
            latch,
            delay,
        }
    }

    /// Serialize `pattern` into the register, LSB first, and latch it.
    ///
    /// Every line transition is separated by `BIT_DELAY_MS` so the
    /// register sees stable levels.  Runs to completion; there is no
    /// cancellation point that could leave a partial pattern latched.
    pub async fn shift_out(&mut self, pattern: u8) -> Result<(), E> {
        self.delay.delay_ms(BIT_DELAY_MS).await;
        self.latch.set_low()?;

        for bit in 0..8 {
            if (pattern >> bit) & 1 == 1 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.delay.delay_ms(BIT_DELAY_MS).await;
            self.clock.set_high()?;
            self.delay.delay_ms(BIT_DELAY_MS).await;
            self.clock.set_low()?;
        }

        self.delay.delay_ms(BIT_DELAY_MS).await;
        self.latch.set_high()?;
        self.delay.delay_ms(BIT_DELAY_MS).await;
        self.latch.set_low()?;
        self.delay.delay_ms(BIT_DELAY_MS).await;
        Ok(())
    }

    /// Blank the display.
    pub async fn clear(&mut self) -> Result<(), E> {
        self.shift_out(BLANK).await
    }

    /// Show `digit` (0-9); anything else blanks the display.
    pub async fn show_digit(&mut self, digit: u8) -> Result<(), E> {
        self.shift_out(glyphs::glyph(digit)).await
    }

    /// Blank the display and drive all three lines low.
    ///
    /// Called at setup and on every teardown path.  Idempotent.
    pub async fn reset(&mut self) -> Result<(), E> {
        self.clear().await?;
        self.data.set_low()?;
        self.latch.set_low()?;
        self.clock.set_low()?;
        Ok(())
    }
}
