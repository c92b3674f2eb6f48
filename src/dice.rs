//! Roll state machine and controller.
//!
//! A press while idle kicks off one non-cancellable roll: a spin phase of
//! random digits with exponentially growing delays (the visual "slowing
//! spin"), a blink phase settling on the chosen digit, then the digit held
//! steady.  The state machine is the re-entrancy guard: a press is a
//! transition-table lookup, and only `Idle` accepts one.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use rand_core::RngCore;

use crate::config::{BLINK_CYCLES, BLINK_OFF_MS, BLINK_ON_MS, SPIN_START_DELAY_MS, SPIN_STEPS};
use crate::display::ShiftRegisterDisplay;

/// Controller lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiceState {
    /// Constructed but not set up; presses are dropped.
    Uninitialized,
    /// Armed and waiting for a press.
    Idle,
    /// A roll animation is in progress; presses are dropped.
    Rolling,
    /// Teardown has run; presses are dropped.
    ShuttingDown,
}

impl DiceState {
    /// Transition taken on a button press, if any.
    ///
    /// Only `Idle` accepts a press; every other state silently drops it.
    pub fn on_press(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Rolling),
            Self::Uninitialized | Self::Rolling | Self::ShuttingDown => None,
        }
    }
}

/// Lifecycle events reported to the injected observer.
///
/// Purely informational; the embedded binary forwards them to `defmt`,
/// tests record them.  A dropped re-entrant press emits nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiceEvent {
    /// Setup finished; the controller is accepting presses.
    Ready,
    /// A press was accepted and a roll is starting.
    Pressed,
    /// The final digit for this roll was drawn.
    Chosen(u8),
    /// The roll finished and the digit is held steady.
    Settled(u8),
    /// Teardown ran and the display was reset.
    Shutdown,
}

/// Delay slept after spin step `step` (0-based), in milliseconds.
///
/// Starts at `SPIN_START_DELAY_MS` and doubles every step: 5, 10, 20, ...
pub fn spin_delay_ms(step: u32) -> u32 {
    SPIN_START_DELAY_MS << step
}

/// Owns the display, the entropy source and the roll lifecycle.
pub struct DiceController<Data, Clock, Latch, D, R, F> {
    display: ShiftRegisterDisplay<Data, Clock, Latch, D>,
    rng: R,
    delay: D,
    init_delay_ms: u32,
    state: DiceState,
    observer: F,
}

impl<Data, Clock, Latch, D, R, F, E> DiceController<Data, Clock, Latch, D, R, F>
where
    Data: OutputPin<Error = E>,
    Clock: OutputPin<Error = E>,
    Latch: OutputPin<Error = E>,
    D: DelayNs,
    R: RngCore,
    F: FnMut(DiceEvent),
{
    /// Take ownership of the display and input-side collaborators.
    ///
    /// The controller starts `Uninitialized` so presses delivered before
    /// `setup` completes are dropped.
    pub fn new(
        display: ShiftRegisterDisplay<Data, Clock, Latch, D>,
        rng: R,
        init_delay_ms: u32,
        delay: D,
        observer: F,
    ) -> Self {
        Self {
            display,
            rng,
            delay,
            init_delay_ms,
            state: DiceState::Uninitialized,
            observer,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DiceState {
        self.state
    }

    /// True while the controller is not accepting presses.
    pub fn is_busy(&self) -> bool {
        self.state != DiceState::Idle
    }

    /// Wait out the startup delay, reset the display and start accepting
    /// presses.
    pub async fn setup(&mut self) -> Result<(), E> {
        if self.init_delay_ms > 0 {
            self.delay.delay_ms(self.init_delay_ms).await;
        }
        self.display.reset().await?;
        self.state = DiceState::Idle;
        (self.observer)(DiceEvent::Ready);
        Ok(())
    }

    /// Register a press edge.  Returns whether a roll was started.
    ///
    /// A press in any state but `Idle` is a silent no-op - the
    /// application-level debounce on top of the hardware debounce window.
    pub fn press(&mut self) -> bool {
        match self.state.on_press() {
            Some(next) => {
                self.state = next;
                (self.observer)(DiceEvent::Pressed);
                true
            }
            None => false,
        }
    }

    /// Register a release edge.
    ///
    /// Symmetric hook to `press`; deliberately triggers no action.
    pub fn handle_release(&mut self) {}

    /// Run the roll animation to completion and return to `Idle`.
    ///
    /// Does nothing unless a prior `press` moved the controller to
    /// `Rolling`.  Not cancellable once begun; worst case it holds the
    /// task for the full spin-plus-blink duration.
    pub async fn run_roll(&mut self) -> Result<(), E> {
        if self.state != DiceState::Rolling {
            return Ok(());
        }

        let chosen = self.random_digit();
        (self.observer)(DiceEvent::Chosen(chosen));

        // Spin: fresh random digit per step, delay doubling from 5 ms.
        for step in 0..SPIN_STEPS {
            let digit = self.random_digit();
            self.display.show_digit(digit).await?;
            self.delay.delay_ms(spin_delay_ms(step)).await;
        }

        // Settle: blink the chosen digit, then hold it steady.
        for _ in 0..BLINK_CYCLES {
            self.display.show_digit(chosen).await?;
            self.delay.delay_ms(BLINK_ON_MS).await;
            self.display.clear().await?;
            self.delay.delay_ms(BLINK_OFF_MS).await;
        }
        self.display.show_digit(chosen).await?;

        self.state = DiceState::Idle;
        (self.observer)(DiceEvent::Settled(chosen));
        Ok(())
    }

    /// Press-and-roll in one call.  Returns whether a roll ran.
    pub async fn handle_press(&mut self) -> Result<bool, E> {
        if !self.press() {
            return Ok(false);
        }
        self.run_roll().await?;
        Ok(true)
    }

    /// Teardown: reset the display and stop accepting presses.
    ///
    /// Idempotent and safe to call even if `setup` never ran.
    pub async fn shutdown(&mut self) -> Result<(), E> {
        self.state = DiceState::ShuttingDown;
        self.display.reset().await?;
        (self.observer)(DiceEvent::Shutdown);
        Ok(())
    }

    fn random_digit(&mut self) -> u8 {
        (self.rng.next_u32() % 10) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_delays_double_from_five_ms() {
        let delays: [u32; 9] = core::array::from_fn(|step| spin_delay_ms(step as u32));
        assert_eq!(delays, [5, 10, 20, 40, 80, 160, 320, 640, 1280]);
    }

    #[test]
    fn only_idle_accepts_a_press() {
        assert_eq!(DiceState::Idle.on_press(), Some(DiceState::Rolling));
        assert_eq!(DiceState::Uninitialized.on_press(), None);
        assert_eq!(DiceState::Rolling.on_press(), None);
        assert_eq!(DiceState::ShuttingDown.on_press(), None);
    }
}
