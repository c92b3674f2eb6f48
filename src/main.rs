//! Embedded entry point for dice595 (nRF52840).
//!
//! Wires the shift register lines, the roll button and the hardware RNG
//! into the controller, then runs the button loop: a short press rolls
//! the dice, holding the button for a few seconds tears down and halts.
//!
//! The loop owns both the button and the controller, so a press that
//! arrives while a roll is animating is simply never observed; the
//! controller's state machine drops it as well if one is ever delivered.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::bind_interrupts;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::peripherals::RNG;
use embassy_nrf::rng::{self, Rng};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use dice595::config;
use dice595::dice::{DiceController, DiceEvent};
use dice595::display::ShiftRegisterDisplay;

bind_interrupts!(struct Irqs {
    RNG => rng::InterruptHandler<RNG>;
});

/// Forward controller lifecycle events to the log.
fn log_event(event: DiceEvent) {
    match event {
        DiceEvent::Ready => info!("setup complete, accepting presses"),
        DiceEvent::Pressed => info!("button pressed"),
        DiceEvent::Chosen(n) => info!("chosen number: {}", n),
        DiceEvent::Settled(n) => info!("settled on {}", n),
        DiceEvent::Shutdown => info!("display reset"),
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("dice595 starting");
    let p = embassy_nrf::init(Default::default());

    // Pin map documented in config.rs.
    let data = Output::new(p.P0_17, Level::Low, OutputDrive::Standard);
    let latch = Output::new(p.P0_27, Level::Low, OutputDrive::Standard);
    let clock = Output::new(p.P0_22, Level::Low, OutputDrive::Standard);
    let mut button = Input::new(p.P0_05, Pull::Up);
    let rng = Rng::new(p.RNG, Irqs);

    let display = ShiftRegisterDisplay::new(data, clock, latch, Delay);
    let mut controller = DiceController::new(display, rng, config::INIT_DELAY_MS, Delay, log_event);

    controller.setup().await.unwrap();

    info!("entering button loop");
    loop {
        // Active low: falling edge is a press.
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(config::BUTTON_DEBOUNCE_MS)).await;
        if button.is_high() {
            // Bounce, not a real press.
            continue;
        }

        // Short press rolls; holding the button requests shutdown.
        match select(
            button.wait_for_rising_edge(),
            Timer::after(Duration::from_millis(config::SHUTDOWN_HOLD_MS)),
        )
        .await
        {
            Either::First(()) => {
                controller.handle_press().await.unwrap();
                controller.handle_release();
                Timer::after(Duration::from_millis(config::BUTTON_DEBOUNCE_MS)).await;
            }
            Either::Second(()) => break,
        }
    }

    info!("shutdown requested");
    controller.shutdown().await.unwrap();

    info!("halted");
    core::future::pending::<()>().await;
}
