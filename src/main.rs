//! A 5x5 LED matrix showing one digit, stepped up and down by two buttons.
//!
//! Runs on a Raspberry Pi Pico RP2040. See [`digit_matrix::Hardware`] for the wiring.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use digit_matrix::{
    DEFAULT_COLOR, Digit, DigitRenderer, Hardware, InputController, MainLoop, Result, buttons,
};
use embassy_executor::Spawner;
use embassy_time::Delay;
use panic_probe as _;

static INPUT_CONTROLLER: InputController = InputController::new(Digit::MIN);

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let hardware = Hardware::default();

    buttons::spawn_edge_tasks(
        spawner,
        hardware.increment_button,
        hardware.decrement_button,
        &INPUT_CONTROLLER,
    )?;

    info!("digit matrix running");
    let mut main_loop = MainLoop::new(
        hardware.status_led,
        DigitRenderer::new(hardware.matrix),
        Delay,
        &INPUT_CONTROLLER,
        DEFAULT_COLOR,
    );
    main_loop.run().await
}
