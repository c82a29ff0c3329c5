use embassy_rp::gpio::{self, Level};
use embassy_rp::peripherals::PIO0;

use crate::ws2812::PioPixelTransmitter;

/// The board's wiring, ready to use.
///
/// | Part                  | GPIO | Notes                              |
/// |-----------------------|------|------------------------------------|
/// | 5x5 WS2812 data       | 7    | PIO0, state machine 0              |
/// | Status LED            | 13   | push-pull output, starts low       |
/// | Increment button      | 5    | to ground, internal pull-up        |
/// | Decrement button      | 6    | to ground, internal pull-up        |
pub struct Hardware {
    pub matrix: PioPixelTransmitter<'static, PIO0, 0>,
    pub status_led: gpio::Output<'static>,
    pub increment_button: gpio::Input<'static>,
    pub decrement_button: gpio::Input<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let matrix = PioPixelTransmitter::new_pio0(peripherals.PIO0, peripherals.PIN_7);

        let status_led = gpio::Output::new(peripherals.PIN_13, Level::Low);

        let increment_button = gpio::Input::new(peripherals.PIN_5, gpio::Pull::Up);
        let decrement_button = gpio::Input::new(peripherals.PIN_6, gpio::Pull::Up);

        info!("matrix on GPIO7, status LED on GPIO13, buttons on GPIO5/GPIO6");

        Self {
            matrix,
            status_led,
            increment_button,
            decrement_button,
        }
    }
}
