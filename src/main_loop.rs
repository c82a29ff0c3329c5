//! The cooperative loop: blink the status LED and redraw the matrix when asked.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::{
    BLINK_OFF_DELAY, BLINK_ON_DELAY, Color, DigitRenderer, Error, InputController,
    PixelTransmitter, Result,
};

/// The two halves of the status LED's blink period.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heartbeat {
    /// LED on for [`BLINK_ON_DELAY`].
    #[default]
    LedOn,
    /// LED off for [`BLINK_OFF_DELAY`], then any pending refresh is drawn.
    LedOff,
}

/// Runs the status-LED heartbeat and services refresh requests from the [`InputController`].
///
/// Each period is LED on, wait [`BLINK_ON_DELAY`], LED off, wait [`BLINK_OFF_DELAY`], then
/// redraw if a refresh is pending. Refreshes are not checked during the waits, so a redraw
/// can lag a press by up to one period.
///
/// Time comes from the injected [`DelayNs`]. On the board that is `embassy_time::Delay`.
pub struct MainLoop<'a, Led, Tx, D> {
    status_led: Led,
    renderer: DigitRenderer<Tx>,
    delay: D,
    input: &'a InputController,
    color: Color,
    heartbeat: Heartbeat,
}

impl<'a, Led, Tx, D> MainLoop<'a, Led, Tx, D>
where
    Led: OutputPin,
    Tx: PixelTransmitter,
    D: DelayNs,
{
    #[must_use]
    pub const fn new(
        status_led: Led,
        renderer: DigitRenderer<Tx>,
        delay: D,
        input: &'a InputController,
        color: Color,
    ) -> Self {
        Self {
            status_led,
            renderer,
            delay,
            input,
            color,
            heartbeat: Heartbeat::LedOn,
        }
    }

    /// Draws the current digit, then blinks and redraws forever.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the status LED cannot be driven.
    pub async fn run(&mut self) -> Result<Infallible> {
        self.start().await;
        loop {
            self.run_period().await?;
        }
    }

    /// Draws the current digit once, discarding any refresh already requested.
    pub async fn start(&mut self) {
        let _ = self.input.take_refresh();
        let digit = self.input.digit();
        info!("starting with digit {}", digit);
        self.renderer.render(digit, self.color).await;
    }

    /// Runs one full blink period: [`Heartbeat::LedOn`] then [`Heartbeat::LedOff`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the status LED cannot be driven.
    pub async fn run_period(&mut self) -> Result<()> {
        loop {
            let finished = self.heartbeat == Heartbeat::LedOff;
            self.heartbeat = self.run_and_next().await?;
            if finished {
                return Ok(());
            }
        }
    }

    /// Runs the current phase and returns the next one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the status LED cannot be driven.
    pub async fn run_and_next(&mut self) -> Result<Heartbeat> {
        match self.heartbeat {
            Heartbeat::LedOn => self.run_and_next_led_on().await,
            Heartbeat::LedOff => self.run_and_next_led_off().await,
        }
    }

    async fn run_and_next_led_on(&mut self) -> Result<Heartbeat> {
        self.status_led
            .set_high()
            .map_err(|_| Error::CannotSetOutputState)?;
        self.delay.delay_ms(as_millis(BLINK_ON_DELAY)).await;
        Ok(Heartbeat::LedOff)
    }

    async fn run_and_next_led_off(&mut self) -> Result<Heartbeat> {
        self.status_led
            .set_low()
            .map_err(|_| Error::CannotSetOutputState)?;
        self.delay.delay_ms(as_millis(BLINK_OFF_DELAY)).await;
        if let Some(digit) = self.input.take_refresh() {
            self.renderer.render(digit, self.color).await;
        }
        Ok(Heartbeat::LedOn)
    }

    /// The phase that will run next.
    #[must_use]
    pub const fn heartbeat(&self) -> Heartbeat {
        self.heartbeat
    }

    pub const fn renderer(&self) -> &DigitRenderer<Tx> {
        &self.renderer
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "blink delays are a few hundred milliseconds"
)]
fn as_millis(duration: embassy_time::Duration) -> u32 {
    duration.as_millis() as u32
}
