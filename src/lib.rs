//! Show a single digit on a 5x5 WS2812 matrix, stepped by two push-buttons.
//!
//! Runs on a Raspberry Pi Pico (RP2040). Two buttons wired to ground raise and lower a digit
//! in `0..=9`, the matrix redraws it, and a status LED blinks a heartbeat.
//!
//! # Glossary
//!
//! - **Edge**: a falling edge on a button pin. [`InputController::on_edge`] turns it into a
//!   digit change if it is outside the debounce window.
//! - **Refresh request**: the single-slot signal from the edge handlers to the [`MainLoop`],
//!   carrying the digit to draw.
//! - **GRB**: the WS2812 wire order. Green is sent first, then red, then blue.
//!
//! The board-independent pieces ([`glyph`], [`input`], [`renderer`], [`main_loop`]) also build
//! on the host with the `host` feature, which is how the tests run.
#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: a board must be selected (unless testing with host feature)
#[cfg(all(not(feature = "pico1"), not(feature = "host")))]
compile_error!("Must enable the board feature 'pico1' (or 'host' for testing)");

#[cfg(all(feature = "pico1", feature = "host"))]
compile_error!("Cannot enable both 'pico1' and 'host' features simultaneously");

#[macro_use]
mod fmt;

mod digit;
mod error;
pub mod glyph;
pub mod input;
pub mod main_loop;
pub mod pixel;
pub mod renderer;
mod shared_constants;

// These modules require embassy_rp and are excluded when testing on host
#[cfg(all(feature = "pico1", feature = "arm"))]
pub mod buttons;
#[cfg(feature = "pico1")]
pub mod hardware;
#[cfg(feature = "pico1")]
#[doc(hidden)]
pub mod pio_irqs;
#[cfg(feature = "pico1")]
pub mod ws2812;

// Re-export commonly used items
pub use digit::Digit;
pub use error::{Error, Result};
pub use glyph::Glyph;
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
pub use input::{EdgeOutcome, InputController, Line};
pub use main_loop::{Heartbeat, MainLoop};
pub use pixel::{Color, PixelTransmitter, colors, pack_grb};
pub use renderer::DigitRenderer;
pub use shared_constants::*;
