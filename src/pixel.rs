//! The boundary to the LED data line: colors, GRB packing, and the [`PixelTransmitter`] trait.

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from `smart_leds`.
pub type Color = smart_leds::RGB8;

/// Packs a color as `0x00GGRRBB`, the order WS2812 cells expect on the wire.
///
/// ```
/// use digit_matrix::{Color, pack_grb};
///
/// assert_eq!(pack_grb(Color::new(0x11, 0x22, 0x33)), 0x0022_1133);
/// ```
#[must_use]
pub const fn pack_grb(color: Color) -> u32 {
    u32::from_be_bytes([0, color.g, color.r, color.b])
}

/// Sends one packed cell value at a time to the matrix.
///
/// Values arrive in increasing cell order. Each `send` completes before the next one starts.
/// Transmission cannot fail.
pub trait PixelTransmitter {
    /// Sends one cell. `packed_grb` is `0x00GGRRBB` (see [`pack_grb`]); `0` is off.
    async fn send(&mut self, packed_grb: u32);

    /// Called after the last cell of a frame.
    async fn end_frame(&mut self) {}
}

impl<T: PixelTransmitter> PixelTransmitter for &mut T {
    async fn send(&mut self, packed_grb: u32) {
        (**self).send(packed_grb).await;
    }

    async fn end_frame(&mut self) {
        (**self).end_frame().await;
    }
}
