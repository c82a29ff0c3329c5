//! Draws a [`Digit`] on the matrix through a [`PixelTransmitter`].

use crate::{Color, Digit, Glyph, PixelTransmitter, pack_grb};

/// Turns a digit and color into 25 cell values, one [`PixelTransmitter::send`] per cell.
///
/// # Example
///
/// ```
/// use digit_matrix::{Color, Digit, DigitRenderer, PixelTransmitter};
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl PixelTransmitter for Count {
///     async fn send(&mut self, _packed_grb: u32) {
///         self.0 += 1;
///     }
/// }
///
/// let mut renderer = DigitRenderer::new(Count::default());
/// embassy_futures::block_on(renderer.render(Digit::MAX, Color::new(1, 1, 1)));
/// assert_eq!(renderer.transmitter().0, 25);
/// ```
pub struct DigitRenderer<T> {
    transmitter: T,
}

impl<T: PixelTransmitter> DigitRenderer<T> {
    #[must_use]
    pub const fn new(transmitter: T) -> Self {
        Self { transmitter }
    }

    /// Sends the glyph for `digit`, lit cells in `color` and the rest off, in cell order.
    pub async fn render(&mut self, digit: Digit, color: Color) {
        let lit = pack_grb(color);
        for cell in Glyph::for_digit(digit).cells() {
            self.transmitter.send(if cell { lit } else { 0 }).await;
        }
        self.transmitter.end_frame().await;
        debug!("rendered digit {}", digit);
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn into_transmitter(self) -> T {
        self.transmitter
    }
}
