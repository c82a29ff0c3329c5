//! The 5x5 on/off patterns for the digits 0 through 9.
//!
//! Cells are numbered row-major, 0 through 24, in the order the matrix receives them. The
//! patterns are stored in that physical order, so some digits look mirrored when read as
//! text below.

use core::iter::FusedIterator;

use crate::{CELL_COUNT, Digit, ROW_COUNT};

// One bit per column.
const ROW_BITS: u32 = 5;
const ROW_MASK: u32 = 0b1_1111;
const LAST_CELL: usize = CELL_COUNT - 1;

/// A 25-cell on/off mask. Cell 0 is the most significant of the 25 bits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(u32);

impl Glyph {
    /// A glyph with every cell off.
    pub const BLANK: Self = Self(0);

    /// Builds a glyph from five 5-bit rows; the leftmost column is the high bit of each row.
    #[must_use]
    pub const fn from_rows(rows: [u32; ROW_COUNT]) -> Self {
        let mut mask = 0_u32;
        let mut remaining = rows.as_slice();
        while let [row, rest @ ..] = remaining {
            mask = mask.wrapping_shl(ROW_BITS) | (*row & ROW_MASK);
            remaining = rest;
        }
        Self(mask)
    }

    /// The glyph for `digit`.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "Digit::index is always < Digit::COUNT, the table length"
    )]
    pub const fn for_digit(digit: Digit) -> Self {
        GLYPHS[digit.index()]
    }

    /// The raw 25-bit mask.
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Whether cell `index` is lit. Cells past the last one are never lit.
    #[must_use]
    pub fn is_lit(self, index: usize) -> bool {
        LAST_CELL
            .checked_sub(index)
            .and_then(|shift| u32::try_from(shift).ok())
            .and_then(|shift| self.0.checked_shr(shift))
            .is_some_and(|bits| bits & 1 == 1)
    }

    /// How many cells are lit.
    #[must_use]
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    /// The 25 cells in transmission order.
    #[must_use]
    pub const fn cells(self) -> Cells {
        Cells {
            glyph: self,
            index: 0,
        }
    }
}

/// Iterator over a glyph's cells, yielding `true` for lit cells. See [`Glyph::cells`].
#[derive(Clone, Debug)]
pub struct Cells {
    glyph: Glyph,
    index: usize,
}

impl Iterator for Cells {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= CELL_COUNT {
            return None;
        }
        let lit = self.glyph.is_lit(self.index);
        self.index = self.index.saturating_add(1);
        Some(lit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CELL_COUNT.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}

/// Glyphs indexed by digit.
pub const GLYPHS: [Glyph; Digit::COUNT] = [
    Glyph::from_rows([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // 0
    Glyph::from_rows([0b00100, 0b00100, 0b00100, 0b00100, 0b00100]), // 1
    Glyph::from_rows([0b01110, 0b00100, 0b01000, 0b00010, 0b00110]), // 2
    Glyph::from_rows([0b01110, 0b00010, 0b01110, 0b00010, 0b01110]), // 3
    Glyph::from_rows([0b01000, 0b00010, 0b01110, 0b01010, 0b01010]), // 4
    Glyph::from_rows([0b00110, 0b00010, 0b00110, 0b01000, 0b01110]), // 5
    Glyph::from_rows([0b01110, 0b01010, 0b01110, 0b01000, 0b01110]), // 6
    Glyph::from_rows([0b00010, 0b00100, 0b00100, 0b00010, 0b01110]), // 7
    Glyph::from_rows([0b01110, 0b01010, 0b01110, 0b01010, 0b01110]), // 8
    Glyph::from_rows([0b01110, 0b01000, 0b01110, 0b01010, 0b01110]), // 9
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_indexes(glyph: Glyph) -> Vec<usize> {
        glyph
            .cells()
            .enumerate()
            .filter_map(|(index, lit)| lit.then_some(index))
            .collect()
    }

    #[test]
    fn zero_is_a_ring() {
        let glyph = Glyph::for_digit(Digit::MIN);
        assert_eq!(
            lit_indexes(glyph),
            [1, 2, 3, 5, 9, 10, 14, 15, 19, 21, 22, 23]
        );
    }

    #[test]
    fn one_is_the_center_column() {
        let glyph = Glyph::for_digit(Digit::new(1).expect("1 is a digit"));
        assert_eq!(lit_indexes(glyph), [2, 7, 12, 17, 22]);
    }

    #[test]
    fn five_matches_its_rows() {
        let glyph = Glyph::for_digit(Digit::new(5).expect("5 is a digit"));
        assert_eq!(lit_indexes(glyph), [2, 3, 8, 12, 13, 16, 21, 22, 23]);
    }

    #[test]
    fn every_glyph_has_25_cells_and_fits_in_25_bits() {
        for digit in Digit::all() {
            let glyph = Glyph::for_digit(digit);
            assert_eq!(glyph.cells().len(), CELL_COUNT);
            assert_eq!(glyph.cells().count(), CELL_COUNT);
            assert_eq!(glyph.mask() >> CELL_COUNT, 0);
            assert_ne!(glyph, Glyph::BLANK);
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        for (left_index, left) in GLYPHS.iter().enumerate() {
            for right in GLYPHS.iter().skip(left_index + 1) {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn first_and_last_cells_are_the_mask_ends() {
        let glyph = Glyph::from_rows([0b10000, 0, 0, 0, 0b00001]);
        assert_eq!(glyph.mask(), (1 << 24) | 1);
        assert!(glyph.is_lit(0));
        assert!(glyph.is_lit(CELL_COUNT - 1));
        assert_eq!(glyph.lit_count(), 2);
    }

    #[test]
    fn cells_past_the_end_are_dark() {
        let glyph = GLYPHS[8];
        assert!(!glyph.is_lit(CELL_COUNT));
        assert!(!glyph.is_lit(usize::MAX));
        assert_eq!(glyph.lit_count(), 13);
    }
}
