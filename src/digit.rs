use derive_more::derive::Display;

use crate::{Error, Result};

/// A digit that can be shown on the matrix: always in `0..=9`.
///
/// Stepping saturates at the bounds instead of wrapping.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("{_0}")]
pub struct Digit(u8);

impl Digit {
    /// The smallest digit, shown at power-up.
    pub const MIN: Self = Self(0);
    /// The largest digit.
    pub const MAX: Self = Self(9);
    /// How many digits exist.
    pub const COUNT: usize = 10;

    /// Creates a digit, failing for values above 9.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// The digit as a number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The digit as a table index, always `< Digit::COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One more, or unchanged at 9.
    #[must_use]
    pub const fn saturating_increment(self) -> Self {
        if self.0 < Self::MAX.0 {
            Self(self.0.saturating_add(1))
        } else {
            self
        }
    }

    /// One less, or unchanged at 0.
    #[must_use]
    pub const fn saturating_decrement(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0.saturating_sub(1))
        } else {
            self
        }
    }

    /// Every digit in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_zero_through_nine() {
        for value in 0..=9 {
            assert_eq!(Digit::new(value).map(Digit::get).ok(), Some(value));
        }
    }

    #[test]
    fn new_rejects_ten_and_above() {
        assert!(matches!(Digit::new(10), Err(Error::DigitOutOfRange(10))));
        assert!(matches!(
            Digit::try_from(u8::MAX),
            Err(Error::DigitOutOfRange(255))
        ));
    }

    #[test]
    fn increment_saturates_at_nine() {
        assert_eq!(Digit::MAX.saturating_increment(), Digit::MAX);
        assert_eq!(Digit::MIN.saturating_increment().get(), 1);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        assert_eq!(Digit::MIN.saturating_decrement(), Digit::MIN);
        assert_eq!(Digit::MAX.saturating_decrement().get(), 8);
    }

    #[test]
    fn all_lists_ten_digits_in_order() {
        let mut expected = 0;
        for digit in Digit::all() {
            assert_eq!(u8::from(digit), expected);
            expected += 1;
        }
        assert_eq!(usize::from(expected), Digit::COUNT);
    }
}
