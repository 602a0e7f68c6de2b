//! ## Bit Math
//! Scans for the most and least significant set bits of a 256-bit word.

use alloy_primitives::U256;

/// Bit scan operations on a 256-bit word.
///
/// Both scans reject the zero word, which has no set bit to report. Callers test the masked
/// word for zero before scanning.
pub trait BitMath {
    /// The index of the highest set bit, i.e. the largest `i` such that `self >= 2**i`.
    fn most_significant_bit(self) -> u8;

    /// The index of the lowest set bit, i.e. the largest `i` such that `self % 2**i == 0`.
    fn least_significant_bit(self) -> u8;
}

impl BitMath for U256 {
    #[inline]
    fn most_significant_bit(self) -> u8 {
        assert!(!self.is_zero(), "ZERO");
        255 - self.leading_zeros() as u8
    }

    #[inline]
    fn least_significant_bit(self) -> u8 {
        assert!(!self.is_zero(), "ZERO");
        self.trailing_zeros() as u8
    }
}
