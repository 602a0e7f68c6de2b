use alloy_primitives::Signed;
use core::{
    fmt::Debug,
    hash::Hash,
    ops::{Add, BitAnd, Div, Rem, Shl, Shr, Sub},
};
use num_integer::Integer;

/// The trait for signed tick indexes used across [`TickBitmap`](crate::entities::TickBitmap) and
/// [`TickBitmapProvider`](crate::entities::TickBitmapProvider).
///
/// Implemented for [`i32`] and [`Signed`].
pub trait TickIndex:
    Copy
    + Debug
    + Default
    + Hash
    + Ord
    + BitAnd<Output = Self>
    + Add<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Sub<Output = Self>
    + Shl<i32, Output = Self>
    + Shr<i32, Output = Self>
    + TryFrom<i32, Error: Debug>
    + TryInto<i32, Error: Debug>
    + Send
    + Sync
{
    const ZERO: Self;
    const ONE: Self;
    /// The smallest representable tick index.
    const MIN: Self;
    /// The largest representable tick index.
    const MAX: Self;

    /// The successor tick, or `None` at [`Self::MAX`].
    #[inline]
    fn checked_add_one(self) -> Option<Self> {
        if self == Self::MAX {
            None
        } else {
            Some(self + Self::ONE)
        }
    }

    /// Divides the tick by `tick_spacing`, rounding toward negative infinity.
    #[inline]
    fn compress(self, tick_spacing: Self) -> Self {
        assert!(tick_spacing > Self::ZERO, "TICK_SPACING");
        if self % tick_spacing < Self::ZERO {
            self / tick_spacing - Self::ONE
        } else {
            self / tick_spacing
        }
    }

    /// Splits the tick into the index of the word holding its flag and the bit position within
    /// that word.
    ///
    /// The word index is the floor of `self / 256` and the bit position is the Euclidean
    /// remainder, so the bit position stays in `[0, 255]` for negative ticks and
    /// `(word_pos << 8) + bit_pos` always reconstructs `self`.
    #[inline]
    fn position(self) -> (Self, u8) {
        let word_pos = self >> 8;
        let bit_pos = (self & Self::try_from(0xff).unwrap()).try_into().unwrap() as u8;
        debug_assert!((word_pos << 8) + Self::try_from(bit_pos as i32).unwrap() == self);
        (word_pos, bit_pos)
    }
}

impl TickIndex for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;

    #[inline]
    fn position(self) -> (Self, u8) {
        let (word_pos, bit_pos) = self.div_mod_floor(&256);
        (word_pos, bit_pos as u8)
    }
}

impl<const BITS: usize, const LIMBS: usize> TickIndex for Signed<BITS, LIMBS> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const MIN: Self = Self::MIN;
    const MAX: Self = Self::MAX;
}
