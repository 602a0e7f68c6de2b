//! ## Tick Bitmap
//! [`TickBitmap`] stores the initialized state of ticks in packed 256-bit words keyed by word
//! index. The [`TickBitmapProvider`] trait implements
//! [`flip_tick`](TickBitmapProvider::flip_tick) and
//! [`next_initialized_tick_within_one_word`](TickBitmapProvider::next_initialized_tick_within_one_word)
//! for any word store that implements [`get_word`](TickBitmapProvider::get_word) and
//! [`set_word`](TickBitmapProvider::set_word).

use crate::prelude::*;
use alloy_primitives::{
    aliases::I24,
    map::{FxBuildHasher, HashMap},
    U256,
};
use derive_more::{Deref, From};

/// An `Fx`-hashed map, equivalent to [`rustc_hash::FxHashMap`], usable in `no_std`.
type FxHashMap<K, V> = HashMap<K, V, FxBuildHasher>;

/// Provides the tick bitmap operations for a word store keyed by word index.
///
/// The store is logically total: [`get_word`](Self::get_word) returns the zero word for indexes
/// never written. Every operation reads or writes exactly one word, so a search bounds its cost
/// to the word containing the query and callers chain across words by re-invoking with the
/// returned word edge.
pub trait TickBitmapProvider {
    type Index: TickIndex;

    /// Get the bitmap word at a specific index
    fn get_word(&self, index: Self::Index) -> Result<U256, Error>;

    /// Store the bitmap word at a specific index
    fn set_word(&mut self, index: Self::Index, word: U256) -> Result<(), Error>;

    /// Flips the initialized state of `tick` from false to true, or vice versa.
    ///
    /// `tick` is a compressed index: callers with a tick spacing divide by it first, rounding
    /// toward negative infinity ([`TickIndex::compress`]).
    #[inline]
    fn flip_tick(&mut self, tick: Self::Index) -> Result<(), Error> {
        let (word_pos, bit_pos) = tick.position();
        let word = self.get_word(word_pos)?;
        self.set_word(word_pos, word ^ ONE << bit_pos)
    }

    /// Whether `tick` is initialized.
    #[inline]
    fn is_initialized(&self, tick: Self::Index) -> Result<bool, Error> {
        let (word_pos, bit_pos) = tick.position();
        let word = self.get_word(word_pos)?;
        Ok(word & (ONE << bit_pos) != U256::ZERO)
    }

    /// Returns the next initialized tick contained in the same word as `tick`, or the word edge
    /// when the scanned range holds none.
    ///
    /// Searches at or below `tick` when `lte` is true, strictly above it otherwise. When no
    /// initialized tick exists in the scanned part of the word, `initialized` is false and the
    /// returned tick is the word boundary in the search direction, so the caller can resume in
    /// the adjacent word without special-casing "not found".
    #[inline]
    fn next_initialized_tick_within_one_word(
        &self,
        tick: Self::Index,
        lte: bool,
    ) -> Result<(Self::Index, bool), Error> {
        if lte {
            let (word_pos, bit_pos) = tick.position();
            // all the 1s at or to the right of the current `bit_pos`
            // (2 << bit_pos) may overflow but fine since 2 << 255 = 0
            let mask = (TWO << bit_pos) - ONE;
            let masked = self.get_word(word_pos)? & mask;
            let initialized = masked != U256::ZERO;
            let msb = if initialized {
                masked.most_significant_bit() as i32
            } else {
                0
            }
            .try_into()
            .unwrap();
            Ok(((word_pos << 8) + msb, initialized))
        } else {
            // start from the word of the next tick, since the current tick state doesn't matter
            let tick = tick.checked_add_one().ok_or(Error::TickIndexOverflow)?;
            let (word_pos, bit_pos) = tick.position();
            // all the 1s at or to the left of the `bit_pos`
            let mask = U256::ZERO - (ONE << bit_pos);
            let masked = self.get_word(word_pos)? & mask;
            let initialized = masked != U256::ZERO;
            let lsb = if initialized {
                masked.least_significant_bit() as i32
            } else {
                255
            }
            .try_into()
            .unwrap();
            Ok(((word_pos << 8) + lsb, initialized))
        }
    }
}

/// An in-memory tick bitmap: one 256-bit word per 256 consecutive ticks, keyed by word index.
///
/// Absent words read as zero, and a word whose last set bit is cleared is removed, so the map
/// only ever holds words with at least one initialized tick.
#[derive(Clone, Debug, Default, Deref, Eq, From, PartialEq)]
pub struct TickBitmap<I: core::hash::Hash + Eq = I24>(FxHashMap<I, U256>);

impl<I: TickIndex> TickBitmap<I> {
    /// Builds a bitmap with every tick in `ticks` initialized.
    #[inline]
    #[must_use]
    pub fn from_ticks(ticks: impl IntoIterator<Item = I>) -> Self {
        let mut bitmap = FxHashMap::default();
        for tick in ticks {
            let (word_pos, bit_pos) = tick.position();
            let word = bitmap.get(&word_pos).copied().unwrap_or(U256::ZERO);
            bitmap.insert(word_pos, word | ONE << bit_pos);
        }
        Self(bitmap)
    }
}

impl<I: TickIndex> TickBitmapProvider for TickBitmap<I> {
    type Index = I;

    #[inline]
    fn get_word(&self, index: Self::Index) -> Result<U256, Error> {
        Ok(self.0.get(&index).copied().unwrap_or(U256::ZERO))
    }

    #[inline]
    fn set_word(&mut self, index: Self::Index, word: U256) -> Result<(), Error> {
        // an all-zero word collapses to the map's default, so the entry is reclaimed
        if word.is_zero() {
            self.0.remove(&index);
        } else {
            self.0.insert(index, word);
        }
        Ok(())
    }
}
