#[cfg(doc)]
use crate::prelude::*;

/// Errors returned by the tick bitmap operations.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Thrown when [`TickBitmapProvider::next_initialized_tick_within_one_word`] is asked to
    /// search above the largest representable tick, where the successor tick would wrap around
    /// into an unrelated word.
    #[cfg_attr(feature = "std", error("Tick index overflow"))]
    TickIndexOverflow,
}
