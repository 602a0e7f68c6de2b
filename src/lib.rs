//! # tick-bitmap
//!
//! A compact, word-packed index of initialized ticks for concentrated liquidity
//! pools.
//!
//! ## Features
//!
//! - One 256-bit word per 256 consecutive ticks; flipping a flag and finding the
//!   nearest initialized tick within a word each touch exactly one word
//! - Generic over the tick index type via [`TickIndex`](entities::TickIndex),
//!   implemented for [`i32`] and [`Signed`](alloy_primitives::Signed) integers
//! - The word store is pluggable through
//!   [`TickBitmapProvider`](entities::TickBitmapProvider); the bundled
//!   [`TickBitmap`](entities::TickBitmap) keeps words in a hash map where an
//!   absent word reads as zero
//! - `no_std` by default, with a `std` feature

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod constants;
pub mod entities;
pub mod error;
pub mod utils;

pub mod prelude {
    pub use crate::{constants::*, entities::*, error::*, utils::*};
}
