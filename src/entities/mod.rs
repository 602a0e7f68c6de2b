pub mod tick;
pub mod tick_bitmap;

pub use tick::TickIndex;
pub use tick_bitmap::{TickBitmap, TickBitmapProvider};
