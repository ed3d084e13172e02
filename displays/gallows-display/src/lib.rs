//! PCD8544 display stack for the Gallows firmware
//!
//! Layers, bottom up:
//!
//! - [`transport`]: bit-banged serial output on two GPIO lines
//! - [`pcd8544`]: command/data framing, reset and init sequence, cursor
//!   addressing and full-screen clear
//! - [`font`]: the 3x8 glyph table for printable ASCII
//! - [`raster`]: character and line drawing with edge clipping
//! - [`backend`]: the [`DisplayBackend`] trait the UI renders through
//!
//! Everything here is blocking and infallible. The panel has no way to
//! acknowledge a write, so there is nothing to report back.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod font;
pub mod pcd8544;
pub mod raster;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-export key types
pub use backend::DisplayBackend;
pub use pcd8544::{Cursor, InitParams, Mode, Pcd8544, HEIGHT, RAM_SIZE, ROWS, WIDTH};
pub use raster::{CHAR_ADVANCE, TEXT_COLS};
pub use transport::{BitBang, SerialWrite};
