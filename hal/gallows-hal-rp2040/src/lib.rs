//! RP2040 board support for the Gallows firmware
//!
//! Wraps `embassy-rp` GPIO in the infallible `gallows-hal` pin traits and
//! wires the display and buttons to their fixed pins.

#![no_std]

pub mod board;
pub mod gpio;

pub use board::{Board, Display, Keypad};
pub use gpio::{InputLine, OutputLine};
