//! Board-agnostic core logic for the Gallows firmware
//!
//! This crate contains everything that does not touch a specific chip:
//!
//! - Debounced reading of the four direction buttons
//! - The UI state machine and the screen renderer
//! - Word-guessing rounds and the seeded word picker
//! - Built-in text content (word list, instructions, credits)
//! - Configuration types and the `game.toml` parser
//!
//! The whole design is single-threaded and polling. One poll cycle is
//! [`input::Buttons::poll`], then [`ui::Session::handle`],
//! [`ui::Session::update`] and [`ui::Session::render`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod content;
pub mod game;
pub mod input;
pub mod rng;
pub mod ui;

#[cfg(test)]
mod testing;
