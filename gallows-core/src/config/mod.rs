//! Configuration
//!
//! Type definitions and the `game.toml` parser.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::{DisplayConfig, GameConfig, GameSettings, InputConfig};
