//! Configuration loading
//!
//! `game.toml` is compiled into the image. The build script runs the same
//! parser over it, so a bad file fails the build instead of reaching here.

use defmt::*;
use gallows_core::config::{parse_config, GameConfig};

/// Embedded configuration (compiled into firmware)
/// Edit game.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../game.toml");

pub fn load() -> GameConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Configuration loaded from game.toml");
            config
        }
        Err(e) => {
            warn!("game.toml rejected ({}), using defaults", e);
            GameConfig::default()
        }
    }
}
