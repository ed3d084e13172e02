//! Configuration type definitions
//!
//! Every field has a default matching the stock hardware, so an empty
//! `game.toml` gives a working device.

use gallows_display::pcd8544::MIN_RESET_HOLD_MS;
use gallows_display::InitParams;

use crate::game::MAX_STRIKES;
use crate::input::DEFAULT_SETTLE_MS;
use crate::rng::DEFAULT_SEED;

/// Longest accepted delay value, in milliseconds
pub const MAX_DELAY_MS: u32 = 1000;

/// `[game]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSettings {
    /// Word picker seed
    pub seed: u32,
    /// Strikes that end a round, 1 to [`MAX_STRIKES`]
    pub strike_limit: u8,
    /// Pause after each play-screen redraw
    pub frame_delay_ms: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            strike_limit: MAX_STRIKES,
            frame_delay_ms: 50,
        }
    }
}

/// `[input]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Delay between the two debounce samples
    pub settle_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

/// `[display]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub reset_hold_ms: u32,
    /// Contrast, 0x00-0x7F
    pub vop: u8,
    /// 0-3
    pub temp_coefficient: u8,
    /// 0-7
    pub bias: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let params = InitParams::default();
        Self {
            reset_hold_ms: params.reset_hold_ms,
            vop: params.vop,
            temp_coefficient: params.temp_coefficient,
            bias: params.bias,
        }
    }
}

impl DisplayConfig {
    /// Parameters for [`Pcd8544::initialize`](gallows_display::Pcd8544::initialize)
    pub fn init_params(&self) -> InitParams {
        InitParams {
            vop: self.vop,
            temp_coefficient: self.temp_coefficient,
            bias: self.bias,
            reset_hold_ms: self.reset_hold_ms.max(MIN_RESET_HOLD_MS),
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    pub game: GameSettings,
    pub input: InputConfig,
    pub display: DisplayConfig,
}
