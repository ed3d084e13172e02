//! Direction buttons
//!
//! Four active-low push buttons, read by polling with a two-sample
//! debounce.

pub mod buttons;

pub use buttons::Buttons;

/// Default settle time between the two debounce samples
pub const DEFAULT_SETTLE_MS: u32 = 30;

/// One of the four direction buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// Order in which buttons are checked each poll cycle
    ///
    /// When several are held, only the first one found here produces an
    /// event.
    pub const PRIORITY: [Button; 4] = [Button::Right, Button::Down, Button::Up, Button::Left];
}
