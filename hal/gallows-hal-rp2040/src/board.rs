//! Board pin assignment
//!
//! | Signal | GPIO |
//! |--------|------|
//! | Display SCLK | 18 |
//! | Display DIN | 19 |
//! | Display D/C | 20 |
//! | Display RST | 21 |
//! | Button UP | 2 |
//! | Button RIGHT | 3 |
//! | Button LEFT | 4 |
//! | Button DOWN | 5 |
//!
//! Buttons short to ground and use the internal pull-ups.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

use gallows_core::input::Buttons;
use gallows_display::{BitBang, Pcd8544};

use crate::gpio::{InputLine, OutputLine};

/// GPIO numbers, for logging
pub mod pins {
    pub const SCLK: u8 = 18;
    pub const DIN: u8 = 19;
    pub const DC: u8 = 20;
    pub const RST: u8 = 21;
    pub const UP: u8 = 2;
    pub const RIGHT: u8 = 3;
    pub const LEFT: u8 = 4;
    pub const DOWN: u8 = 5;
}

/// Display driver on the board's pins
pub type Display = Pcd8544<
    BitBang<OutputLine<'static>, OutputLine<'static>>,
    OutputLine<'static>,
    OutputLine<'static>,
>;

/// Button reader on the board's pins
pub type Keypad = Buttons<InputLine<'static>>;

/// Everything the game loop drives
pub struct Board {
    pub display: Display,
    pub buttons: Keypad,
}

impl Board {
    /// Claim the pins from `p` and build the drivers
    ///
    /// The display is left in reset; call
    /// [`Pcd8544::initialize`] before drawing.
    pub fn new(p: Peripherals, settle_ms: u32) -> Self {
        let bus = BitBang::new(
            OutputLine::new(Output::new(p.PIN_18, Level::Low)),
            OutputLine::new(Output::new(p.PIN_19, Level::Low)),
        );
        let display = Pcd8544::new(
            bus,
            OutputLine::new(Output::new(p.PIN_20, Level::Low)),
            OutputLine::new(Output::new(p.PIN_21, Level::Low)),
        );

        let buttons = Buttons::with_settle_ms(
            InputLine::new(Input::new(p.PIN_2, Pull::Up)),
            InputLine::new(Input::new(p.PIN_5, Pull::Up)),
            InputLine::new(Input::new(p.PIN_4, Pull::Up)),
            InputLine::new(Input::new(p.PIN_3, Pull::Up)),
            settle_ms,
        );

        Self { display, buttons }
    }
}
