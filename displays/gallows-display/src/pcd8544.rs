//! PCD8544 LCD controller driver
//!
//! Driver for the 84x48 PCD8544 (Nokia 5110 style) monochrome LCD over a
//! bit-banged serial link. A mode line selects whether each byte is a
//! command or pixel data.
//!
//! The driver keeps no framebuffer. Pixel bytes go straight into the
//! controller's RAM, which is organised as 6 rows of 84 columns, one byte
//! per column covering 8 vertical pixels. The controller's write pointer is
//! mirrored in a shadow [`Cursor`] so callers never have to trust the
//! device's position between writes.

use embedded_hal::delay::DelayNs;
use gallows_hal::OutputPin;

use crate::transport::SerialWrite;

/// Surface width in pixel columns
pub const WIDTH: u8 = 84;

/// Surface height in pixel rows
pub const HEIGHT: u8 = 48;

/// Number of 8-pixel rows (banks)
pub const ROWS: u8 = HEIGHT / 8;

/// Addressable bytes of display RAM
pub const RAM_SIZE: usize = WIDTH as usize * ROWS as usize;

/// Minimum hold time for the reset pulse
pub const MIN_RESET_HOLD_MS: u32 = 20;

/// PCD8544 commands
pub mod cmd {
    /// Function set: `0x20 | PD << 2 | V << 1 | H`
    pub const FUNCTION_SET: u8 = 0x20;
    /// Function set flag: use the extended instruction set
    pub const EXTENDED: u8 = 0x01;
    /// Function set flag: vertical addressing
    pub const VERTICAL: u8 = 0x02;
    /// Function set flag: power down
    pub const POWER_DOWN: u8 = 0x04;

    /// Display control, normal mode
    pub const DISPLAY_NORMAL: u8 = 0x0C;
    /// Display control, inverse video
    pub const DISPLAY_INVERSE: u8 = 0x0D;
    /// Display control, blank
    pub const DISPLAY_BLANK: u8 = 0x08;

    /// Set column (X) address, basic set: `0x80 | x`
    pub const SET_X: u8 = 0x80;
    /// Set row (Y) address, basic set: `0x40 | y`
    pub const SET_Y: u8 = 0x40;

    /// Temperature coefficient, extended set: `0x04 | tc`
    pub const SET_TEMP_COEFFICIENT: u8 = 0x04;
    /// Bias system, extended set: `0x10 | bs`
    pub const SET_BIAS: u8 = 0x10;
    /// Operating voltage (contrast), extended set: `0x80 | vop`
    pub const SET_VOP: u8 = 0x80;
}

/// Level of the command/data select line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// D/C low
    Command,
    /// D/C high
    Data,
}

/// Controller write position
///
/// `row` is a bank index (0-5), `col` a pixel column (0-83).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub row: u8,
    pub col: u8,
}

impl Cursor {
    /// Step one column right, wrapping to the next row and then to the top,
    /// the way the controller does in horizontal addressing mode
    fn advance(&mut self) {
        self.col += 1;
        if self.col >= WIDTH {
            self.col = 0;
            self.row += 1;
            if self.row >= ROWS {
                self.row = 0;
            }
        }
    }
}

/// Parameters written during [`Pcd8544::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitParams {
    /// Contrast, 7 bits
    pub vop: u8,
    /// Temperature coefficient, 0-3
    pub temp_coefficient: u8,
    /// Bias system, 0-7
    pub bias: u8,
    /// How long reset is held low
    pub reset_hold_ms: u32,
}

impl Default for InitParams {
    fn default() -> Self {
        Self {
            vop: 0x21,
            temp_coefficient: 0,
            bias: 4,
            reset_hold_ms: MIN_RESET_HOLD_MS,
        }
    }
}

impl InitParams {
    /// The command bytes sent after reset, in order
    pub fn command_sequence(&self) -> [u8; 6] {
        [
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | (self.vop & 0x7F),
            cmd::SET_TEMP_COEFFICIENT | (self.temp_coefficient & 0x03),
            cmd::SET_BIAS | (self.bias & 0x07),
            cmd::FUNCTION_SET,
            cmd::DISPLAY_NORMAL,
        ]
    }
}

/// PCD8544 driver
pub struct Pcd8544<BUS, DC, RST> {
    bus: BUS,
    dc: DC,
    rst: RST,
    /// Shadow of the controller's write pointer
    cursor: Cursor,
    /// Whether the controller is in the extended instruction set
    extended: bool,
}

impl<BUS, DC, RST> Pcd8544<BUS, DC, RST>
where
    BUS: SerialWrite,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a driver
    ///
    /// Holds the controller in reset until [`initialize`](Self::initialize)
    /// is called.
    pub fn new(bus: BUS, mut dc: DC, mut rst: RST) -> Self {
        dc.set_low();
        rst.set_low();
        Self {
            bus,
            dc,
            rst,
            cursor: Cursor::default(),
            extended: false,
        }
    }

    /// Reset the controller and load the operating parameters
    ///
    /// Must run exactly once before any other operation.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D, params: &InitParams) {
        self.rst.set_low();
        delay.delay_ms(params.reset_hold_ms.max(MIN_RESET_HOLD_MS));
        self.rst.set_high();

        // Power-on state of the controller
        self.cursor = Cursor::default();
        self.extended = false;

        for byte in params.command_sequence() {
            self.send_command(byte);
        }
    }

    /// Send one command byte (D/C low)
    pub fn send_command(&mut self, byte: u8) {
        self.select(Mode::Command);
        self.bus.transmit(byte);
        self.track_command(byte);
    }

    /// Send one pixel data byte (D/C high)
    pub fn send_data(&mut self, byte: u8) {
        self.select(Mode::Data);
        self.bus.transmit(byte);
        self.cursor.advance();
    }

    /// Point the controller's write pointer at `row`, `col`
    ///
    /// `row` is a bank (0-5) and `col` a pixel column (0-83). Out-of-range
    /// values are masked the way the controller masks them.
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        self.send_command(cmd::SET_X | (col & 0x7F));
        self.send_command(cmd::SET_Y | (row & 0x07));
    }

    /// Where the next data byte will land
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Zero the entire display RAM
    ///
    /// Writes all 504 bytes in device order starting from (0, 0) and leaves
    /// the cursor back at (0, 0).
    pub fn clear_screen(&mut self) {
        self.set_cursor(0, 0);
        for _ in 0..RAM_SIZE {
            self.send_data(0x00);
        }
    }

    fn select(&mut self, mode: Mode) {
        match mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        }
    }

    /// Mirror the effect of a command on the shadow state
    fn track_command(&mut self, byte: u8) {
        if byte & 0xF8 == cmd::FUNCTION_SET {
            self.extended = byte & cmd::EXTENDED != 0;
            return;
        }
        if self.extended {
            return;
        }
        if byte & cmd::SET_X != 0 {
            let col = byte & 0x7F;
            self.cursor.col = if col < WIDTH { col } else { 0 };
        } else if byte & cmd::SET_Y != 0 {
            let row = byte & 0x07;
            self.cursor.row = if row < ROWS { row } else { 0 };
        }
    }
}
