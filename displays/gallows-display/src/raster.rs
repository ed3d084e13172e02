//! Glyph rasterizer
//!
//! Draws characters from the [`font`](crate::font) table straight into
//! controller RAM. Every glyph is 3 pixel columns plus one blank separator
//! column, so a character cell is [`CHAR_ADVANCE`] pixels wide and a row
//! holds [`TEXT_COLS`] characters.
//!
//! Nothing wraps. A glyph that runs past the right edge is cut off, and a
//! glyph that starts outside the surface is not drawn at all.

use gallows_hal::OutputPin;

use crate::font::{self, GLYPH_WIDTH};
use crate::pcd8544::{Pcd8544, ROWS, WIDTH};
use crate::transport::SerialWrite;

/// Pixel columns per character cell
pub const CHAR_ADVANCE: u8 = GLYPH_WIDTH as u8 + 1;

/// Whole character cells per row
pub const TEXT_COLS: u8 = WIDTH / CHAR_ADVANCE;

/// Pixel column of character cell `col`
///
/// Saturates instead of wrapping so huge cell indices stay off-screen.
pub fn cell_to_pixel(col: u8) -> u8 {
    col.saturating_mul(CHAR_ADVANCE)
}

impl<BUS, DC, RST> Pcd8544<BUS, DC, RST>
where
    BUS: SerialWrite,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Draw `ch` in character cell `col` of bank `row`
    pub fn draw_char(&mut self, row: u8, col: u8, ch: char) {
        self.draw_char_px(row, cell_to_pixel(col), ch);
    }

    /// Draw `ch` with its left edge at pixel column `x` of bank `row`
    ///
    /// Emits the cursor pair, up to three glyph columns and, if there is
    /// still room, one blank separator column.
    pub fn draw_char_px(&mut self, row: u8, x: u8, ch: char) {
        if row >= ROWS || x >= WIDTH {
            return;
        }

        let glyph = font::glyph(ch);
        self.set_cursor(row, x);

        let mut x = x;
        for &column in glyph.iter() {
            if x >= WIDTH {
                return;
            }
            self.send_data(column);
            x += 1;
        }
        if x < WIDTH {
            self.send_data(0x00);
        }
    }

    /// Draw `text` from character cell `col` of bank `row`, left to right
    ///
    /// Stops at the end of the text or at the right edge, whichever comes
    /// first.
    pub fn draw_line(&mut self, row: u8, col: u8, text: &str) {
        let mut x = cell_to_pixel(col);
        for ch in text.chars() {
            if x >= WIDTH {
                break;
            }
            self.draw_char_px(row, x, ch);
            x = x.saturating_add(CHAR_ADVANCE);
        }
    }
}
