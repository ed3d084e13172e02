//! Display backend trait
//!
//! The text-cell interface the UI renders through. The PCD8544 driver
//! implements it directly; tests implement it with a character grid.

use gallows_hal::OutputPin;

use crate::pcd8544::{Pcd8544, ROWS};
use crate::raster::TEXT_COLS;
use crate::transport::SerialWrite;

/// Text-mode drawing surface
///
/// Coordinates are character cells: `row` is a text row, `col` a character
/// column. Drawing outside the surface is clipped silently.
pub trait DisplayBackend {
    /// Blank the whole surface
    fn clear(&mut self);

    /// Draw one character
    fn draw_char(&mut self, row: u8, col: u8, ch: char);

    /// Draw a run of characters left to right, without wrapping
    fn draw_line(&mut self, row: u8, col: u8, text: &str);

    /// Surface size as (columns, rows) in character cells
    fn dimensions(&self) -> (u8, u8);
}

impl<BUS, DC, RST> DisplayBackend for Pcd8544<BUS, DC, RST>
where
    BUS: SerialWrite,
    DC: OutputPin,
    RST: OutputPin,
{
    fn clear(&mut self) {
        self.clear_screen();
    }

    fn draw_char(&mut self, row: u8, col: u8, ch: char) {
        Pcd8544::draw_char(self, row, col, ch);
    }

    fn draw_line(&mut self, row: u8, col: u8, text: &str) {
        Pcd8544::draw_line(self, row, col, text);
    }

    fn dimensions(&self) -> (u8, u8) {
        (TEXT_COLS, ROWS)
    }
}

impl<T: DisplayBackend + ?Sized> DisplayBackend for &mut T {
    fn clear(&mut self) {
        T::clear(self)
    }

    fn draw_char(&mut self, row: u8, col: u8, ch: char) {
        T::draw_char(self, row, col, ch)
    }

    fn draw_line(&mut self, row: u8, col: u8, text: &str) {
        T::draw_line(self, row, col, text)
    }

    fn dimensions(&self) -> (u8, u8) {
        T::dimensions(self)
    }
}
