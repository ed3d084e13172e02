//! Test doubles shared by the unit tests

use std::cell::Cell;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use gallows_display::DisplayBackend;
use gallows_hal::InputPin;

/// Input pin that replays a scripted sequence of button states
///
/// Each read consumes one entry; the last entry repeats forever.
pub struct ScriptPin {
    pressed: Vec<bool>,
    next: Cell<usize>,
}

impl ScriptPin {
    pub fn pressed(script: &[bool]) -> Self {
        Self {
            pressed: script.to_vec(),
            next: Cell::new(0),
        }
    }
}

impl InputPin for ScriptPin {
    fn is_high(&self) -> bool {
        let i = self.next.get();
        self.next.set(i + 1);
        let pressed = self
            .pressed
            .get(i)
            .or(self.pressed.last())
            .copied()
            .unwrap_or(false);
        // Active low
        !pressed
    }
}

/// Delay that only counts
pub struct MockDelay {
    ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { ns: 0 }
    }

    pub fn elapsed_ms(&self) -> u32 {
        (self.ns / 1_000_000) as u32
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns += ns as u64;
    }
}

pub const GRID_COLS: usize = 21;
pub const GRID_ROWS: usize = 6;

/// Character-cell backend that remembers what is on screen
pub struct GridBackend {
    cells: [[char; GRID_COLS]; GRID_ROWS],
    pub clears: usize,
    pub draws: usize,
}

impl GridBackend {
    pub fn new() -> Self {
        Self {
            cells: [[' '; GRID_COLS]; GRID_ROWS],
            clears: 0,
            draws: 0,
        }
    }

    /// A row with trailing blanks removed
    pub fn row(&self, row: usize) -> String {
        let line: String = self.cells[row].iter().collect();
        line.trim_end().into()
    }

    pub fn rows(&self) -> Vec<String> {
        (0..GRID_ROWS).map(|r| self.row(r)).collect()
    }
}

impl DisplayBackend for GridBackend {
    fn clear(&mut self) {
        self.cells = [[' '; GRID_COLS]; GRID_ROWS];
        self.clears += 1;
    }

    fn draw_char(&mut self, row: u8, col: u8, ch: char) {
        self.draws += 1;
        if (row as usize) < GRID_ROWS && (col as usize) < GRID_COLS {
            self.cells[row as usize][col as usize] = ch;
        }
    }

    fn draw_line(&mut self, row: u8, col: u8, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            let col = col as usize + i;
            if col >= GRID_COLS {
                break;
            }
            self.draw_char(row, col as u8, ch);
        }
    }

    fn dimensions(&self) -> (u8, u8) {
        (GRID_COLS as u8, GRID_ROWS as u8)
    }
}
