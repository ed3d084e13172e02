//! Screen layouts
//!
//! Every redraw starts from a cleared surface and draws the whole page.

use gallows_display::DisplayBackend;

use crate::game::{Round, ALPHABET};

use super::{Page, Session, VISIBLE_LINES};

const MENU_LABELS: [&str; 3] = ["1. Start Game", "2. How To Play", "3. About"];

const STRIKES_LABEL: &str = "Strikes: ";

/// Letters on the first carousel row; the rest go on the second
const CAROUSEL_SPLIT: usize = 16;

const HINT_ROW: u8 = VISIBLE_LINES;

impl Session {
    /// Redraw the screen if anything changed since the last render
    ///
    /// Returns true if the screen was redrawn.
    pub fn render<B: DisplayBackend>(&mut self, display: &mut B) -> bool {
        if !self.take_dirty() {
            return false;
        }

        display.clear();
        match self.page() {
            Page::Menu => draw_menu(display, self.selection()),
            Page::Play => {
                if let Some(round) = self.round() {
                    draw_round(display, round, self.scroll() as usize);
                }
            }
            page @ (Page::Help | Page::About) => {
                draw_text(display, page.text(), self.scroll() as usize)
            }
            Page::Win => display.draw_line(1, 5, "You Won!"),
            Page::Lose => {
                display.draw_line(1, 4, "You Lost!");
                if let Some(word) = self.last_word() {
                    display.draw_line(3, 0, "Word: ");
                    display.draw_line(3, 6, word);
                }
            }
        }
        display.draw_line(HINT_ROW, 0, self.page().hints());
        true
    }
}

fn draw_menu<B: DisplayBackend>(display: &mut B, selection: u8) {
    for (row, label) in (0u8..).zip(MENU_LABELS) {
        if row == selection {
            display.draw_char(row, 0, '>');
            display.draw_line(row, 1, label);
        } else {
            display.draw_line(row, 0, label);
        }
    }
}

fn draw_text<B: DisplayBackend>(display: &mut B, text: &[&str], scroll: usize) {
    let visible = text.iter().skip(scroll).take(VISIBLE_LINES as usize);
    for (row, line) in (0u8..).zip(visible) {
        display.draw_line(row, 0, line);
    }
}

fn draw_round<B: DisplayBackend>(display: &mut B, round: &Round, selected: usize) {
    display.draw_line(0, 0, STRIKES_LABEL);
    let marks = STRIKES_LABEL.len() as u8;
    for slot in 0..round.strike_limit() {
        let mark = if slot < round.strikes() { 'X' } else { '_' };
        display.draw_char(0, marks + slot, mark);
    }

    for (col, shown) in (0u8..).zip(round.revealed()) {
        display.draw_char(1, col, shown.unwrap_or('_'));
    }

    display.draw_line(2, 0, round.history());

    let (top, bottom) = ALPHABET.split_at(CAROUSEL_SPLIT);
    draw_carousel_row(display, 3, top, Some(selected));
    draw_carousel_row(display, 4, bottom, selected.checked_sub(CAROUSEL_SPLIT));
}

/// One row of the alphabet, with `>` in front of the selected letter
///
/// Letters after the marker shift one cell right.
fn draw_carousel_row<B: DisplayBackend>(
    display: &mut B,
    row: u8,
    letters: &[char],
    selected: Option<usize>,
) {
    let mut col = 0u8;
    for (i, &letter) in letters.iter().enumerate() {
        if selected == Some(i) {
            display.draw_char(row, col, '>');
            col += 1;
        }
        display.draw_char(row, col, letter);
        col += 1;
    }
}
