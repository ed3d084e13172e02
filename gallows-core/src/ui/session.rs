//! UI session state
//!
//! Input handling is split in two steps. [`Session::handle`] applies a
//! button to the navigation state and only raises the confirm flag for a
//! guess; [`Session::update`] then starts rounds and resolves guesses.
//! Both set the redraw flag whenever the screen would change.

use crate::config::GameSettings;
use crate::content::WORDS;
use crate::game::{Guess, Outcome, Round, ALPHABET, ALPHABET_LEN};
use crate::input::Button;
use crate::rng::Rng;

use super::{Page, MENU_ITEMS, VISIBLE_LINES};

/// What [`Session::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Update {
    /// Nothing to do this cycle
    Idle,
    /// A new round began on `WORDS[index]`
    RoundStarted { index: usize, word: &'static str },
    /// A confirmed guess was applied
    Guessed {
        letter: char,
        guess: Guess,
        outcome: Outcome,
    },
}

/// UI and game state for one power-on session
#[derive(Debug, Clone)]
pub struct Session {
    page: Page,
    /// Highlighted menu item
    selection: u8,
    /// First visible text line, or the carousel position on the play page
    scroll: u8,
    /// Largest value `scroll` may take on the current page
    scroll_max: u8,
    dirty: bool,
    /// A guess is waiting for [`Session::update`]
    confirm: bool,
    /// Active or suspended round
    round: Option<Round>,
    /// Word of the round that ended last
    last_word: Option<&'static str>,
    rng: Rng,
    strike_limit: u8,
    words: &'static [&'static str],
}

impl Session {
    /// Create a session on the main menu using the built-in word list
    pub fn new(settings: &GameSettings) -> Self {
        Self::with_words(settings, &WORDS)
    }

    /// Create a session that draws secret words from `words`
    ///
    /// An empty list falls back to the built-in one.
    pub fn with_words(settings: &GameSettings, words: &'static [&'static str]) -> Self {
        Self {
            page: Page::Menu,
            selection: 0,
            scroll: 0,
            scroll_max: 0,
            dirty: true,
            confirm: false,
            round: None,
            last_word: None,
            rng: Rng::new(settings.seed),
            strike_limit: settings.strike_limit,
            words: if words.is_empty() { &WORDS } else { words },
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selection(&self) -> u8 {
        self.selection
    }

    pub fn scroll(&self) -> u8 {
        self.scroll
    }

    /// Letter under the carousel cursor
    pub fn selected_letter(&self) -> char {
        ALPHABET[(self.scroll as usize).min(ALPHABET_LEN - 1)]
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn last_word(&self) -> Option<&'static str> {
        self.last_word
    }

    /// Returns true if the next [`Session::render`] will redraw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force a full redraw on the next render
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub(super) fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    /// Apply one debounced button press
    ///
    /// Returns true if the press changed anything. Presses that do nothing
    /// on the current page, such as UP at the top of a list, are dropped.
    pub fn handle(&mut self, button: Button) -> bool {
        use Button::*;
        use Page::*;

        let changed = match (self.page, button) {
            (Menu, Up) if self.selection > 0 => {
                self.selection -= 1;
                true
            }
            (Menu, Down) if self.selection + 1 < MENU_ITEMS => {
                self.selection += 1;
                true
            }
            (Menu, Right) => match Page::from_menu(self.selection) {
                Some(page) => {
                    self.enter(page);
                    true
                }
                None => false,
            },

            (Play | Help | About, Up) if self.scroll > 0 => {
                self.scroll -= 1;
                true
            }
            (Play | Help | About, Down) if self.scroll < self.scroll_max => {
                self.scroll += 1;
                true
            }
            (Play, Right) => {
                self.confirm = true;
                true
            }

            // Leaving Play suspends the round; it resumes on the next visit
            (Play | Help | About | Win | Lose, Left) => {
                self.enter(Menu);
                true
            }

            _ => false,
        };

        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Advance game logic by one cycle
    ///
    /// On the play page this starts a round if none is active, otherwise it
    /// resolves a pending guess. A finished round moves to the win or lose
    /// page and is discarded.
    pub fn update(&mut self) -> Update {
        if self.page != Page::Play {
            return Update::Idle;
        }

        if self.round.is_none() {
            let index = self.rng.below(self.words.len());
            let word = self.words[index];
            self.round = Some(Round::new(word, self.strike_limit));
            self.dirty = true;
            return Update::RoundStarted { index, word };
        }

        if !core::mem::take(&mut self.confirm) {
            return Update::Idle;
        }

        let letter = self.selected_letter();
        let Some(round) = self.round.as_mut() else {
            return Update::Idle;
        };
        let guess = round.guess(letter);
        let outcome = round.outcome();

        match outcome {
            Outcome::Won => self.finish(Page::Win),
            Outcome::Lost => self.finish(Page::Lose),
            Outcome::InProgress => {}
        }
        self.dirty = true;

        Update::Guessed {
            letter,
            guess,
            outcome,
        }
    }

    fn enter(&mut self, page: Page) {
        self.page = page;
        self.scroll = 0;
        self.confirm = false;
        self.scroll_max = match page {
            Page::Play => ALPHABET_LEN as u8 - 1,
            Page::Help | Page::About => {
                (page.text().len() as u8).saturating_sub(VISIBLE_LINES)
            }
            Page::Menu | Page::Win | Page::Lose => 0,
        };
        self.dirty = true;
    }

    fn finish(&mut self, page: Page) {
        self.last_word = self.round.take().map(|round| round.word());
        self.selection = 0;
        self.enter(page);
    }
}
