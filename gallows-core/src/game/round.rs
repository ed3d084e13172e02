//! A single round of play

use heapless::String;

use super::letters::LetterSet;
use super::{ALPHABET_LEN, MAX_STRIKES};

/// Result of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Guess {
    /// New letter of the word
    Hit,
    /// Letter already found earlier; costs a strike
    Repeat,
    /// Letter not in the word; costs a strike
    Miss,
}

impl Guess {
    /// Returns true if this guess cost a strike
    pub fn is_strike(&self) -> bool {
        !matches!(self, Guess::Hit)
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Round state
#[derive(Debug, Clone)]
pub struct Round {
    word: &'static str,
    /// Distinct letters of the word
    letters: LetterSet,
    /// Letters of the word found so far
    guessed: LetterSet,
    /// Found letters in the order they were guessed
    history: String<ALPHABET_LEN>,
    strikes: u8,
    strike_limit: u8,
}

impl Round {
    /// Start a round on `word`
    ///
    /// `strike_limit` is clamped to `1..=MAX_STRIKES`.
    pub fn new(word: &'static str, strike_limit: u8) -> Self {
        Self {
            word,
            letters: LetterSet::from_word(word),
            guessed: LetterSet::new(),
            history: String::new(),
            strikes: 0,
            strike_limit: strike_limit.clamp(1, MAX_STRIKES),
        }
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Found letters in guess order
    pub fn history(&self) -> &str {
        self.history.as_str()
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn strike_limit(&self) -> u8 {
        self.strike_limit
    }

    /// Apply a guess
    ///
    /// The strike count saturates at the limit.
    pub fn guess(&mut self, letter: char) -> Guess {
        let result = if !self.letters.contains(letter) {
            Guess::Miss
        } else if self.guessed.insert(letter) {
            // Capacity is the alphabet size and each letter is pushed once
            let _ = self.history.push(letter);
            Guess::Hit
        } else {
            Guess::Repeat
        };

        if result.is_strike() {
            self.strikes = (self.strikes + 1).min(self.strike_limit);
        }
        result
    }

    pub fn outcome(&self) -> Outcome {
        if self.strikes >= self.strike_limit {
            Outcome::Lost
        } else if self.letters.is_subset(&self.guessed) {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    /// The word as the player sees it, one entry per letter, `None` for
    /// letters not found yet
    pub fn revealed(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.word
            .chars()
            .map(move |ch| self.guessed.contains(ch).then_some(ch))
    }
}
