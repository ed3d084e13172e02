//! Word-guessing rounds
//!
//! A round holds one secret word, the distinct letters it is made of, the
//! letters found so far and the strike count. It is created when play
//! starts and dropped when the round is won or lost.

pub mod letters;
pub mod round;

pub use letters::LetterSet;
pub use round::{Guess, Outcome, Round};

/// Number of letters in the carousel
pub const ALPHABET_LEN: usize = 26;

/// Letters the player can pick from, in carousel order
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Strike slots on the display, and the highest usable strike limit
pub const MAX_STRIKES: u8 = 6;
