//! Built-in text content
//!
//! The word list and the two scrollable text pages. Every entry fits on one
//! 21-character row of the display.

/// Candidate secret words, upper case A-Z only
pub static WORDS: [&str; 6] = [
    "MICROCONTROLLER",
    "SCREEN",
    "CHIP",
    "COMPUTER",
    "GRAPHICS",
    "GROUND",
];

/// "How To Play" page
pub static HELP: [&str; 19] = [
    "Controls: Use the up",
    "and down keys to",
    "select a letter and",
    "confirm the selection",
    "with the right key.",
    "Rules: You must guess",
    "the word by selecting",
    "the letters which",
    "occur in the word.",
    "Each selection",
    "reveals part of the",
    "word and when the",
    "whole word is",
    "revealed, you win. If",
    "you guess incorrectly",
    "then you will receive",
    "a strike. The 6th",
    "strike results in a",
    "loss.",
];

/// "About" page
pub static ABOUT: [&str; 6] = [
    "A game where you must",
    "guess the word. This",
    "software was written",
    "by Alexandru-Mihai",
    "Savu group 1242 EB",
    "from FILS.",
];
