//! Set of upper case letters

use core::fmt;

/// Set of letters `A`-`Z`, one bit per letter
///
/// Anything outside `A`-`Z` is never a member.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LetterSet(u32);

impl LetterSet {
    /// Empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Distinct letters of `word`
    pub fn from_word(word: &str) -> Self {
        let mut set = Self::new();
        for ch in word.chars() {
            set.insert(ch);
        }
        set
    }

    fn bit(ch: char) -> Option<u32> {
        if ch.is_ascii_uppercase() {
            Some(1 << (ch as u32 - 'A' as u32))
        } else {
            None
        }
    }

    /// Add a letter; returns false if it was already present or is not a
    /// letter
    pub fn insert(&mut self, ch: char) -> bool {
        match Self::bit(ch) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        Self::bit(ch).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if every letter of `self` is in `other`
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Members in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('A'..='Z').filter(move |ch| self.contains(*ch))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
