//! Character set lookup with O(1) membership
//!
//! Optimized for the common case: ASCII goes through a flat array, the rare
//! accented letters and marks fall back to a hash set.

use std::collections::HashSet;

/// Fast character membership table
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members
    non_ascii: HashSet<char>,
}

impl CharTable {
    /// Create from a list of member characters
    pub fn new(members: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in members {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}
