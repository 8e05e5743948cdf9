//! Bounded single-line text buffers.
//!
//! Stack-only: the buffer never grows past `N` characters, extra keystrokes are
//! dropped instead of reallocating.

use arrayvec::ArrayVec;

use crate::types::{GUESS_INPUT_MAX, NAME_INPUT_MAX};

/// Line editor holding at most `N` characters
#[derive(Debug, Clone, Default)]
pub struct LineEditor<const N: usize> {
    chars: ArrayVec<char, N>,
}

/// Buffer for a guess ("100" is the longest useful input)
pub type GuessLine = LineEditor<GUESS_INPUT_MAX>;

/// Buffer for a leaderboard name
pub type NameLine = LineEditor<NAME_INPUT_MAX>;

impl<const N: usize> LineEditor<N> {
    pub fn new() -> Self {
        Self {
            chars: ArrayVec::new(),
        }
    }

    /// Append a character; returns false when the line is full
    pub fn push(&mut self, ch: char) -> bool {
        self.chars.try_push(ch).is_ok()
    }

    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Return the current text and empty the line
    pub fn take(&mut self) -> String {
        let text = self.as_string();
        self.chars.clear();
        text
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_capacity() {
        let mut line = GuessLine::new();
        assert!(line.push('1'));
        assert!(line.push('0'));
        assert!(line.push('0'));
        assert!(line.is_full());
        assert!(!line.push('0'));
        assert_eq!(line.as_string(), "100");
    }

    #[test]
    fn pop_and_take() {
        let mut line = NameLine::new();
        for ch in "Ada".chars() {
            line.push(ch);
        }
        assert_eq!(line.pop(), Some('a'));
        assert_eq!(line.take(), "Ad");
        assert!(line.is_empty());
        assert_eq!(line.pop(), None);
    }

    #[test]
    fn name_line_capacity() {
        let line = NameLine::new();
        assert_eq!(line.capacity(), 16);
        assert_eq!(line.len(), 0);
    }
}
