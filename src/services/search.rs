//! Literal, case-sensitive search over a rope.

use crate::models::slice_to_cow;
use memchr::memmem::Finder;
use ropey::Rope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_char: usize,
    pub end_char: usize,
    pub line: usize,
}

impl Match {
    pub fn new(start_byte: usize, end_byte: usize, rope: &Rope) -> Self {
        let start_char = rope.byte_to_char(start_byte);
        Self {
            start_byte,
            end_byte,
            start_char,
            end_char: rope.byte_to_char(end_byte),
            line: rope.char_to_line(start_char),
        }
    }

    pub fn char_len(&self) -> usize {
        self.end_char - self.start_char
    }
}

pub struct Searcher<'a> {
    rope: &'a Rope,
    finder: Finder<'a>,
}

impl<'a> Searcher<'a> {
    pub fn new(rope: &'a Rope, pattern: &'a str) -> Self {
        Self {
            rope,
            finder: Finder::new(pattern.as_bytes()),
        }
    }

    fn pattern_is_empty(&self) -> bool {
        self.finder.needle().is_empty()
    }

    /// First match starting at or after `from_char`.
    pub fn find_from(&self, from_char: usize) -> Option<Match> {
        if self.pattern_is_empty() {
            return None;
        }
        let from_char = from_char.min(self.rope.len_chars());
        let from_byte = self.rope.char_to_byte(from_char);
        let tail = slice_to_cow(self.rope.byte_slice(from_byte..));
        let pos = self.finder.find(tail.as_bytes())?;
        let start = from_byte + pos;
        Some(Match::new(start, start + self.finder.needle().len(), self.rope))
    }

    /// Every non-overlapping match, scanning from the top.
    pub fn find_all(&self) -> Vec<Match> {
        if self.pattern_is_empty() {
            return Vec::new();
        }
        let text = slice_to_cow(self.rope.slice(..));
        let len = self.finder.needle().len();
        self.finder
            .find_iter(text.as_bytes())
            .map(|start| Match::new(start, start + len, self.rope))
            .collect()
    }
}

pub fn find_first(rope: &Rope, pattern: &str) -> Option<Match> {
    Searcher::new(rope, pattern).find_from(0)
}

pub fn find_all(rope: &Rope, pattern: &str) -> Vec<Match> {
    Searcher::new(rope, pattern).find_all()
}

#[cfg(test)]
#[path = "../../tests/unit/services/search.rs"]
mod tests;
