//! Selection model with char / word / line granularity.
//!
//! Positions are `(row, grapheme column)`. The anchor stays where the
//! selection started; the cursor end follows movement, snapped to the
//! granularity.

use super::text_buffer::slice_to_cow;
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_xid::UnicodeXID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Char,
    Word,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Punct,
}

impl CharClass {
    fn of(grapheme: &str) -> Self {
        match grapheme.chars().next() {
            Some(c) if c.is_whitespace() => CharClass::Space,
            Some(c) if c == '_' || c.is_xid_continue() => CharClass::Word,
            _ => CharClass::Punct,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Selection {
    anchor: (usize, usize),
    cursor: (usize, usize),
    granularity: Granularity,
}

impl Selection {
    pub fn new(pos: (usize, usize), granularity: Granularity) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
            granularity,
        }
    }

    /// Start a selection at `pos`, widened to the word or line under it.
    pub fn from_pos(pos: (usize, usize), granularity: Granularity, rope: &Rope) -> Self {
        let mut selection = Self::new(pos, granularity);
        let row = pos.0;
        match granularity {
            Granularity::Char => {}
            Granularity::Word => {
                let line = slice_to_cow(rope.line(row));
                let (start, end) = Self::word_bounds_at(&line, pos.1);
                selection.anchor = (row, start);
                selection.cursor = (row, end);
            }
            Granularity::Line => {
                selection.anchor = (row, 0);
                selection.cursor = (row, line_len(rope, row));
            }
        }
        selection
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn update_cursor(&mut self, pos: (usize, usize), rope: &Rope) {
        self.cursor = match self.granularity {
            Granularity::Char => pos,
            Granularity::Word => {
                let line = slice_to_cow(rope.line(pos.0));
                let (start, end) = Self::word_bounds_at(&line, pos.1);
                if start != end && pos.1.saturating_sub(start) < end.saturating_sub(pos.1) {
                    (pos.0, start)
                } else {
                    (pos.0, end)
                }
            }
            Granularity::Line => (pos.0, line_len(rope, pos.0)),
        };
    }

    /// Grapheme bounds `[start, end)` of the run of same-class graphemes at
    /// `col`. Past the end of the line both bounds are the line length.
    pub fn word_bounds_at(line: &str, col: usize) -> (usize, usize) {
        let classes: Vec<CharClass> = line
            .trim_end_matches(['\n', '\r'])
            .graphemes(true)
            .map(CharClass::of)
            .collect();

        let Some(&class) = classes.get(col) else {
            return (classes.len(), classes.len());
        };

        let start = classes[..col]
            .iter()
            .rposition(|c| *c != class)
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = classes[col..]
            .iter()
            .position(|c| *c != class)
            .map(|i| col + i)
            .unwrap_or(classes.len());
        (start, end)
    }

    /// `(start, end)` in document order.
    pub fn range(&self) -> ((usize, usize), (usize, usize)) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    pub fn contains(&self, pos: (usize, usize)) -> bool {
        let (start, end) = self.range();
        start <= pos && pos < end
    }
}

fn line_len(rope: &Rope, row: usize) -> usize {
    let line = slice_to_cow(rope.line(row));
    line.trim_end_matches(['\n', '\r']).graphemes(true).count()
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
