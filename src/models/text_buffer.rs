//! Text buffer model
//!
//! - text storage (Rope)
//! - cursor and selection
//! - (row, grapheme column) <-> char offset mapping

use super::edit_op::{EditOp, OpId, OpKind};
use super::selection::{Granularity, Selection};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    selection: Option<Selection>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_rope(Rope::new())
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_rope(Rope::from_str(text))
    }

    pub fn from_rope(rope: Rope) -> Self {
        Self {
            rope,
            cursor: (0, 0),
            selection: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Stream the text chunk by chunk.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = self.clamp_pos((row, col));
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn update_selection_cursor(&mut self, pos: (usize, usize)) {
        if let Some(sel) = &mut self.selection {
            sel.update_cursor(pos, &self.rope);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selection
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Selected char range, `None` when nothing (or an empty range) is selected.
    pub fn selection_char_range(&self) -> Option<Range<usize>> {
        let sel = self.selection.as_ref().filter(|s| !s.is_empty())?;
        let (start, end) = sel.range();
        Some(self.pos_to_char(start)..self.pos_to_char(end))
    }

    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection_char_range()?;
        Some(self.rope.slice(range).to_string())
    }

    /// Select `[start, end)` and park the cursor at `start`.
    pub fn select_chars(&mut self, start: usize, end: usize) {
        let start_pos = self.char_to_pos(start);
        let end_pos = self.char_to_pos(end);
        let mut sel = Selection::new(end_pos, Granularity::Char);
        sel.update_cursor(start_pos, &self.rope);
        self.selection = Some(sel);
        self.cursor = start_pos;
    }

    pub fn select_all(&mut self) {
        self.select_chars(0, self.rope.len_chars());
        self.cursor = self.char_to_pos(self.rope.len_chars());
    }

    pub fn select_word_at(&mut self, pos: (usize, usize)) {
        let pos = self.clamp_pos(pos);
        let sel = Selection::from_pos(pos, Granularity::Word, &self.rope);
        self.cursor = sel.cursor();
        self.selection = Some(sel);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    /// Line `row` without its line break.
    pub fn line_content(&self, row: usize) -> Cow<'_, str> {
        let Some(slice) = self.line_slice(row) else {
            return Cow::Borrowed("");
        };
        fn strip(s: &str) -> &str {
            let s = s.strip_suffix('\n').unwrap_or(s);
            s.strip_suffix('\r').unwrap_or(s)
        }
        match slice_to_cow(slice) {
            Cow::Borrowed(s) => Cow::Borrowed(strip(s)),
            Cow::Owned(s) => Cow::Owned(strip(&s).to_string()),
        }
    }

    pub fn cursor_char_offset(&self) -> usize {
        self.pos_to_char(self.cursor)
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        let row = pos.0.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(row) + self.grapheme_to_char_index(row, pos.1)
    }

    pub fn char_to_pos(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_offset);
        let in_line = char_offset - self.rope.line_to_char(row);
        let line = slice_to_cow(self.rope.line(row));

        let mut chars = 0usize;
        let mut col = 0usize;
        for g in line.graphemes(true) {
            if chars >= in_line {
                break;
            }
            chars += g.chars().count();
            col += 1;
        }
        (row, col)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let line = slice_to_cow(self.rope.line(row));
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        without_newline
            .graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = slice_to_cow(self.rope.line(row));
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        let without_newline = without_newline
            .strip_suffix('\r')
            .unwrap_or(without_newline);
        without_newline.graphemes(true).count()
    }

    pub fn clamp_pos(&self, pos: (usize, usize)) -> (usize, usize) {
        let row = pos.0.min(self.rope.len_lines().saturating_sub(1));
        (row, pos.1.min(self.line_grapheme_len(row)))
    }

    // ==================== cursor movement ====================

    fn move_to(&mut self, pos: (usize, usize), extend: bool) {
        let pos = self.clamp_pos(pos);
        if extend {
            if self.selection.is_none() {
                self.selection = Some(Selection::new(self.cursor, Granularity::Char));
            }
            self.update_selection_cursor(pos);
        } else {
            self.selection = None;
        }
        self.cursor = pos;
    }

    fn collapse_selection(&mut self, to_start: bool) -> bool {
        let Some((start, end)) = self.selection.as_ref().filter(|s| !s.is_empty()).map(|s| s.range())
        else {
            return false;
        };
        self.cursor = if to_start { start } else { end };
        self.selection = None;
        true
    }

    pub fn move_left(&mut self, extend: bool) {
        if !extend && self.collapse_selection(true) {
            return;
        }
        let (row, col) = self.cursor;
        let pos = if col > 0 {
            (row, col - 1)
        } else if row > 0 {
            (row - 1, self.line_grapheme_len(row - 1))
        } else {
            (row, col)
        };
        self.move_to(pos, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend && self.collapse_selection(false) {
            return;
        }
        let (row, col) = self.cursor;
        let pos = if col < self.line_grapheme_len(row) {
            (row, col + 1)
        } else if row + 1 < self.len_lines() {
            (row + 1, 0)
        } else {
            (row, col)
        };
        self.move_to(pos, extend);
    }

    pub fn move_up(&mut self, lines: usize, extend: bool) {
        let (row, col) = self.cursor;
        self.move_to((row.saturating_sub(lines), col), extend);
    }

    pub fn move_down(&mut self, lines: usize, extend: bool) {
        let (row, col) = self.cursor;
        self.move_to((row.saturating_add(lines), col), extend);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        self.move_to((self.cursor.0, 0), extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        let row = self.cursor.0;
        self.move_to((row, self.line_grapheme_len(row)), extend);
    }

    pub fn move_file_start(&mut self, extend: bool) {
        self.move_to((0, 0), extend);
    }

    pub fn move_file_end(&mut self, extend: bool) {
        let last = self.len_lines().saturating_sub(1);
        self.move_to((last, self.line_grapheme_len(last)), extend);
    }

    /// Place the cursor (e.g. from a mouse click) and drop any selection.
    pub fn place_cursor(&mut self, pos: (usize, usize)) {
        self.move_to(pos, false);
    }

    /// Extend the selection to `pos` (e.g. from a mouse drag).
    pub fn drag_to(&mut self, pos: (usize, usize)) {
        self.move_to(pos, true);
    }

    // ==================== edits (return an EditOp) ====================

    pub fn insert_char_op(&mut self, c: char, parent: OpId) -> EditOp {
        let mut buf = [0u8; 4];
        self.insert_str_op(c.encode_utf8(&mut buf), parent)
    }

    pub fn insert_str_op(&mut self, s: &str, parent: OpId) -> EditOp {
        let cursor_before = self.cursor;
        let char_offset = self.cursor_char_offset();

        self.rope.insert(char_offset, s);

        let cursor_after = self.char_to_pos(char_offset + s.chars().count());
        self.cursor = cursor_after;

        EditOp::insert(parent, char_offset, s.to_string(), cursor_before, cursor_after)
    }

    /// Backspace.
    pub fn delete_backward_op(&mut self, parent: OpId) -> Option<EditOp> {
        let (row, col) = self.cursor;
        let cursor_before = self.cursor;

        let (start, end, cursor_after) = if col > 0 {
            (
                self.pos_to_char((row, col - 1)),
                self.pos_to_char((row, col)),
                (row, col - 1),
            )
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let end = self.rope.line_to_char(row);
            let start = self.pos_to_char((row - 1, prev_len));
            (start, end, (row - 1, prev_len))
        } else {
            return None;
        };

        let deleted = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        self.cursor = cursor_after;

        Some(EditOp::delete(parent, start, end, deleted, cursor_before, cursor_after))
    }

    /// Delete.
    pub fn delete_forward_op(&mut self, parent: OpId) -> Option<EditOp> {
        let (row, col) = self.cursor;
        let cursor_before = self.cursor;

        let (start, end) = if col < self.line_grapheme_len(row) {
            (self.pos_to_char((row, col)), self.pos_to_char((row, col + 1)))
        } else if row + 1 < self.len_lines() {
            (self.pos_to_char((row, col)), self.rope.line_to_char(row + 1))
        } else {
            return None;
        };

        let deleted = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);

        Some(EditOp::delete(parent, start, end, deleted, cursor_before, cursor_before))
    }

    pub fn delete_selection_op(&mut self, parent: OpId) -> Option<EditOp> {
        let range = self.selection_char_range()?;
        let cursor_before = self.cursor;
        let cursor_after = self.char_to_pos(range.start);

        let deleted = self.rope.slice(range.clone()).to_string();
        self.rope.remove(range.clone());

        self.cursor = cursor_after;
        self.selection = None;

        Some(EditOp::delete(
            parent,
            range.start,
            range.end,
            deleted,
            cursor_before,
            cursor_after,
        ))
    }

    /// Apply an already-built change and move the cursor to `cursor_char`.
    pub fn apply_change(&mut self, change: &OpKind, cursor_char: usize) {
        change.apply(&mut self.rope);
        self.selection = None;
        self.cursor = self.char_to_pos(cursor_char);
    }

    // ==================== undo/redo ====================

    /// Swap in a whole rope (undo/redo, load).
    pub fn set_rope(&mut self, rope: Rope, cursor: (usize, usize)) {
        self.rope = rope;
        self.selection = None;
        self.cursor = self.clamp_pos(cursor);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
