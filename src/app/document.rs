//! The single open document: text, history, formatting, path and dirty flag.

use crate::models::{EditHistory, EditOp, FormatTag, OpId, OpKind, TagSet, TextBuffer};
use crate::services::search;
use crate::services::settings::{FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP};
use ropey::Rope;
use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "Scribe";
pub const UNTITLED: &str = "Untitled";

const MAX_REPLACE_PASSES: usize = 64;

pub struct Document {
    buffer: TextBuffer,
    history: EditHistory,
    tags: TagSet,
    /// Tags just before each text-removing edit, so undo can restore them.
    tags_before: HashMap<OpId, TagSet>,
    path: Option<PathBuf>,
    dirty: bool,
    /// HEAD at the last load/save/new; undoing back to it clears the flag.
    saved_head: OpId,
    font_size: u16,
}

impl Document {
    pub fn new(font_size: u16) -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: EditHistory::new(Rope::new()),
            tags: TagSet::new(),
            tags_before: HashMap::new(),
            path: None,
            dirty: false,
            saved_head: OpId::root(),
            font_size: font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// `"<path> - Scribe"` or `"Untitled - Scribe"`.
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => format!("{} - {APP_NAME}", path.display()),
            None => format!("{UNTITLED} - {APP_NAME}"),
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    // ==================== lifecycle ====================

    /// Empty, untitled, clean.
    pub fn reset(&mut self) {
        self.replace_contents(Rope::new());
        self.path = None;
    }

    /// Replace everything with freshly loaded text bound to `path`.
    pub fn load(&mut self, path: PathBuf, text: &str) {
        self.replace_contents(Rope::from_str(text));
        self.path = Some(path);
    }

    /// Bind to `path` without loading (the file does not exist yet).
    pub fn bind_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
        self.saved_head = self.history.head();
    }

    fn replace_contents(&mut self, rope: Rope) {
        self.history.clear(&rope);
        self.buffer = TextBuffer::from_rope(rope);
        self.tags.clear();
        self.tags_before.clear();
        self.dirty = false;
        self.saved_head = self.history.head();
    }

    // ==================== edits ====================

    fn record(&mut self, op: EditOp) {
        if op.kind.is_empty() {
            return;
        }
        if !self.tags.is_empty() && op.kind.removes_text() {
            self.tags_before.insert(op.id, self.tags.clone());
        }
        self.tags.apply_edit(&op.kind);
        self.history.push(op, self.buffer.rope());
        self.dirty = true;
    }

    /// Insert at the cursor, replacing the selection if there is one.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let head = self.history.head();
        let op = match self.buffer.delete_selection_op(head) {
            Some(del) => {
                let ins = self.buffer.insert_str_op(text, head);
                EditOp::new(
                    head,
                    OpKind::Batch(vec![del.kind, ins.kind]),
                    del.cursor_before,
                    ins.cursor_after,
                )
            }
            None => self.buffer.insert_str_op(text, head),
        };
        self.record(op);
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    pub fn delete_backward(&mut self) {
        let head = self.history.head();
        let op = match self.buffer.delete_selection_op(head) {
            Some(op) => Some(op),
            None => self.buffer.delete_backward_op(head),
        };
        if let Some(op) = op {
            self.record(op);
        }
    }

    pub fn delete_forward(&mut self) {
        let head = self.history.head();
        let op = match self.buffer.delete_selection_op(head) {
            Some(op) => Some(op),
            None => self.buffer.delete_forward_op(head),
        };
        if let Some(op) = op {
            self.record(op);
        }
    }

    /// Remove the selection and return its text.
    pub fn cut_selection(&mut self) -> Option<String> {
        let text = self.buffer.selected_text()?;
        let head = self.history.head();
        let op = self.buffer.delete_selection_op(head)?;
        self.record(op);
        Some(text)
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.head();
        let Some(step) = self.history.undo() else {
            return false;
        };
        match self.tags_before.get(&undone) {
            Some(before) => self.tags.apply_undo(&step.change, before),
            None => self.tags.apply_edit(&step.change),
        }
        self.buffer.set_rope(step.rope, step.cursor);
        self.dirty = self.history.head() != self.saved_head;
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(step) = self.history.redo() else {
            return false;
        };
        self.tags.apply_edit(&step.change);
        self.buffer.set_rope(step.rope, step.cursor);
        self.dirty = self.history.head() != self.saved_head;
        true
    }

    // ==================== find / replace ====================

    /// Select the first match from the top and put the cursor on it.
    pub fn find(&mut self, pattern: &str) -> Option<Range<usize>> {
        let m = search::find_first(self.buffer.rope(), pattern)?;
        self.buffer.select_chars(m.start_char, m.end_char);
        Some(m.start_char..m.end_char)
    }

    /// Replace every occurrence of `pattern`, scanning from the top and
    /// resuming after each inserted replacement. Passes repeat while joined
    /// pieces form new matches, unless the replacement itself contains the
    /// pattern. One undo step. Returns the number of replacements.
    pub fn replace_all(&mut self, pattern: &str, replacement: &str) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        let parent = self.history.head();
        let cursor_before = self.buffer.cursor();
        let repeat = !replacement.contains(pattern);
        let shrinking = replacement.chars().count() < pattern.chars().count();

        let mut parts = Vec::new();
        let mut count = 0usize;
        for pass in 1.. {
            let matches = search::find_all(self.buffer.rope(), pattern);
            if matches.is_empty() {
                break;
            }
            let (pass_parts, last_end) = replace_pass(&matches, pattern, replacement);
            let kind = OpKind::Batch(pass_parts);
            self.buffer.apply_change(&kind, last_end);
            if let OpKind::Batch(pass_parts) = kind {
                parts.extend(pass_parts);
            }
            count += matches.len();

            if !repeat {
                break;
            }
            // a shrinking pass always terminates; others get a budget
            if !shrinking && pass >= MAX_REPLACE_PASSES {
                tracing::warn!(pattern, passes = pass, "replace stopped at pass limit");
                break;
            }
        }
        if count == 0 {
            return 0;
        }

        let op = EditOp::new(parent, OpKind::Batch(parts), cursor_before, self.buffer.cursor());
        self.record(op);
        count
    }

    // ==================== formatting ====================

    /// Toggle `tag` over the selection. `None` when nothing is selected,
    /// otherwise whether the tag is now applied.
    pub fn toggle_tag(&mut self, tag: FormatTag) -> Option<bool> {
        let range = self.buffer.selection_char_range()?;
        Some(self.tags.toggle(tag, range))
    }

    pub fn increase_font_size(&mut self) -> u16 {
        self.font_size = self
            .font_size
            .saturating_add(FONT_SIZE_STEP)
            .min(FONT_SIZE_MAX);
        self.font_size
    }

    pub fn decrease_font_size(&mut self) -> u16 {
        self.font_size = self
            .font_size
            .saturating_sub(FONT_SIZE_STEP)
            .max(FONT_SIZE_MIN);
        self.font_size
    }
}

/// One left-to-right pass: delete/insert parts with offsets already shifted
/// by earlier parts, and the char offset just past the last replacement.
fn replace_pass(
    matches: &[search::Match],
    pattern: &str,
    replacement: &str,
) -> (Vec<OpKind>, usize) {
    let replacement_len = replacement.chars().count();
    let mut parts = Vec::with_capacity(matches.len() * 2);
    let mut shift: isize = 0;
    let mut last_end = 0usize;
    for m in matches {
        let start = (m.start_char as isize + shift) as usize;
        parts.push(OpKind::Delete {
            start,
            end: start + m.char_len(),
            deleted: pattern.to_string(),
        });
        if !replacement.is_empty() {
            parts.push(OpKind::Insert {
                char_offset: start,
                text: replacement.to_string(),
            });
        }
        shift += replacement_len as isize - m.char_len() as isize;
        last_end = start + replacement_len;
    }
    (parts, last_end)
}

#[cfg(test)]
#[path = "../../tests/unit/app/document.rs"]
mod tests;
