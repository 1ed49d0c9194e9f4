//! Inline formatting tags attached to char ranges.
//!
//! Each tag keeps a sorted list of disjoint, non-adjacent ranges. Ranges follow
//! the text through edits: inserting strictly inside a range grows it, inserting
//! at or before its start shifts it, deleting shrinks it.

use super::edit_op::OpKind;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Bold,
    Italic,
    Underline,
}

impl FormatTag {
    pub const ALL: [FormatTag; 3] = [FormatTag::Bold, FormatTag::Italic, FormatTag::Underline];

    pub fn name(self) -> &'static str {
        match self {
            FormatTag::Bold => "bold",
            FormatTag::Italic => "italic",
            FormatTag::Underline => "underline",
        }
    }

    fn index(self) -> usize {
        match self {
            FormatTag::Bold => 0,
            FormatTag::Italic => 1,
            FormatTag::Underline => 2,
        }
    }
}

/// The set of tags covering one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagMask {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TagMask {
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }

    fn set(&mut self, tag: FormatTag) {
        match tag {
            FormatTag::Bold => self.bold = true,
            FormatTag::Italic => self.italic = true,
            FormatTag::Underline => self.underline = true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TagSet {
    ranges: [Vec<Range<usize>>; 3],
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        for ranges in &mut self.ranges {
            ranges.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.iter().all(Vec::is_empty)
    }

    pub fn ranges(&self, tag: FormatTag) -> &[Range<usize>] {
        &self.ranges[tag.index()]
    }

    pub fn has_at(&self, tag: FormatTag, pos: usize) -> bool {
        self.ranges[tag.index()]
            .iter()
            .any(|r| r.start <= pos && pos < r.end)
    }

    pub fn mask_at(&self, pos: usize) -> TagMask {
        let mut mask = TagMask::default();
        for tag in FormatTag::ALL {
            if self.has_at(tag, pos) {
                mask.set(tag);
            }
        }
        mask
    }

    pub fn add(&mut self, tag: FormatTag, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let ranges = &mut self.ranges[tag.index()];
        let mut merged = range;
        ranges.retain(|r| {
            if r.end < merged.start || r.start > merged.end {
                true
            } else {
                merged.start = merged.start.min(r.start);
                merged.end = merged.end.max(r.end);
                false
            }
        });
        let at = ranges.partition_point(|r| r.start < merged.start);
        ranges.insert(at, merged);
    }

    pub fn remove(&mut self, tag: FormatTag, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let ranges = &mut self.ranges[tag.index()];
        let mut kept = Vec::with_capacity(ranges.len() + 1);
        for r in ranges.drain(..) {
            if r.end <= range.start || r.start >= range.end {
                kept.push(r);
                continue;
            }
            if r.start < range.start {
                kept.push(r.start..range.start);
            }
            if r.end > range.end {
                kept.push(range.end..r.end);
            }
        }
        *ranges = kept;
    }

    /// Remove `tag` from `range` if the first char already carries it, add it
    /// otherwise. Returns whether the tag is now applied.
    pub fn toggle(&mut self, tag: FormatTag, range: Range<usize>) -> bool {
        if self.has_at(tag, range.start) {
            self.remove(tag, range);
            false
        } else {
            self.add(tag, range);
            true
        }
    }

    /// Move ranges to follow a text change.
    pub fn apply_edit(&mut self, change: &OpKind) {
        match change {
            OpKind::Insert { char_offset, text } => {
                self.shift_for_insert(*char_offset, text.chars().count());
            }
            OpKind::Delete { start, end, .. } => self.shrink_for_delete(*start, *end),
            OpKind::Batch(parts) => {
                for part in parts {
                    self.apply_edit(part);
                }
            }
        }
    }

    /// Follow an undo `change`, giving text it re-inserts back the tags it
    /// carried in `before` (the set as it was before the undone edit).
    pub fn apply_undo(&mut self, change: &OpKind, before: &TagSet) {
        self.apply_edit(change);
        let mut restored = Vec::new();
        collect_inserted(change, &mut restored);
        for tag in FormatTag::ALL {
            for span in &restored {
                for r in before.ranges(tag) {
                    let start = r.start.max(span.start);
                    let end = r.end.min(span.end);
                    if start < end {
                        self.add(tag, start..end);
                    }
                }
            }
        }
    }

    fn shift_for_insert(&mut self, at: usize, len: usize) {
        if len == 0 {
            return;
        }
        for ranges in &mut self.ranges {
            for r in ranges.iter_mut() {
                if at <= r.start {
                    r.start += len;
                    r.end += len;
                } else if at < r.end {
                    r.end += len;
                }
            }
        }
    }

    fn shrink_for_delete(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let removed = end - start;
        let map = |pos: usize| {
            if pos <= start {
                pos
            } else if pos >= end {
                pos - removed
            } else {
                start
            }
        };
        for ranges in &mut self.ranges {
            let mut kept: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
            for r in ranges.drain(..) {
                let mapped = map(r.start)..map(r.end);
                if mapped.start >= mapped.end {
                    continue;
                }
                match kept.last_mut() {
                    Some(prev) if prev.end >= mapped.start => prev.end = prev.end.max(mapped.end),
                    _ => kept.push(mapped),
                }
            }
            *ranges = kept;
        }
    }
}

/// Spans of text inserted by `change`, in the coordinates of the final text.
fn collect_inserted(change: &OpKind, spans: &mut Vec<Range<usize>>) {
    match change {
        OpKind::Insert { char_offset, text } => {
            let at = *char_offset;
            let len = text.chars().count();
            for span in spans.iter_mut() {
                if at <= span.start {
                    span.start += len;
                    span.end += len;
                } else if at < span.end {
                    span.end += len;
                }
            }
            if len > 0 {
                spans.push(at..at + len);
            }
        }
        OpKind::Delete { start, end, .. } => {
            let (start, end) = (*start, *end);
            let removed = end.saturating_sub(start);
            let map = |pos: usize| {
                if pos <= start {
                    pos
                } else if pos >= end {
                    pos - removed
                } else {
                    start
                }
            };
            spans.retain_mut(|span| {
                *span = map(span.start)..map(span.end);
                span.start < span.end
            });
        }
        OpKind::Batch(parts) => {
            for part in parts {
                collect_inserted(part, spans);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/format.rs"]
mod tests;
