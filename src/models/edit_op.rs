//! Atomic edit operations recorded in the edit history.

use ropey::Rope;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpId(u64);

impl OpId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn root() -> Self {
        Self(0)
    }

    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl Default for OpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpId({:x})", self.0)
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// A text change expressed in char offsets.
///
/// `Batch` applies its parts in order; each part's offsets refer to the rope
/// as left by the previous part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpKind {
    Insert {
        char_offset: usize,
        text: String,
    },
    Delete {
        start: usize,
        end: usize,
        deleted: String,
    },
    Batch(Vec<OpKind>),
}

impl OpKind {
    pub fn apply(&self, rope: &mut Rope) {
        match self {
            OpKind::Insert { char_offset, text } => {
                rope.insert(*char_offset, text);
            }
            OpKind::Delete { start, end, .. } => {
                rope.remove(*start..*end);
            }
            OpKind::Batch(parts) => {
                for part in parts {
                    part.apply(rope);
                }
            }
        }
    }

    /// The change that undoes `self`.
    pub fn inverse(&self) -> OpKind {
        match self {
            OpKind::Insert { char_offset, text } => OpKind::Delete {
                start: *char_offset,
                end: char_offset + text.chars().count(),
                deleted: text.clone(),
            },
            OpKind::Delete { start, deleted, .. } => OpKind::Insert {
                char_offset: *start,
                text: deleted.clone(),
            },
            OpKind::Batch(parts) => OpKind::Batch(parts.iter().rev().map(OpKind::inverse).collect()),
        }
    }

    pub fn removes_text(&self) -> bool {
        match self {
            OpKind::Insert { .. } => false,
            OpKind::Delete { start, end, .. } => start < end,
            OpKind::Batch(parts) => parts.iter().any(OpKind::removes_text),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            OpKind::Insert { text, .. } => text.is_empty(),
            OpKind::Delete { start, end, .. } => start >= end,
            OpKind::Batch(parts) => parts.iter().all(OpKind::is_empty),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EditOp {
    pub id: OpId,
    pub parent: OpId,
    pub kind: OpKind,
    pub cursor_before: (usize, usize),
    pub cursor_after: (usize, usize),
}

impl EditOp {
    pub fn new(
        parent: OpId,
        kind: OpKind,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            id: OpId::new(),
            parent,
            kind,
            cursor_before,
            cursor_after,
        }
    }

    pub fn insert(
        parent: OpId,
        char_offset: usize,
        text: String,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self::new(
            parent,
            OpKind::Insert { char_offset, text },
            cursor_before,
            cursor_after,
        )
    }

    pub fn delete(
        parent: OpId,
        start: usize,
        end: usize,
        deleted: String,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self::new(
            parent,
            OpKind::Delete {
                start,
                end,
                deleted,
            },
            cursor_before,
            cursor_after,
        )
    }

    pub fn cursor_after(&self) -> (usize, usize) {
        self.cursor_after
    }

    pub fn cursor_before(&self) -> (usize, usize) {
        self.cursor_before
    }

    pub fn apply(&self, rope: &mut Rope) {
        self.kind.apply(rope);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;
