//! Edit history as a DAG of operations.
//!
//! - every op has a unique id and a parent pointer
//! - HEAD points at the op that produced the current text
//! - undo moves HEAD to the parent; an edit after undo starts a new branch
//! - redo follows the most recent branch

use super::edit_op::{EditOp, OpId, OpKind};
use ropey::Rope;
use std::collections::HashMap;

/// Take a snapshot every this many ops so rebuilding stays cheap.
pub const CHECKPOINT_INTERVAL: usize = 100;

struct Checkpoint {
    snapshot: Rope,
}

/// Result of moving HEAD: the text to show, where to put the cursor, and the
/// change that turns the previous text into `rope`.
#[derive(Debug, Clone)]
pub struct HistoryStep {
    pub rope: Rope,
    pub cursor: (usize, usize),
    pub change: OpKind,
}

pub struct EditHistory {
    /// Text at the root (on open, new, or load).
    base_snapshot: Rope,
    ops: HashMap<OpId, EditOp>,
    head: OpId,
    children: HashMap<OpId, Vec<OpId>>,
    checkpoints: HashMap<OpId, Checkpoint>,
    op_count: usize,
}

impl EditHistory {
    pub fn new(base_snapshot: Rope) -> Self {
        Self {
            base_snapshot,
            ops: HashMap::new(),
            head: OpId::root(),
            children: HashMap::new(),
            checkpoints: HashMap::new(),
            op_count: 0,
        }
    }

    /// Record an op that has already been applied to `current_rope`.
    pub fn push(&mut self, op: EditOp, current_rope: &Rope) {
        let op_id = op.id;
        self.children.entry(op.parent).or_default().push(op_id);
        self.ops.insert(op_id, op);

        self.head = op_id;
        self.op_count += 1;

        if self.op_count % CHECKPOINT_INTERVAL == 0 {
            self.checkpoints.insert(
                op_id,
                Checkpoint {
                    snapshot: current_rope.clone(),
                },
            );
        }
    }

    pub fn undo(&mut self) -> Option<HistoryStep> {
        if self.head.is_root() {
            return None;
        }

        let current_op = self.ops.get(&self.head)?;
        let cursor = current_op.cursor_before();
        let change = current_op.kind.inverse();
        let parent_id = current_op.parent;

        self.head = parent_id;

        let rope = self.rebuild_rope_at(parent_id);
        Some(HistoryStep {
            rope,
            cursor,
            change,
        })
    }

    pub fn redo(&mut self) -> Option<HistoryStep> {
        let next_id = *self.children.get(&self.head)?.last()?;
        let next_op = self.ops.get(&next_id)?;
        let cursor = next_op.cursor_after();
        let change = next_op.kind.clone();

        self.head = next_id;

        let rope = self.rebuild_rope_at(next_id);
        Some(HistoryStep {
            rope,
            cursor,
            change,
        })
    }

    pub fn head(&self) -> OpId {
        self.head
    }

    pub fn can_undo(&self) -> bool {
        !self.head.is_root()
    }

    pub fn can_redo(&self) -> bool {
        self.children
            .get(&self.head)
            .map(|c| !c.is_empty())
            .unwrap_or(false)
    }

    /// Drop all history and start again from `current_rope`.
    pub fn clear(&mut self, current_rope: &Rope) {
        self.base_snapshot = current_rope.clone();
        self.ops.clear();
        self.head = OpId::root();
        self.children.clear();
        self.checkpoints.clear();
        self.op_count = 0;
    }

    fn rebuild_rope_at(&self, target: OpId) -> Rope {
        if target.is_root() {
            return self.base_snapshot.clone();
        }

        let path = self.path_to(target);
        let (start_idx, mut rope) = self.find_nearest_checkpoint(&path);

        for op_id in &path[start_idx..] {
            if let Some(op) = self.ops.get(op_id) {
                op.apply(&mut rope);
            }
        }

        rope
    }

    /// Ops from the root (exclusive) to `target` (inclusive).
    fn path_to(&self, target: OpId) -> Vec<OpId> {
        let mut path = Vec::new();
        let mut current = target;

        while !current.is_root() {
            path.push(current);
            match self.ops.get(&current) {
                Some(op) => current = op.parent,
                None => break,
            }
        }

        path.reverse();
        path
    }

    fn find_nearest_checkpoint(&self, path: &[OpId]) -> (usize, Rope) {
        for (i, op_id) in path.iter().enumerate().rev() {
            if let Some(cp) = self.checkpoints.get(op_id) {
                return (i + 1, cp.snapshot.clone());
            }
        }
        (0, self.base_snapshot.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
