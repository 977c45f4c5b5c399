//! Undo history of constraint-set snapshots.
//!
//! Each mutation pushes a full copy of the state it is about to change.
//! Nothing is ever pruned, so the stack grows for the whole session; with
//! a handful of letters per snapshot that stays small in practice.

use crate::constraint::ConstraintSet;

#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<ConstraintSet>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state as it was before a mutation
    pub fn push(&mut self, snapshot: ConstraintSet) {
        self.snapshots.push(snapshot);
    }

    /// Take the most recent snapshot
    pub fn pop(&mut self) -> Option<ConstraintSet> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
