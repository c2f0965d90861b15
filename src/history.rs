//! Linear undo/redo history of full-board snapshots.
//!
//! The undo stack always holds at least one snapshot: the top mirrors the
//! most recently committed state, so undo reveals the element beneath it and
//! the seeded initial snapshot can never be undone away. History is strictly
//! linear; any commit after an undo discards the redo branch.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::board::BoardState;

/// Undo and redo stacks of board snapshots.
pub struct History {
    undo_stack: Vec<BoardState>,
    redo_stack: Vec<BoardState>,
}

impl History {
    /// Create a history seeded with a snapshot of the initial state.
    #[must_use]
    pub fn new(initial: &BoardState) -> Self {
        Self {
            undo_stack: vec![initial.clone()],
            redo_stack: Vec::new(),
        }
    }

    /// Record the state as the newest committed snapshot.
    ///
    /// Clears the redo stack: committing after an undo discards that branch.
    pub fn commit(&mut self, state: &BoardState) {
        self.undo_stack.push(state.clone());
        self.redo_stack.clear();
    }

    /// Step back one snapshot, returning the state to restore.
    ///
    /// `None` when only the initial snapshot remains; the caller treats that
    /// as a silent no-op.
    pub fn undo(&mut self) -> Option<BoardState> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        self.undo_stack.last().cloned()
    }

    /// Step forward one snapshot, returning the state to restore.
    ///
    /// `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<BoardState> {
        let state = self.redo_stack.pop()?;
        self.undo_stack.push(state);
        self.undo_stack.last().cloned()
    }

    /// Drop all history and re-seed with a snapshot of `initial`, leaving
    /// exactly one element on the undo stack.
    pub fn reset(&mut self, initial: &BoardState) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.commit(initial);
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack. Never less than 1.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
