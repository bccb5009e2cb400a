//! Undo/redo bookkeeping.
//!
//! The controller owns two stacks. Executing an action pushes it onto the
//! undo stack and empties the redo stack; undo moves the top action across
//! to the redo stack, and redo moves it back.
//!
//! ## History
//!
//! Every successful step is also appended to a journal of
//! [`ActionRecord`]s. The journal is an `im::Vector`, so snapshots of it
//! are cheap to take and hand out. It only grows: long sessions should
//! drain it with [`ActionController::take_history`] now and then.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Action, ActionKind, Reversible};
use crate::containers::Workspace;
use crate::core::{ComponentId, Result};

/// What happened to an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// First application via `execute`.
    Executed,
    /// Reversed via `undo`.
    Undone,
    /// Reapplied via `redo`.
    Redone,
}

/// One journal entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the journal, starting at 0.
    pub sequence: u64,

    /// What the controller did.
    pub event: HistoryEvent,

    /// Kind of action involved.
    pub action: ActionKind,

    /// Card the action operated on.
    pub card: ComponentId,
}

impl ActionRecord {
    /// Create a record.
    #[must_use]
    pub fn new(sequence: u64, event: HistoryEvent, action: ActionKind, card: ComponentId) -> Self {
        Self {
            sequence,
            event,
            action,
            card,
        }
    }
}

/// Runs actions and keeps the undo/redo stacks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionController {
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
    history: Vector<ActionRecord>,
    sequence: u64,
}

impl ActionController {
    /// Create a controller with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` and push it onto the undo stack.
    ///
    /// A successful execute discards everything on the redo stack. If the
    /// action fails, neither stack changes and the error is returned.
    pub fn execute<W: Workspace + ?Sized>(
        &mut self,
        action: impl Into<Action>,
        workspace: &mut W,
    ) -> Result<()> {
        let mut action = action.into();
        action.execute(workspace)?;

        if !self.redo_stack.is_empty() {
            tracing::debug!(discarded = self.redo_stack.len(), "redo stack invalidated");
            self.redo_stack.clear();
        }
        self.record(HistoryEvent::Executed, &action);
        self.undo_stack.push(action);
        Ok(())
    }

    /// Undo the most recent action.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. If the action's
    /// undo fails it stays on the undo stack.
    pub fn undo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<bool> {
        let Some(mut action) = self.undo_stack.pop() else {
            tracing::debug!("nothing to undo");
            return Ok(false);
        };
        if let Err(err) = action.undo(workspace) {
            self.undo_stack.push(action);
            return Err(err);
        }
        self.record(HistoryEvent::Undone, &action);
        self.redo_stack.push(action);
        Ok(true)
    }

    /// Redo the most recently undone action.
    ///
    /// Returns `Ok(false)` when there is nothing to redo. If the action's
    /// redo fails it stays on the redo stack.
    pub fn redo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<bool> {
        let Some(mut action) = self.redo_stack.pop() else {
            tracing::debug!("nothing to redo");
            return Ok(false);
        };
        if let Err(err) = action.redo(workspace) {
            self.redo_stack.push(action);
            return Err(err);
        }
        self.record(HistoryEvent::Redone, &action);
        self.undo_stack.push(action);
        Ok(true)
    }

    /// Check if there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of actions on the undo stack.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of actions on the redo stack.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The action `undo` would reverse next.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&Action> {
        self.undo_stack.last()
    }

    /// The action `redo` would reapply next.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&Action> {
        self.redo_stack.last()
    }

    /// The journal of every successful step, oldest first.
    ///
    /// Nothing is ever dropped from it except by
    /// [`take_history`](Self::take_history) or [`clear`](Self::clear).
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Move the journal out, leaving it empty.
    ///
    /// The stacks are untouched and sequence numbers keep counting, so
    /// records from successive drains never overlap.
    pub fn take_history(&mut self) -> Vector<ActionRecord> {
        std::mem::take(&mut self.history)
    }

    /// Drop both stacks and the journal. The workspace is not touched.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.history.clear();
        self.sequence = 0;
    }

    fn record(&mut self, event: HistoryEvent, action: &Action) {
        tracing::debug!(sequence = self.sequence, ?event, action = %action.kind(), card = %action.card(), "action");
        self.history
            .push_back(ActionRecord::new(self.sequence, event, action.kind(), action.card()));
        self.sequence += 1;
    }
}
