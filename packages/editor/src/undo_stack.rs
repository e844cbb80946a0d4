//! # Undo/Redo Stack
//!
//! Snapshot history around the current presentation.
//!
//! ## Design
//!
//! - `present` is the only document the outside world sees
//! - Committing a mutation pushes the old `present` onto the undo stack and
//!   clears the redo stack
//! - Undo/redo move whole snapshots between the stacks; snapshots are owned
//!   values, so no two entries share mutable state
//! - Continuous mutations (drags) that arrive within the coalescing window
//!   of the previous continuous one replace `present` in place, so a whole
//!   gesture is one undo step
//! - Explicit batches fold every mutation between `begin_batch` and
//!   `end_batch` into one step
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new(doc, HistoryConfig::default());
//!
//! let next = mutation.apply(stack.present());
//! stack.record(&mutation, next, clock.now_millis());
//!
//! stack.undo();
//! stack.redo();
//! ```

use serde::{Deserialize, Serialize};
use slidecraft_document::Presentation;

use crate::Mutation;

/// Default window for folding continuous mutations together
pub const DEFAULT_COALESCE_WINDOW_MS: i64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryConfig {
    /// Continuous mutations closer together than this share one undo step
    pub coalesce_window_ms: i64,

    /// Maximum number of undo levels (0 = unlimited)
    pub max_undo_levels: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
            max_undo_levels: 0,
        }
    }
}

/// A document state that can be returned to
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub document: Presentation,

    /// Name of the edit that led away from this state
    pub label: String,
}

/// What a history transition did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// New undo step
    Committed,
    /// Folded into the previous undo step
    Coalesced,
    Undone,
    Redone,
    /// Document replaced, history cleared
    Loaded,
    /// Nothing changed
    Unchanged,
}

impl Transition {
    pub fn is_change(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

#[derive(Debug)]
struct Batch {
    label: String,
    committed: bool,
}

/// Past/present/future history for one presentation
#[derive(Debug)]
pub struct UndoStack {
    /// Earlier states (most recent last)
    undo_stack: Vec<Checkpoint>,

    present: Presentation,

    /// Undone states (most recent undo last)
    redo_stack: Vec<Checkpoint>,

    config: HistoryConfig,

    last_was_continuous: bool,
    last_continuous_at: Option<i64>,

    /// Currently building a batch
    current_batch: Option<Batch>,
}

impl UndoStack {
    pub fn new(present: Presentation, config: HistoryConfig) -> Self {
        Self {
            undo_stack: Vec::new(),
            present,
            redo_stack: Vec::new(),
            config,
            last_was_continuous: false,
            last_continuous_at: None,
            current_batch: None,
        }
    }

    pub fn present(&self) -> &Presentation {
        &self.present
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Record `next`, the result of applying `mutation` to `present`, at
    /// wall time `now` (milliseconds).
    pub fn record(&mut self, mutation: &Mutation, next: Presentation, now: i64) -> Transition {
        let continuous = mutation.is_continuous();
        let same_series = continuous
            && self.last_was_continuous
            && self
                .last_continuous_at
                .is_some_and(|at| now - at < self.config.coalesce_window_ms);

        if next == self.present {
            // A drag holding still is still the same gesture
            if same_series {
                self.last_continuous_at = Some(now);
            }
            return Transition::Unchanged;
        }

        if let Some(batch) = &mut self.current_batch {
            if batch.committed {
                self.present = next;
                return Transition::Coalesced;
            }
            batch.committed = true;
            let label = batch.label.clone();
            self.commit(next, label);
            self.reset_continuity();
            return Transition::Committed;
        }

        if same_series {
            tracing::trace!(op = mutation.name(), "coalescing into previous undo step");
            self.present = next;
            self.last_continuous_at = Some(now);
            return Transition::Coalesced;
        }

        self.commit(next, mutation.name().to_string());
        self.last_was_continuous = continuous;
        self.last_continuous_at = continuous.then_some(now);
        Transition::Committed
    }

    fn commit(&mut self, next: Presentation, label: String) {
        let previous = std::mem::replace(&mut self.present, next);
        self.undo_stack.push(Checkpoint {
            document: previous,
            label,
        });

        // Trim if exceeded max levels
        if self.config.max_undo_levels > 0 && self.undo_stack.len() > self.config.max_undo_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    fn reset_continuity(&mut self) {
        self.last_was_continuous = false;
        self.last_continuous_at = None;
    }

    /// After undo/redo the next edit inside an open batch starts a new entry.
    fn reopen_batch(&mut self) {
        if let Some(batch) = &mut self.current_batch {
            batch.committed = false;
        }
    }

    /// Step back one entry. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(checkpoint) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, checkpoint.document);
        self.redo_stack.push(Checkpoint {
            document: current,
            label: checkpoint.label,
        });
        self.reset_continuity();
        self.reopen_batch();
        true
    }

    /// Step forward one entry. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(checkpoint) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, checkpoint.document);
        self.undo_stack.push(Checkpoint {
            document: current,
            label: checkpoint.label,
        });
        self.reset_continuity();
        self.reopen_batch();
        true
    }

    /// Replace the document wholesale and forget all history.
    pub fn reset(&mut self, present: Presentation) {
        self.present = present;
        self.clear();
    }

    /// Start a batch: every mutation until [`end_batch`](Self::end_batch)
    /// becomes one undo step labelled `label`.
    pub fn begin_batch(&mut self, label: impl Into<String>) {
        self.current_batch = Some(Batch {
            label: label.into(),
            committed: false,
        });
    }

    pub fn end_batch(&mut self) {
        if self.current_batch.take().is_some() {
            self.reset_continuity();
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Earlier states, oldest first
    pub fn past(&self) -> impl Iterator<Item = &Presentation> {
        self.undo_stack.iter().map(|c| &c.document)
    }

    /// Redo states, closest to the present first
    pub fn future(&self) -> impl Iterator<Item = &Presentation> {
        self.redo_stack.iter().rev().map(|c| &c.document)
    }

    /// Label of the edit the next undo reverts
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.label.as_str())
    }

    /// Label of the edit the next redo reapplies
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.label.as_str())
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
        self.reset_continuity();
    }
}
