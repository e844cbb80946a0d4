//! # Editor Store
//!
//! Owns the current presentation and its history. Every change goes through
//! [`EditorStore::dispatch`]; subscribers hear about each new current
//! document exactly once.
//!
//! ```rust,ignore
//! let mut store = EditorStore::new(make_presentation("Quarterly review"));
//! let id = store.subscribe(|doc| render(doc));
//!
//! store.dispatch(Mutation::AddSlide { template_id: Some("title".into()) });
//! store.dispatch(Action::Undo);
//! ```

use slidecraft_document::{parse_presentation, validate, Presentation};

use crate::clock::{Clock, SystemClock};
use crate::errors::EditorError;
use crate::undo_stack::{HistoryConfig, Transition, UndoStack};
use crate::Mutation;

/// Anything the store can be asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Mutate(Mutation),
    Undo,
    Redo,
}

impl From<Mutation> for Action {
    fn from(m: Mutation) -> Self {
        Action::Mutate(m)
    }
}

/// Handle returned by [`EditorStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Presentation)>;

pub struct EditorStore {
    history: UndoStack,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl EditorStore {
    pub fn new(initial: Presentation) -> Self {
        Self::with_config(initial, HistoryConfig::default(), Box::new(SystemClock))
    }

    pub fn with_config(mut initial: Presentation, config: HistoryConfig, clock: Box<dyn Clock>) -> Self {
        initial.repair_selection();
        Self {
            history: UndoStack::new(initial, config),
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn current(&self) -> &Presentation {
        self.history.present()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) -> Transition {
        match action.into() {
            Action::Mutate(mutation) => self.apply(mutation),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
        }
    }

    fn apply(&mut self, mutation: Mutation) -> Transition {
        let next = mutation.apply(self.history.present());
        let now = self.clock.now_millis();
        let transition = self.history.record(&mutation, next, now);

        tracing::debug!(
            op = mutation.name(),
            ?transition,
            undo_levels = self.history.undo_levels(),
            "dispatch"
        );

        if transition.is_change() {
            self.notify();
        }
        transition
    }

    pub fn undo(&mut self) -> Transition {
        if !self.history.undo() {
            return Transition::Unchanged;
        }
        tracing::debug!(undo_levels = self.history.undo_levels(), "undo");
        self.notify();
        Transition::Undone
    }

    pub fn redo(&mut self) -> Transition {
        if !self.history.redo() {
            return Transition::Unchanged;
        }
        tracing::debug!(redo_levels = self.history.redo_levels(), "redo");
        self.notify();
        Transition::Redone
    }

    /// Replace the document wholesale. History is discarded; the loaded
    /// document is not undoable.
    pub fn load(&mut self, mut doc: Presentation) -> Result<Transition, EditorError> {
        if let Err(e) = validate(&doc) {
            tracing::warn!(error = %e, "rejected presentation load");
            return Err(e.into());
        }
        doc.repair_selection();
        self.history.reset(doc);
        self.notify();
        Ok(Transition::Loaded)
    }

    /// Parse, validate and load JSON text.
    pub fn load_json(&mut self, json: &str) -> Result<Transition, EditorError> {
        let doc = parse_presentation(json).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected presentation load");
        })?;
        self.load(doc)
    }

    /// See [`UndoStack::begin_batch`]
    pub fn begin_batch(&mut self, label: impl Into<String>) {
        self.history.begin_batch(label);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Presentation) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let doc = self.history.present();
        for (_, listener) in &mut self.listeners {
            listener(doc);
        }
    }
}

impl std::fmt::Debug for EditorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorStore")
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
