//! # Slidecraft Editor
//!
//! The live side of the presentation editor: intents, the operations behind
//! them, and the store that keeps history.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: emits Mutation / Undo / Redo            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: EditorStore::dispatch                │
//! │  - Route the intent to its operation        │
//! │  - Record the result in the undo stack      │
//! │  - Notify subscribers                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ operations: pure Presentation → Presentation│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: an operation never touches its input
//! 2. **Edits never fail**: a stale id is a no-op, not an error
//! 3. **One gesture, one undo step**: fast drags are coalesced
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slidecraft_editor::{Action, EditorStore, Mutation};
//! use slidecraft_document::make_presentation;
//!
//! let mut store = EditorStore::new(make_presentation("Demo"));
//! let slide_id = store.current().slides[0].id.clone();
//!
//! store.dispatch(Mutation::AddText {
//!     slide_id,
//!     content: "Hello".to_string(),
//!     position: None,
//! });
//! store.dispatch(Action::Undo);
//! ```

pub mod clock;
mod errors;
mod mutations;
pub mod operations;
mod store;
mod undo_stack;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::EditorError;
pub use mutations::Mutation;
pub use operations::{AlignMode, AlignTarget, Axis, TextUpdate};
pub use store::{Action, EditorStore, SubscriptionId};
pub use undo_stack::{Checkpoint, HistoryConfig, Transition, UndoStack, DEFAULT_COALESCE_WINDOW_MS};
