//! # Presentation Mutations
//!
//! One variant per editing intent, each carrying typed arguments. This is
//! the single entry point the UI dispatches through; [`Mutation::apply`]
//! routes every variant to its operation in [`crate::operations`].
//!
//! ## Semantics
//!
//! - Applying never fails: unresolved ids leave the document as it was
//! - Selection is repaired after every mutation so it only ever points at
//!   slides and elements that exist
//! - `MoveElement` and `ResizeElement` are *continuous*: a drag emits many of
//!   them per second and the history engine folds a burst into one step
//!
//! Mutations serialize as `{"op": "moveElement", "slideId": ..., ...}` so
//! recorded sessions can be replayed.

use serde::{Deserialize, Serialize};
use slidecraft_document::{Background, Id, Position, Presentation, Size, SlideElement};

use crate::operations::{self, AlignMode, AlignTarget, Axis, TextUpdate};

/// Semantic edits to a presentation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    RenamePresentation {
        title: String,
    },

    /// Append a blank slide, or one built from a named template
    AddSlide {
        #[serde(default)]
        template_id: Option<String>,
    },

    /// Remove the selected slide
    RemoveSlide,

    MoveSlide {
        slide_id: Id,
        target_index: usize,
    },

    /// Move a group of slides in front of `target_id` (or to the end)
    ReorderSlides {
        slide_ids: Vec<Id>,
        #[serde(default)]
        target_id: Option<Id>,
    },

    SelectSlide {
        slide_id: Id,
    },

    /// Select an element on the focused slide; `multi` toggles membership
    SelectElements {
        element_id: Id,
        #[serde(default)]
        multi: bool,
    },

    AddText {
        slide_id: Id,
        content: String,
        #[serde(default)]
        position: Option<Position>,
    },

    AddImage {
        slide_id: Id,
        src: String,
        #[serde(default)]
        size: Option<Size>,
        #[serde(default)]
        position: Option<Position>,
    },

    MoveElement {
        slide_id: Id,
        element_id: Id,
        x: f64,
        y: f64,
    },

    ResizeElement {
        slide_id: Id,
        element_id: Id,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    RemoveElements {
        slide_id: Id,
        element_ids: Vec<Id>,
    },

    DuplicateElements {
        slide_id: Id,
        element_ids: Vec<Id>,
    },

    /// Insert elements captured on an earlier copy
    PasteElements {
        slide_id: Id,
        elements: Vec<SlideElement>,
    },

    SetSlideBackground {
        slide_id: Id,
        background: Background,
    },

    UpdateText {
        slide_id: Id,
        element_id: Id,
        update: TextUpdate,
    },

    UpdateImageSrc {
        slide_id: Id,
        element_id: Id,
        src: String,
    },

    AlignElements {
        slide_id: Id,
        element_ids: Vec<Id>,
        axis: Axis,
        mode: AlignMode,
        relative_to: AlignTarget,
    },
}

impl Mutation {
    /// Compute the presentation that results from this mutation.
    pub fn apply(&self, doc: &Presentation) -> Presentation {
        let mut next = match self {
            Mutation::RenamePresentation { title } => operations::rename_presentation(doc, title),

            Mutation::AddSlide { template_id } => {
                operations::add_slide(doc, template_id.as_deref())
            }

            Mutation::RemoveSlide => operations::remove_slide(doc),

            Mutation::MoveSlide {
                slide_id,
                target_index,
            } => operations::move_slide(doc, slide_id, *target_index),

            Mutation::ReorderSlides {
                slide_ids,
                target_id,
            } => operations::reorder_slides(doc, slide_ids, target_id.as_deref()),

            Mutation::SelectSlide { slide_id } => operations::select_slide(doc, slide_id),

            Mutation::SelectElements { element_id, multi } => {
                operations::select_elements(doc, element_id, *multi)
            }

            Mutation::AddText {
                slide_id,
                content,
                position,
            } => operations::add_text(doc, slide_id, content, *position),

            Mutation::AddImage {
                slide_id,
                src,
                size,
                position,
            } => operations::add_image(doc, slide_id, src, *size, *position),

            Mutation::MoveElement {
                slide_id,
                element_id,
                x,
                y,
            } => operations::move_element(doc, slide_id, element_id, *x, *y),

            Mutation::ResizeElement {
                slide_id,
                element_id,
                x,
                y,
                width,
                height,
            } => operations::resize_element(
                doc,
                slide_id,
                element_id,
                Position::new(*x, *y),
                Size::new(*width, *height),
            ),

            Mutation::RemoveElements {
                slide_id,
                element_ids,
            } => operations::remove_elements(doc, slide_id, element_ids),

            Mutation::DuplicateElements {
                slide_id,
                element_ids,
            } => operations::duplicate_elements(doc, slide_id, element_ids),

            Mutation::PasteElements { slide_id, elements } => {
                operations::paste_elements(doc, slide_id, elements)
            }

            Mutation::SetSlideBackground {
                slide_id,
                background,
            } => operations::set_slide_background(doc, slide_id, background),

            Mutation::UpdateText {
                slide_id,
                element_id,
                update,
            } => operations::update_text(doc, slide_id, element_id, update),

            Mutation::UpdateImageSrc {
                slide_id,
                element_id,
                src,
            } => operations::update_image_src(doc, slide_id, element_id, src),

            Mutation::AlignElements {
                slide_id,
                element_ids,
                axis,
                mode,
                relative_to,
            } => operations::align_elements(doc, slide_id, element_ids, *axis, *mode, *relative_to),
        };

        next.repair_selection();
        next
    }

    /// Whether this mutation is part of a drag-style gesture
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            Mutation::MoveElement { .. } | Mutation::ResizeElement { .. }
        )
    }

    /// Stable name, used for logging and undo labels
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::RenamePresentation { .. } => "renamePresentation",
            Mutation::AddSlide { .. } => "addSlide",
            Mutation::RemoveSlide => "removeSlide",
            Mutation::MoveSlide { .. } => "moveSlide",
            Mutation::ReorderSlides { .. } => "reorderSlides",
            Mutation::SelectSlide { .. } => "selectSlide",
            Mutation::SelectElements { .. } => "selectElements",
            Mutation::AddText { .. } => "addText",
            Mutation::AddImage { .. } => "addImage",
            Mutation::MoveElement { .. } => "moveElement",
            Mutation::ResizeElement { .. } => "resizeElement",
            Mutation::RemoveElements { .. } => "removeElements",
            Mutation::DuplicateElements { .. } => "duplicateElements",
            Mutation::PasteElements { .. } => "pasteElements",
            Mutation::SetSlideBackground { .. } => "setSlideBackground",
            Mutation::UpdateText { .. } => "updateText",
            Mutation::UpdateImageSrc { .. } => "updateImageSrc",
            Mutation::AlignElements { .. } => "alignElements",
        }
    }
}
