//! # Validation Boundary
//!
//! Untrusted presentation JSON (storage, file import) goes through
//! [`parse_presentation`] before it may become the editor's document.
//!
//! Two passes:
//! 1. **Structural**: strict deserialization. Unknown keys, missing required
//!    keys, wrong types and unknown `kind` tags are rejected.
//! 2. **Semantic**: non-empty ids, unique slide ids, element ids unique
//!    within their slide, finite coordinates, non-negative sizes.
//!
//! Selection consistency is not a rejection reason; the store repairs it on
//! load.

use std::collections::HashSet;

use thiserror::Error;

use crate::id::new_id;
use crate::model::{
    make_slide, Presentation, Selection, SlideElement, DEFAULT_PRESENTATION_TITLE,
    DEFAULT_SLIDE_NAME,
};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Not a valid presentation document: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Empty id at {path}")]
    EmptyId { path: String },

    #[error("Duplicate slide id '{id}' at {path}")]
    DuplicateSlideId { id: String, path: String },

    #[error("Duplicate element id '{id}' at {path}")]
    DuplicateElementId { id: String, path: String },

    #[error("Non-finite number in {field} at {path}")]
    NonFinite { field: &'static str, path: String },

    #[error("Negative size at {path}")]
    NegativeSize { path: String },
}

/// Deserialize and validate a presentation from JSON text.
pub fn parse_presentation(json: &str) -> Result<Presentation, ValidationError> {
    let presentation: Presentation = serde_json::from_str(json)?;
    validate(&presentation)?;
    Ok(presentation)
}

/// Semantic checks on an already well-typed presentation.
pub fn validate(p: &Presentation) -> Result<(), ValidationError> {
    if p.id.is_empty() {
        return Err(ValidationError::EmptyId { path: "id".into() });
    }

    let mut slide_ids = HashSet::new();
    for (si, slide) in p.slides.iter().enumerate() {
        let slide_path = format!("slides[{si}]");
        if slide.id.is_empty() {
            return Err(ValidationError::EmptyId { path: slide_path });
        }
        if !slide_ids.insert(slide.id.as_str()) {
            return Err(ValidationError::DuplicateSlideId {
                id: slide.id.clone(),
                path: slide_path,
            });
        }

        let mut element_ids = HashSet::new();
        for (ei, el) in slide.elements.iter().enumerate() {
            let path = format!("{slide_path}.elements[{ei}]");
            if el.id().is_empty() {
                return Err(ValidationError::EmptyId { path });
            }
            if !element_ids.insert(el.id()) {
                return Err(ValidationError::DuplicateElementId {
                    id: el.id().to_string(),
                    path,
                });
            }
            check_geometry(el, &path)?;
        }
    }

    Ok(())
}

fn check_geometry(el: &SlideElement, path: &str) -> Result<(), ValidationError> {
    let pos = el.position();
    let size = el.size();
    let non_finite = |field| ValidationError::NonFinite {
        field,
        path: path.to_string(),
    };

    if !pos.x.is_finite() || !pos.y.is_finite() {
        return Err(non_finite("position"));
    }
    if !size.width.is_finite() || !size.height.is_finite() {
        return Err(non_finite("size"));
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(ValidationError::NegativeSize {
            path: path.to_string(),
        });
    }
    if let SlideElement::Text(t) = el {
        if !t.font_size.is_finite() {
            return Err(non_finite("fontSize"));
        }
        if !t.border_width.is_finite() {
            return Err(non_finite("borderWidth"));
        }
    }
    Ok(())
}

/// Turn an imported presentation into a new document of its own: fresh id,
/// at least one slide, a usable title, first slide selected.
pub fn prepare_imported(mut p: Presentation, fallback_title: Option<&str>) -> Presentation {
    if p.slides.is_empty() {
        p.slides.push(make_slide(Some(DEFAULT_SLIDE_NAME)));
    }

    let title = p.title.trim();
    p.title = if !title.is_empty() {
        title.to_string()
    } else {
        fallback_title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PRESENTATION_TITLE)
            .to_string()
    };

    p.id = new_id();
    p.selection = Selection::slide(p.slides[0].id.clone());
    p
}
