//! # Presentation Operations
//!
//! The closed set of edits, each a pure function from the current
//! presentation to the next one. Inputs are borrowed and never touched; the
//! result is always a fresh value.
//!
//! ## Failure policy
//!
//! Operations never fail. A slide or element id that does not resolve turns
//! the call into a no-op that returns a copy of the input. Callers are
//! expected not to offer such actions, but a stale id must not corrupt the
//! document.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use slidecraft_document::{
    make_image, make_slide, make_text, new_id, place_new_element, template, Background, Id,
    Position, Presentation, Rect, Selection, Size, Slide, SlideElement, TextAlign, TextElement,
    DEFAULT_SLIDE_NAME,
};

/// Offset applied to duplicated and pasted elements, on both axes.
pub const DUPLICATE_OFFSET: f64 = 20.0;
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 8.0..=200.0;
pub const BORDER_WIDTH_RANGE: RangeInclusive<f64> = 0.0..=20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Start,
    Center,
    End,
}

/// What alignment measures against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignTarget {
    Slide,
    Selection,
}

/// A change to one text element's content or styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TextUpdate {
    Content {
        content: String,
        #[serde(default)]
        is_rich_text: bool,
    },
    Color {
        color: String,
    },
    Background {
        color: Option<String>,
    },
    Border {
        color: Option<String>,
        width: f64,
    },
    FontSize {
        font_size: f64,
    },
    FontFamily {
        font_family: String,
    },
    Align {
        align: TextAlign,
    },
    /// `None` leaves the flag as it is
    Style {
        bold: Option<bool>,
        italic: Option<bool>,
        underline: Option<bool>,
    },
}

impl TextUpdate {
    fn apply_to(&self, text: &mut TextElement) {
        match self {
            TextUpdate::Content {
                content,
                is_rich_text,
            } => {
                text.content = content.clone();
                text.is_rich_text = *is_rich_text;
            }
            TextUpdate::Color { color } => text.color = color.clone(),
            TextUpdate::Background { color } => text.background_color = color.clone(),
            TextUpdate::Border { color, width } => {
                text.border_color = color.clone();
                text.border_width = clamp(*width, &BORDER_WIDTH_RANGE);
            }
            TextUpdate::FontSize { font_size } => {
                text.font_size = clamp(*font_size, &FONT_SIZE_RANGE);
            }
            TextUpdate::FontFamily { font_family } => text.font_family = font_family.clone(),
            TextUpdate::Align { align } => text.text_align = *align,
            TextUpdate::Style {
                bold,
                italic,
                underline,
            } => {
                if let Some(b) = bold {
                    text.bold = *b;
                }
                if let Some(i) = italic {
                    text.italic = *i;
                }
                if let Some(u) = underline {
                    text.underline = *u;
                }
            }
        }
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

fn contains_id(ids: &[Id], id: &str) -> bool {
    ids.iter().any(|i| i == id)
}

// ---------------------------------------------------------------------------
// Presentation-level operations
// ---------------------------------------------------------------------------

pub fn rename_presentation(p: &Presentation, title: &str) -> Presentation {
    let mut next = p.clone();
    next.title = title.to_string();
    next
}

/// Append a slide (blank, or built from `template_id` when it names a known
/// template) and select it.
pub fn add_slide(p: &Presentation, template_id: Option<&str>) -> Presentation {
    let slide = match template_id.and_then(template) {
        Some(t) => t.build(),
        None => make_slide(Some(DEFAULT_SLIDE_NAME)),
    };

    let mut next = p.clone();
    next.selection = Selection::slide(slide.id.clone());
    next.slides.push(slide);
    next
}

/// Remove the selected slide. The slide that moves into its index becomes
/// selected, else the one before it, else nothing.
pub fn remove_slide(p: &Presentation) -> Presentation {
    let Some(idx) = p
        .selection
        .slide_id
        .as_deref()
        .and_then(|id| p.slide_index(id))
    else {
        return p.clone();
    };

    let mut next = p.clone();
    next.slides.remove(idx);

    let fallback = next
        .slides
        .get(idx)
        .or_else(|| idx.checked_sub(1).and_then(|i| next.slides.get(i)))
        .map(|s| s.id.clone());

    next.selection = Selection {
        slide_id: fallback,
        element_ids: Vec::new(),
    };
    next
}

/// Move one slide to `target_index`, clamped to the valid range.
pub fn move_slide(p: &Presentation, slide_id: &str, target_index: usize) -> Presentation {
    let Some(idx) = p.slide_index(slide_id) else {
        return p.clone();
    };

    let mut next = p.clone();
    let slide = next.slides.remove(idx);
    let to = target_index.min(next.slides.len());
    next.slides.insert(to, slide);
    next
}

/// Move a group of slides as one contiguous block in front of `target_id`.
///
/// The block keeps the order the slides already had in the deck, whatever
/// order `slide_ids` lists them in. The insertion point is computed against
/// the slides that stay put:
/// - `target_id` among them: right before it
/// - `target_id` is one of the moved slides: before the first staying slide
///   that followed it
/// - otherwise (none, unknown, or nothing follows): at the end
///
/// The first moved slide becomes selected.
pub fn reorder_slides(p: &Presentation, slide_ids: &[Id], target_id: Option<&str>) -> Presentation {
    let (moving, remaining): (Vec<&Slide>, Vec<&Slide>) =
        p.slides.iter().partition(|s| contains_id(slide_ids, &s.id));
    if moving.is_empty() {
        return p.clone();
    }

    let position_in_remaining = |id: &str| remaining.iter().position(|s| s.id == id);
    let insert_at = target_id
        .and_then(|target| {
            position_in_remaining(target).or_else(|| {
                let ti = p.slide_index(target)?;
                p.slides[ti + 1..]
                    .iter()
                    .find(|s| !contains_id(slide_ids, &s.id))
                    .and_then(|s| position_in_remaining(&s.id))
            })
        })
        .unwrap_or(remaining.len());

    let mut slides: Vec<Slide> = Vec::with_capacity(p.slides.len());
    slides.extend(remaining[..insert_at].iter().map(|s| (*s).clone()));
    slides.extend(moving.iter().map(|s| (*s).clone()));
    slides.extend(remaining[insert_at..].iter().map(|s| (*s).clone()));

    let mut next = p.clone();
    next.selection = Selection::slide(moving[0].id.clone());
    next.slides = slides;
    next
}

/// Focus a slide; element selection is cleared.
pub fn select_slide(p: &Presentation, slide_id: &str) -> Presentation {
    if p.slide(slide_id).is_none() {
        return p.clone();
    }
    let mut next = p.clone();
    next.selection = Selection::slide(slide_id);
    next
}

/// Select an element of the focused slide. With `multi`, toggle it in the
/// current selection instead of replacing it.
pub fn select_elements(p: &Presentation, element_id: &str, multi: bool) -> Presentation {
    let on_slide = p
        .selected_slide()
        .is_some_and(|s| s.contains_element(element_id));
    if !on_slide {
        return p.clone();
    }

    let mut next = p.clone();
    let ids = &mut next.selection.element_ids;
    if !multi {
        *ids = vec![element_id.to_string()];
    } else if let Some(pos) = ids.iter().position(|id| id == element_id) {
        ids.remove(pos);
    } else {
        ids.push(element_id.to_string());
    }
    next
}

// ---------------------------------------------------------------------------
// Element operations
// ---------------------------------------------------------------------------

/// Append `element` to the slide, placing it automatically when no position
/// is given, and select it alone.
fn insert_element(
    p: &Presentation,
    slide_id: &str,
    mut element: SlideElement,
    position: Option<Position>,
) -> Presentation {
    let mut next = p.clone();
    let Some(slide) = next.slide_mut(slide_id) else {
        return next;
    };

    let position = position.unwrap_or_else(|| place_new_element(slide, element.size()));
    element.set_position(position);
    let id = element.id().to_string();
    slide.elements.push(element);

    next.selection = Selection::elements(slide_id, vec![id]);
    next
}

pub fn add_text(
    p: &Presentation,
    slide_id: &str,
    content: &str,
    position: Option<Position>,
) -> Presentation {
    let text = make_text(Some(content));
    insert_element(p, slide_id, SlideElement::Text(text), position)
}

pub fn add_image(
    p: &Presentation,
    slide_id: &str,
    src: &str,
    size: Option<Size>,
    position: Option<Position>,
) -> Presentation {
    let mut image = make_image(src);
    if let Some(size) = size {
        image.size = size;
    }
    insert_element(p, slide_id, SlideElement::Image(image), position)
}

/// Apply `edit` to one element. No-op when the slide or element is missing
/// or when `edit` declines by returning `false`.
fn edit_element(
    p: &Presentation,
    slide_id: &str,
    element_id: &str,
    edit: impl FnOnce(&mut SlideElement) -> bool,
) -> Presentation {
    let mut next = p.clone();
    let Some(element) = next
        .slide_mut(slide_id)
        .and_then(|s| s.element_mut(element_id))
    else {
        return next;
    };
    if edit(element) {
        next
    } else {
        p.clone()
    }
}

/// Absolute move (not a delta)
pub fn move_element(p: &Presentation, slide_id: &str, element_id: &str, x: f64, y: f64) -> Presentation {
    edit_element(p, slide_id, element_id, |el| {
        el.set_position(Position::new(x, y));
        true
    })
}

/// Set position and size together; resize handles can move the anchor.
pub fn resize_element(
    p: &Presentation,
    slide_id: &str,
    element_id: &str,
    position: Position,
    size: Size,
) -> Presentation {
    edit_element(p, slide_id, element_id, |el| {
        el.set_position(position);
        el.set_size(size);
        true
    })
}

/// Remove every listed element that exists and clear element selection.
pub fn remove_elements(p: &Presentation, slide_id: &str, element_ids: &[Id]) -> Presentation {
    let hit = p
        .slide(slide_id)
        .is_some_and(|s| s.elements.iter().any(|e| contains_id(element_ids, e.id())));
    if !hit {
        return p.clone();
    }

    let mut next = p.clone();
    if let Some(slide) = next.slide_mut(slide_id) {
        slide.elements.retain(|e| !contains_id(element_ids, e.id()));
    }
    next.selection = Selection::slide(slide_id);
    next
}

/// Append offset copies with fresh ids and select exactly the copies.
fn append_copies<'a>(
    p: &Presentation,
    slide_id: &str,
    sources: impl IntoIterator<Item = &'a SlideElement>,
) -> Presentation {
    let copies: Vec<SlideElement> = sources
        .into_iter()
        .map(|source| {
            let mut copy = source.clone();
            copy.set_id(new_id());
            copy.set_position(source.position().offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET));
            copy
        })
        .collect();
    if copies.is_empty() {
        return p.clone();
    }

    let mut next = p.clone();
    let Some(slide) = next.slide_mut(slide_id) else {
        return p.clone();
    };
    let ids = copies.iter().map(|c| c.id().to_string()).collect();
    slide.elements.extend(copies);
    next.selection = Selection::elements(slide_id, ids);
    next
}

/// Copy the listed elements (in z-order) onto the same slide.
pub fn duplicate_elements(p: &Presentation, slide_id: &str, element_ids: &[Id]) -> Presentation {
    let Some(slide) = p.slide(slide_id) else {
        return p.clone();
    };
    let sources = slide
        .elements
        .iter()
        .filter(|e| contains_id(element_ids, e.id()));
    append_copies(p, slide_id, sources)
}

/// Insert clipboard snapshots taken earlier, possibly from another slide.
pub fn paste_elements(p: &Presentation, slide_id: &str, elements: &[SlideElement]) -> Presentation {
    if p.slide(slide_id).is_none() {
        return p.clone();
    }
    append_copies(p, slide_id, elements)
}

pub fn set_slide_background(p: &Presentation, slide_id: &str, background: &Background) -> Presentation {
    let mut next = p.clone();
    if let Some(slide) = next.slide_mut(slide_id) {
        slide.background = background.clone();
    }
    next
}

/// Change one field group of a text element. Images are left alone.
pub fn update_text(
    p: &Presentation,
    slide_id: &str,
    element_id: &str,
    update: &TextUpdate,
) -> Presentation {
    edit_element(p, slide_id, element_id, |el| match el.as_text_mut() {
        Some(text) => {
            update.apply_to(text);
            true
        }
        None => false,
    })
}

pub fn update_image_src(p: &Presentation, slide_id: &str, element_id: &str, src: &str) -> Presentation {
    edit_element(p, slide_id, element_id, |el| match el.as_image_mut() {
        Some(image) => {
            image.src = src.to_string();
            true
        }
        None => false,
    })
}

fn aligned(extent: f64, box_start: f64, box_extent: f64, mode: AlignMode) -> f64 {
    match mode {
        AlignMode::Start => box_start,
        AlignMode::Center => box_start + (box_extent - extent) / 2.0,
        AlignMode::End => box_start + box_extent - extent,
    }
}

/// Line elements up along one axis, against the slide or against the
/// bounding box of the elements themselves. A single element has nothing to
/// line up with, so `AlignTarget::Selection` falls back to the slide.
pub fn align_elements(
    p: &Presentation,
    slide_id: &str,
    element_ids: &[Id],
    axis: Axis,
    mode: AlignMode,
    relative_to: AlignTarget,
) -> Presentation {
    let Some(slide) = p.slide(slide_id) else {
        return p.clone();
    };
    let rects: Vec<Rect> = slide
        .elements
        .iter()
        .filter(|e| contains_id(element_ids, e.id()))
        .map(|e| e.rect())
        .collect();
    if rects.is_empty() {
        return p.clone();
    }

    let target = match relative_to {
        AlignTarget::Selection if rects.len() >= 2 => {
            Rect::bounding(rects.iter().copied()).unwrap_or_else(Rect::slide)
        }
        _ => Rect::slide(),
    };

    let mut next = p.clone();
    if let Some(slide) = next.slide_mut(slide_id) {
        for el in slide
            .elements
            .iter_mut()
            .filter(|e| contains_id(element_ids, e.id()))
        {
            let mut pos = el.position();
            let size = el.size();
            match axis {
                Axis::X => pos.x = aligned(size.width, target.x, target.width, mode),
                Axis::Y => pos.y = aligned(size.height, target.y, target.height, mode),
            }
            el.set_position(pos);
        }
    }
    next
}
