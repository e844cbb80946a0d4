//! # Auto-Layout Placer
//!
//! Finds a free spot on a slide for an element added without explicit
//! coordinates (toolbar "add text" / "add image").
//!
//! Candidates are scanned row by row, left to right, starting at twice the
//! gap from the top-left corner. Columns advance by the element width plus
//! the gap, rows by its height plus the gap. A candidate is rejected when it
//! overlaps any existing element. When the rows run out the element is put
//! at the bottom-left margin, overlapping if it must: placement never fails.

use crate::model::{Position, Size, Slide};

/// Canonical slide canvas width, in document pixels.
pub const SLIDE_WIDTH: f64 = 1200.0;
/// Canonical slide canvas height, in document pixels.
pub const SLIDE_HEIGHT: f64 = 675.0;
/// Spacing between auto-placed elements and the canvas margin.
pub const GAP: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// The whole canvas.
    pub fn slide() -> Self {
        Self::new(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Open-interval overlap test: rectangles that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom())
    }

    /// Smallest rectangle covering every rect in `rects`.
    pub fn bounding(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
        rects.into_iter().fold(None, |acc, r| {
            Some(match acc {
                None => r,
                Some(a) => {
                    let x = a.x.min(r.x);
                    let y = a.y.min(r.y);
                    Rect::new(x, y, a.right().max(r.right()) - x, a.bottom().max(r.bottom()) - y)
                }
            })
        })
    }
}

fn intersects_any(rect: &Rect, slide: &Slide) -> bool {
    slide.elements.iter().any(|el| rect.intersects(&el.rect()))
}

/// Pick a position for an element of `size` that avoids every element
/// already on `slide`.
pub fn place_new_element(slide: &Slide, size: Size) -> Position {
    let start_x = GAP * 2.0;
    let start_y = GAP * 2.0;
    let max_x = SLIDE_WIDTH - GAP - size.width;
    let step_x = size.width + GAP;
    let step_y = size.height + GAP;

    let fallback = || {
        tracing::trace!(?size, "auto-layout exhausted, falling back to bottom margin");
        Position::new(start_x, (SLIDE_HEIGHT - GAP - size.height).max(0.0))
    };

    // A non-positive or NaN step would never leave the canvas
    if !(step_x > 0.0 && step_y > 0.0) || !size.width.is_finite() || !size.height.is_finite() {
        return fallback();
    }

    let mut y = start_y;
    loop {
        let mut x = start_x;
        while x <= max_x {
            let candidate = Rect::new(x, y, size.width, size.height);
            if !intersects_any(&candidate, slide) {
                return Position::new(x, y);
            }
            x += step_x;
        }

        y += step_y;
        if y + size.height > SLIDE_HEIGHT - GAP {
            return fallback();
        }
    }
}
