//! # Document Model
//!
//! Entity definitions for a presentation and the factories that build
//! default-valued entities.
//!
//! ## Shape
//!
//! ```text
//! Presentation
//!  ├─ slides: [Slide]            (list order = playback order)
//!  │   ├─ background             (color | image | none)
//!  │   └─ elements: [SlideElement] (list order = z-order)
//!  └─ selection { slideId?, elementIds }
//! ```
//!
//! Every value owns its data, so the derived `Clone` is a deep clone: a
//! cloned presentation shares no mutable substructure with its source.
//! History snapshots rely on that.
//!
//! The serde representation is the persisted JSON shape (camelCase keys,
//! `kind` tags). Optional fields are omitted when absent and accept either
//! `null` or a missing key when read back.

use serde::{Deserialize, Serialize};

use crate::id::new_id;
use crate::layout::Rect;

pub type Id = String;

pub const DEFAULT_TEXT_CONTENT: &str = "Title";
pub const DEFAULT_TEXT_FONT_FAMILY: &str =
    "system-ui, -apple-system, 'Segoe UI', Roboto, Arial, sans-serif";
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 32.0;
pub const DEFAULT_TEXT_COLOR: &str = "#111";
pub const DEFAULT_TEXT_SIZE: Size = Size {
    width: 240.0,
    height: 80.0,
};
pub const DEFAULT_IMAGE_SIZE: Size = Size {
    width: 320.0,
    height: 220.0,
};
pub const DEFAULT_SLIDE_NAME: &str = "Slide";
pub const DEFAULT_PRESENTATION_TITLE: &str = "Presentation";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A text box. `content` is plain text unless `is_rich_text` is set, in
/// which case it holds the editor's restricted HTML subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextElement {
    pub id: Id,
    pub position: Position,
    pub size: Size,
    pub content: String,
    #[serde(default)]
    pub is_rich_text: bool,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageElement {
    pub id: Id,
    pub position: Position,
    pub size: Size,
    /// URL or data URL
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlideElement {
    Text(TextElement),
    Image(ImageElement),
}

impl SlideElement {
    pub fn id(&self) -> &str {
        match self {
            SlideElement::Text(t) => &t.id,
            SlideElement::Image(i) => &i.id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SlideElement::Text(_) => "text",
            SlideElement::Image(_) => "image",
        }
    }

    pub fn position(&self) -> Position {
        match self {
            SlideElement::Text(t) => t.position,
            SlideElement::Image(i) => i.position,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            SlideElement::Text(t) => t.size,
            SlideElement::Image(i) => i.size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position(), self.size())
    }

    pub fn set_id(&mut self, id: Id) {
        match self {
            SlideElement::Text(t) => t.id = id,
            SlideElement::Image(i) => i.id = id,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        match self {
            SlideElement::Text(t) => t.position = position,
            SlideElement::Image(i) => i.position = position,
        }
    }

    pub fn set_size(&mut self, size: Size) {
        match self {
            SlideElement::Text(t) => t.size = size,
            SlideElement::Image(i) => i.size = size,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            SlideElement::Text(t) => Some(t),
            SlideElement::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            SlideElement::Text(t) => Some(t),
            SlideElement::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            SlideElement::Image(i) => Some(i),
            SlideElement::Text(_) => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImageElement> {
        match self {
            SlideElement::Image(i) => Some(i),
            SlideElement::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum Background {
    Color {
        value: String,
    },
    Image {
        src: String,
    },
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Slide {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub background: Background,
    pub elements: Vec<SlideElement>,
}

impl Slide {
    pub fn element(&self, id: &str) -> Option<&SlideElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut SlideElement> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    pub fn contains_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Selection {
    #[serde(default)]
    pub slide_id: Option<Id>,
    pub element_ids: Vec<Id>,
}

impl Selection {
    pub fn slide(slide_id: impl Into<Id>) -> Self {
        Self {
            slide_id: Some(slide_id.into()),
            element_ids: Vec::new(),
        }
    }

    pub fn elements(slide_id: impl Into<Id>, element_ids: Vec<Id>) -> Self {
        Self {
            slide_id: Some(slide_id.into()),
            element_ids,
        }
    }

    pub fn is_element_selected(&self, id: &str) -> bool {
        self.element_ids.iter().any(|e| e == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Presentation {
    pub id: Id,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub slides: Vec<Slide>,
    pub selection: Selection,
}

impl Presentation {
    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    pub fn slide_mut(&mut self, id: &str) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    pub fn slide_index(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    pub fn selected_slide(&self) -> Option<&Slide> {
        self.selection
            .slide_id
            .as_deref()
            .and_then(|id| self.slide(id))
    }

    pub fn element_count(&self) -> usize {
        self.slides.iter().map(|s| s.elements.len()).sum()
    }

    /// Bring `selection` back in line with the slides it points into.
    ///
    /// A dangling slide id moves to the first slide (or none when the deck
    /// is empty). Element ids are restricted to the selected slide and
    /// deduplicated, first occurrence wins.
    pub fn repair_selection(&mut self) {
        let slide_ok = match &self.selection.slide_id {
            Some(id) => self.slide(id).is_some(),
            None => true,
        };
        if !slide_ok {
            self.selection.slide_id = self.slides.first().map(|s| s.id.clone());
            self.selection.element_ids.clear();
        }

        let Some(slide) = self.selected_slide() else {
            self.selection.element_ids.clear();
            return;
        };

        let mut kept: Vec<Id> = Vec::with_capacity(self.selection.element_ids.len());
        for id in &self.selection.element_ids {
            if slide.contains_element(id) && !kept.contains(id) {
                kept.push(id.clone());
            }
        }
        self.selection.element_ids = kept;
    }
}

pub fn make_slide(name: Option<&str>) -> Slide {
    Slide {
        id: new_id(),
        name: name.map(str::to_string),
        background: Background::None,
        elements: Vec::new(),
    }
}

/// Text element with default styling at the top-left margin.
/// Callers that add to a slide normally re-place it with the auto-layout.
pub fn make_text(content: Option<&str>) -> TextElement {
    TextElement {
        id: new_id(),
        position: Position::new(crate::layout::GAP, crate::layout::GAP),
        size: DEFAULT_TEXT_SIZE,
        content: content.unwrap_or(DEFAULT_TEXT_CONTENT).to_string(),
        is_rich_text: false,
        font_size: DEFAULT_TEXT_FONT_SIZE,
        font_family: DEFAULT_TEXT_FONT_FAMILY.to_string(),
        color: DEFAULT_TEXT_COLOR.to_string(),
        background_color: None,
        border_color: None,
        border_width: 0.0,
        text_align: TextAlign::Left,
        bold: false,
        italic: false,
        underline: false,
    }
}

pub fn make_image(src: &str) -> ImageElement {
    ImageElement {
        id: new_id(),
        position: Position::new(crate::layout::GAP, crate::layout::GAP),
        size: DEFAULT_IMAGE_SIZE,
        src: src.to_string(),
    }
}

/// A titled presentation holding one blank slide, which is selected.
pub fn make_presentation(title: &str) -> Presentation {
    let slide = make_slide(Some(DEFAULT_SLIDE_NAME));
    let selection = Selection::slide(slide.id.clone());
    Presentation {
        id: new_id(),
        title: title.to_string(),
        owner_id: None,
        slides: vec![slide],
        selection,
    }
}

pub fn make_empty_presentation() -> Presentation {
    make_presentation(DEFAULT_PRESENTATION_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_at(id: &str) -> SlideElement {
        let mut t = make_text(Some("x"));
        t.id = id.to_string();
        SlideElement::Text(t)
    }

    #[test]
    fn test_empty_presentation_has_selected_blank_slide() {
        let p = make_empty_presentation();
        assert_eq!(p.slides.len(), 1);
        assert_eq!(p.selection.slide_id.as_deref(), Some(p.slides[0].id.as_str()));
        assert!(p.selection.element_ids.is_empty());
        assert_eq!(p.slides[0].background, Background::None);
        assert!(p.slides[0].elements.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut p = make_empty_presentation();
        p.slides[0].elements.push(text_at("a"));
        let snapshot = p.clone();

        p.slides[0].elements[0].set_position(Position::new(500.0, 500.0));
        p.slides[0].background = Background::Color {
            value: "#fff".into(),
        };
        p.selection.element_ids.push("a".into());

        assert_eq!(snapshot.slides[0].elements[0].position(), Position::new(24.0, 24.0));
        assert_eq!(snapshot.slides[0].background, Background::None);
        assert!(snapshot.selection.element_ids.is_empty());
    }

    #[test]
    fn test_repair_selection_drops_dangling_refs() {
        let mut p = make_empty_presentation();
        let slide_id = p.slides[0].id.clone();
        p.slides[0].elements.push(text_at("a"));
        p.selection = Selection::elements(
            slide_id.clone(),
            vec!["a".into(), "ghost".into(), "a".into()],
        );

        p.repair_selection();
        assert_eq!(p.selection.element_ids, vec!["a".to_string()]);

        p.selection = Selection::elements("missing", vec!["a".into()]);
        p.repair_selection();
        assert_eq!(p.selection.slide_id, Some(slide_id));
        assert!(p.selection.element_ids.is_empty());

        p.slides.clear();
        p.selection = Selection::slide("missing");
        p.repair_selection();
        assert_eq!(p.selection, Selection::default());
    }

    #[test]
    fn test_element_json_shape() {
        let mut t = make_text(Some("Hello"));
        t.id = "t1".into();
        let json = serde_json::to_value(SlideElement::Text(t)).unwrap();

        assert_eq!(json["kind"], "text");
        assert_eq!(json["fontSize"], 32.0);
        assert_eq!(json["textAlign"], "left");
        assert!(json.get("backgroundColor").is_none());
    }

    #[test]
    fn test_background_json_shape() {
        let bg: Background = serde_json::from_str(r##"{"kind":"color","value":"#ff0000"}"##).unwrap();
        assert_eq!(
            bg,
            Background::Color {
                value: "#ff0000".into()
            }
        );
        let none: Background = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
        assert_eq!(none, Background::None);
    }
}
