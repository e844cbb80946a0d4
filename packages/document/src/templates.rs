//! Built-in slide layouts offered by "add slide from template".
//!
//! Every build produces fresh ids, so the same template can be inserted
//! any number of times.

use crate::id::new_id;
use crate::model::{
    make_slide, ImageElement, Position, Size, Slide, SlideElement, TextAlign, TextElement,
    DEFAULT_TEXT_FONT_FAMILY,
};

#[derive(Debug, Clone, Copy)]
pub struct SlideTemplate {
    pub id: &'static str,
    pub label: &'static str,
    build: fn() -> Slide,
}

impl SlideTemplate {
    pub fn build(&self) -> Slide {
        (self.build)()
    }
}

const MUTED: &str = "#475569";
const DARK: &str = "#0f172a";
const BODY: &str = "#334155";

fn text(content: &str, x: f64, y: f64, w: f64, h: f64, font_size: f64, color: &str) -> SlideElement {
    SlideElement::Text(TextElement {
        id: new_id(),
        position: Position::new(x, y),
        size: Size::new(w, h),
        content: content.to_string(),
        is_rich_text: false,
        font_size,
        font_family: DEFAULT_TEXT_FONT_FAMILY.to_string(),
        color: color.to_string(),
        background_color: None,
        border_color: None,
        border_width: 0.0,
        text_align: TextAlign::Left,
        bold: false,
        italic: false,
        underline: false,
    })
}

fn image(label: &str, x: f64, y: f64, w: f64, h: f64) -> SlideElement {
    SlideElement::Image(ImageElement {
        id: new_id(),
        position: Position::new(x, y),
        size: Size::new(w, h),
        src: placeholder_image(label, w, h),
    })
}

/// Grey SVG box with a centered label, as a data URL.
fn placeholder_image(label: &str, w: f64, h: f64) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'>\
<rect width='100%' height='100%' fill='#e2e8f0'/>\
<rect x='2' y='2' width='{iw}' height='{ih}' fill='none' stroke='#94a3b8' stroke-width='2'/>\
<text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' \
font-family='Arial, sans-serif' font-size='24' fill='#475569'>{label}</text></svg>",
        iw = w - 4.0,
        ih = h - 4.0,
    );
    format!("data:image/svg+xml;utf8,{}", percent_encode(&svg))
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'!' | b'*'
            | b'\'' | b'(' | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn named(name: &str, elements: Vec<SlideElement>) -> Slide {
    let mut slide = make_slide(Some(name));
    slide.elements = elements;
    slide
}

const TEMPLATES: &[SlideTemplate] = &[
    SlideTemplate {
        id: "title",
        label: "Title",
        build: || {
            named(
                "Title",
                vec![
                    text("Presentation title", 120.0, 160.0, 960.0, 120.0, 72.0, "#111"),
                    text("Subtitle or author", 120.0, 300.0, 960.0, 70.0, 32.0, MUTED),
                ],
            )
        },
    },
    SlideTemplate {
        id: "title-object",
        label: "Title + Object",
        build: || {
            named(
                "Title + Object",
                vec![
                    text("Title", 80.0, 50.0, 1040.0, 70.0, 54.0, "#111"),
                    text("Short description or bullet list", 80.0, 160.0, 520.0, 360.0, 28.0, "#1f2937"),
                    image("Image", 640.0, 160.0, 480.0, 360.0),
                ],
            )
        },
    },
    SlideTemplate {
        id: "section-header",
        label: "Section Header",
        build: || {
            named(
                "Section Header",
                vec![text("Section title", 120.0, 260.0, 960.0, 120.0, 64.0, DARK)],
            )
        },
    },
    SlideTemplate {
        id: "two-objects",
        label: "Two Objects",
        build: || {
            named(
                "Two Objects",
                vec![
                    text("Title", 80.0, 40.0, 1040.0, 70.0, 52.0, "#111"),
                    image("Object A", 120.0, 150.0, 420.0, 260.0),
                    image("Object B", 660.0, 150.0, 420.0, 260.0),
                    text("Caption A", 120.0, 430.0, 420.0, 60.0, 24.0, MUTED),
                    text("Caption B", 660.0, 430.0, 420.0, 60.0, 24.0, MUTED),
                ],
            )
        },
    },
    SlideTemplate {
        id: "comparison",
        label: "Comparison",
        build: || {
            named(
                "Comparison",
                vec![
                    text("Comparison", 80.0, 40.0, 1040.0, 70.0, 50.0, "#111"),
                    text("Option A", 120.0, 150.0, 420.0, 50.0, 32.0, DARK),
                    text("Option B", 660.0, 150.0, 420.0, 50.0, 32.0, DARK),
                    text("- Point 1\n- Point 2\n- Point 3", 120.0, 220.0, 420.0, 320.0, 24.0, BODY),
                    text("- Point 1\n- Point 2\n- Point 3", 660.0, 220.0, 420.0, 320.0, 24.0, BODY),
                ],
            )
        },
    },
    SlideTemplate {
        id: "title-only",
        label: "Title Only",
        build: || {
            named(
                "Title Only",
                vec![text("Title", 120.0, 120.0, 960.0, 120.0, 76.0, "#111")],
            )
        },
    },
    SlideTemplate {
        id: "blank",
        label: "Blank",
        build: || named("Blank", vec![]),
    },
    SlideTemplate {
        id: "object-caption",
        label: "Object + Caption",
        build: || {
            named(
                "Object + Caption",
                vec![
                    text("Title", 80.0, 40.0, 1040.0, 60.0, 44.0, "#111"),
                    image("Object", 260.0, 140.0, 680.0, 380.0),
                    text("Caption describing the object", 220.0, 540.0, 760.0, 70.0, 26.0, MUTED),
                ],
            )
        },
    },
    SlideTemplate {
        id: "picture-caption",
        label: "Picture + Caption",
        build: || {
            named(
                "Picture + Caption",
                vec![
                    image("Picture", 80.0, 90.0, 1040.0, 440.0),
                    text("Caption", 120.0, 560.0, 960.0, 70.0, 28.0, BODY),
                ],
            )
        },
    },
];

pub fn templates() -> &'static [SlideTemplate] {
    TEMPLATES
}

pub fn template(id: &str) -> Option<&'static SlideTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}
