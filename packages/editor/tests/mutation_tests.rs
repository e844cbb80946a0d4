//! Tests for individual mutations routed through `Mutation::apply`

use std::collections::HashSet;

use pretty_assertions::{assert_eq, assert_ne};
use slidecraft_document::{
    make_empty_presentation, Background, Position, Presentation, Selection, Size, SlideElement,
    DEFAULT_IMAGE_SIZE, DEFAULT_TEXT_FONT_SIZE,
};
use slidecraft_editor::{AlignMode, AlignTarget, Axis, Mutation, TextUpdate};

fn deck() -> (Presentation, String) {
    let doc = make_empty_presentation();
    let slide_id = doc.slides[0].id.clone();
    (doc, slide_id)
}

fn add_text(doc: &Presentation, slide_id: &str, content: &str) -> (Presentation, String) {
    let next = Mutation::AddText {
        slide_id: slide_id.to_string(),
        content: content.to_string(),
        position: None,
    }
    .apply(doc);
    let id = next.selection.element_ids[0].clone();
    (next, id)
}

/// Two slides; the first holds a text and an image, the image is selected.
struct Fixture {
    doc: Presentation,
    first: String,
    second: String,
    text: String,
    image: String,
}

fn fixture() -> Fixture {
    let (doc, first) = deck();
    let (doc, text) = add_text(&doc, &first, "body");
    let doc = Mutation::AddImage {
        slide_id: first.clone(),
        src: "a.png".into(),
        size: None,
        position: None,
    }
    .apply(&doc);
    let image = doc.selection.element_ids[0].clone();
    let doc = Mutation::AddSlide { template_id: None }.apply(&doc);
    let second = doc.slides[1].id.clone();
    let doc = Mutation::SelectElements {
        element_id: image.clone(),
        multi: false,
    }
    .apply(&Mutation::SelectSlide {
        slide_id: first.clone(),
    }
    .apply(&doc));
    Fixture {
        doc,
        first,
        second,
        text,
        image,
    }
}

/// One effective mutation of every kind against the fixture
fn every_mutation(f: &Fixture) -> Vec<Mutation> {
    let clipboard = vec![f.doc.slides[0].element(&f.text).unwrap().clone()];
    vec![
        Mutation::RenamePresentation { title: "X".into() },
        Mutation::AddSlide {
            template_id: Some("title".into()),
        },
        Mutation::RemoveSlide,
        Mutation::MoveSlide {
            slide_id: f.first.clone(),
            target_index: 1,
        },
        Mutation::ReorderSlides {
            slide_ids: vec![f.second.clone()],
            target_id: Some(f.first.clone()),
        },
        Mutation::SelectSlide {
            slide_id: f.second.clone(),
        },
        Mutation::SelectElements {
            element_id: f.text.clone(),
            multi: false,
        },
        Mutation::AddText {
            slide_id: f.first.clone(),
            content: "t".into(),
            position: None,
        },
        Mutation::AddImage {
            slide_id: f.first.clone(),
            src: "b.png".into(),
            size: None,
            position: None,
        },
        Mutation::MoveElement {
            slide_id: f.first.clone(),
            element_id: f.text.clone(),
            x: 500.0,
            y: 500.0,
        },
        Mutation::ResizeElement {
            slide_id: f.first.clone(),
            element_id: f.image.clone(),
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
        },
        Mutation::RemoveElements {
            slide_id: f.first.clone(),
            element_ids: vec![f.text.clone()],
        },
        Mutation::DuplicateElements {
            slide_id: f.first.clone(),
            element_ids: vec![f.text.clone(), f.image.clone()],
        },
        Mutation::PasteElements {
            slide_id: f.second.clone(),
            elements: clipboard,
        },
        Mutation::SetSlideBackground {
            slide_id: f.first.clone(),
            background: Background::Color {
                value: "#fff".into(),
            },
        },
        Mutation::UpdateText {
            slide_id: f.first.clone(),
            element_id: f.text.clone(),
            update: TextUpdate::Color {
                color: "red".into(),
            },
        },
        Mutation::UpdateImageSrc {
            slide_id: f.first.clone(),
            element_id: f.image.clone(),
            src: "c.png".into(),
        },
        Mutation::AlignElements {
            slide_id: f.first.clone(),
            element_ids: vec![f.text.clone(), f.image.clone()],
            axis: Axis::X,
            mode: AlignMode::Start,
            relative_to: AlignTarget::Slide,
        },
    ]
}

#[test]
fn test_apply_never_mutates_input() {
    let f = fixture();
    let snapshot = f.doc.clone();
    let mutations = every_mutation(&f);

    let kinds: HashSet<&str> = mutations.iter().map(|m| m.name()).collect();
    assert_eq!(kinds.len(), 18);

    for m in &mutations {
        let next = m.apply(&f.doc);
        assert_ne!(next, f.doc, "{} should change the document", m.name());
        assert_eq!(f.doc, snapshot, "{} touched its input", m.name());
    }
}

#[test]
fn test_unknown_ids_are_noops() {
    let f = fixture();
    let doc = &f.doc;
    let ghost = || "ghost".to_string();
    let clipboard = vec![doc.slides[0].element(&f.text).unwrap().clone()];

    let mut without_focus = doc.clone();
    without_focus.selection = Selection::default();

    let mutations = vec![
        Mutation::RenamePresentation {
            title: doc.title.clone(),
        },
        Mutation::MoveSlide {
            slide_id: ghost(),
            target_index: 0,
        },
        Mutation::ReorderSlides {
            slide_ids: vec![ghost()],
            target_id: Some(f.first.clone()),
        },
        Mutation::SelectSlide { slide_id: ghost() },
        Mutation::SelectElements {
            element_id: ghost(),
            multi: true,
        },
        Mutation::SelectElements {
            element_id: f.text.clone(),
            multi: false,
        },
        Mutation::AddText {
            slide_id: ghost(),
            content: "x".into(),
            position: None,
        },
        Mutation::AddImage {
            slide_id: ghost(),
            src: "x.png".into(),
            size: None,
            position: None,
        },
        Mutation::MoveElement {
            slide_id: f.first.clone(),
            element_id: ghost(),
            x: 1.0,
            y: 1.0,
        },
        Mutation::MoveElement {
            slide_id: ghost(),
            element_id: f.text.clone(),
            x: 1.0,
            y: 1.0,
        },
        Mutation::ResizeElement {
            slide_id: ghost(),
            element_id: f.text.clone(),
            x: 1.0,
            y: 1.0,
            width: 5.0,
            height: 5.0,
        },
        Mutation::RemoveElements {
            slide_id: f.first.clone(),
            element_ids: vec![ghost()],
        },
        Mutation::RemoveElements {
            slide_id: ghost(),
            element_ids: vec![f.text.clone()],
        },
        Mutation::DuplicateElements {
            slide_id: f.first.clone(),
            element_ids: vec![ghost()],
        },
        Mutation::DuplicateElements {
            slide_id: f.first.clone(),
            element_ids: vec![],
        },
        Mutation::PasteElements {
            slide_id: ghost(),
            elements: clipboard,
        },
        Mutation::PasteElements {
            slide_id: f.first.clone(),
            elements: vec![],
        },
        Mutation::SetSlideBackground {
            slide_id: ghost(),
            background: Background::Color {
                value: "#fff".into(),
            },
        },
        Mutation::UpdateText {
            slide_id: f.first.clone(),
            element_id: ghost(),
            update: TextUpdate::FontSize { font_size: 12.0 },
        },
        Mutation::UpdateText {
            slide_id: f.first.clone(),
            element_id: f.image.clone(),
            update: TextUpdate::Color {
                color: "red".into(),
            },
        },
        Mutation::UpdateImageSrc {
            slide_id: f.first.clone(),
            element_id: f.text.clone(),
            src: "x.png".into(),
        },
        Mutation::UpdateImageSrc {
            slide_id: ghost(),
            element_id: f.image.clone(),
            src: "x.png".into(),
        },
        Mutation::AlignElements {
            slide_id: f.first.clone(),
            element_ids: vec![ghost()],
            axis: Axis::X,
            mode: AlignMode::Center,
            relative_to: AlignTarget::Slide,
        },
    ];

    // Element selection only acts on the focused slide, so check it
    // with focus on the empty one
    let on_second = Mutation::SelectSlide {
        slide_id: f.second.clone(),
    }
    .apply(doc);
    for m in &mutations {
        let base = match m {
            Mutation::SelectElements { .. } => &on_second,
            _ => doc,
        };
        assert_eq!(&m.apply(base), base, "{} should be a no-op", m.name());
    }

    // Nothing to remove without a focused slide
    assert_eq!(Mutation::RemoveSlide.apply(&without_focus), without_focus);
}

#[test]
fn test_add_text_defaults_and_selection() {
    let (doc, slide_id) = deck();
    let (next, id) = add_text(&doc, &slide_id, "Hello");

    let slide = next.slide(&slide_id).unwrap();
    assert_eq!(slide.elements.len(), 1);
    let text = slide.elements[0].as_text().unwrap();
    assert_eq!(text.id, id);
    assert_eq!(text.content, "Hello");
    assert_eq!(text.font_size, DEFAULT_TEXT_FONT_SIZE);
    assert_eq!(next.selection, Selection::elements(slide_id, vec![id]));
}

#[test]
fn test_add_image_uses_given_size_and_position() {
    let (doc, slide_id) = deck();
    let next = Mutation::AddImage {
        slide_id: slide_id.clone(),
        src: "data:image/png;base64,AAAA".into(),
        size: Some(Size::new(100.0, 50.0)),
        position: Some(Position::new(7.0, 9.0)),
    }
    .apply(&doc);

    let image = next.slides[0].elements[0].as_image().unwrap();
    assert_eq!(image.size, Size::new(100.0, 50.0));
    assert_eq!(image.position, Position::new(7.0, 9.0));

    let next = Mutation::AddImage {
        slide_id,
        src: "a.png".into(),
        size: None,
        position: None,
    }
    .apply(&doc);
    assert_eq!(next.slides[0].elements[0].size(), DEFAULT_IMAGE_SIZE);
}

#[test]
fn test_remove_selected_slide_repairs_selection() {
    let (doc, first) = deck();
    let doc = Mutation::AddSlide { template_id: None }.apply(&doc);
    let second = doc.slides[1].id.clone();
    let doc = Mutation::SelectSlide {
        slide_id: first.clone(),
    }
    .apply(&doc);
    let (doc, _) = add_text(&doc, &first, "gone with the slide");

    let next = Mutation::RemoveSlide.apply(&doc);
    assert_eq!(next.slides.len(), 1);
    assert_eq!(next.selection, Selection::slide(second));

    let last = Mutation::RemoveSlide.apply(&next);
    assert!(last.slides.is_empty());
    assert_eq!(last.selection, Selection::default());
}

#[test]
fn test_remove_elements_clears_element_selection() {
    let (doc, slide_id) = deck();
    let (doc, a) = add_text(&doc, &slide_id, "a");
    let (doc, b) = add_text(&doc, &slide_id, "b");

    let next = Mutation::RemoveElements {
        slide_id: slide_id.clone(),
        element_ids: vec![a.clone()],
    }
    .apply(&doc);

    let slide = next.slide(&slide_id).unwrap();
    assert!(slide.element(&a).is_none());
    assert!(slide.element(&b).is_some());
    assert!(next.selection.element_ids.is_empty());
    assert_eq!(next.selection.slide_id.as_deref(), Some(slide_id.as_str()));
}

#[test]
fn test_select_elements_multi_toggles() {
    let (doc, slide_id) = deck();
    let (doc, a) = add_text(&doc, &slide_id, "a");
    let (doc, b) = add_text(&doc, &slide_id, "b");

    let select = |doc: &Presentation, id: &str, multi: bool| {
        Mutation::SelectElements {
            element_id: id.to_string(),
            multi,
        }
        .apply(doc)
    };

    let doc = select(&doc, &a, false);
    assert_eq!(doc.selection.element_ids, vec![a.clone()]);
    let doc = select(&doc, &b, true);
    assert_eq!(doc.selection.element_ids, vec![a.clone(), b.clone()]);
    let doc = select(&doc, &a, true);
    assert_eq!(doc.selection.element_ids, vec![b]);
}

#[test]
fn test_duplicate_offsets_and_selects_copies() {
    let (doc, slide_id) = deck();
    let (doc, a) = add_text(&doc, &slide_id, "a");
    let original = doc.slides[0].element(&a).unwrap().clone();

    let next = Mutation::DuplicateElements {
        slide_id: slide_id.clone(),
        element_ids: vec![a.clone()],
    }
    .apply(&doc);

    let slide = &next.slides[0];
    assert_eq!(slide.elements.len(), 2);
    let copy = &slide.elements[1];
    assert_ne!(copy.id(), a);
    assert_eq!(copy.position(), original.position().offset(20.0, 20.0));
    assert_eq!(copy.as_text().unwrap().content, "a");
    assert_eq!(next.selection.element_ids, vec![copy.id().to_string()]);
}

#[test]
fn test_paste_onto_other_slide() {
    let (doc, first) = deck();
    let (doc, a) = add_text(&doc, &first, "clip");
    let clipboard: Vec<SlideElement> = vec![doc.slides[0].element(&a).unwrap().clone()];

    let doc = Mutation::AddSlide { template_id: None }.apply(&doc);
    let second = doc.slides[1].id.clone();

    let next = Mutation::PasteElements {
        slide_id: second.clone(),
        elements: clipboard,
    }
    .apply(&doc);

    let pasted = &next.slide(&second).unwrap().elements;
    assert_eq!(pasted.len(), 1);
    assert_ne!(pasted[0].id(), a);
    assert_eq!(next.selection.slide_id.as_deref(), Some(second.as_str()));
}

#[test]
fn test_update_text_clamps_and_styles() {
    let (doc, slide_id) = deck();
    let (doc, a) = add_text(&doc, &slide_id, "a");

    let update = |doc: &Presentation, update: TextUpdate| {
        Mutation::UpdateText {
            slide_id: slide_id.clone(),
            element_id: a.clone(),
            update,
        }
        .apply(doc)
    };

    let doc = update(&doc, TextUpdate::FontSize { font_size: 1000.0 });
    let doc = update(
        &doc,
        TextUpdate::Style {
            bold: Some(true),
            italic: None,
            underline: None,
        },
    );
    let doc = update(
        &doc,
        TextUpdate::Border {
            color: Some("#000".into()),
            width: -4.0,
        },
    );

    let text = doc.slides[0].element(&a).unwrap().as_text().unwrap();
    assert_eq!(text.font_size, 200.0);
    assert!(text.bold);
    assert!(!text.italic);
    assert_eq!(text.border_width, 0.0);
    assert_eq!(text.border_color.as_deref(), Some("#000"));
}

#[test]
fn test_resize_sets_position_and_size() {
    let (doc, slide_id) = deck();
    let (doc, a) = add_text(&doc, &slide_id, "a");

    let next = Mutation::ResizeElement {
        slide_id,
        element_id: a.clone(),
        x: 10.0,
        y: 20.0,
        width: 300.0,
        height: 40.0,
    }
    .apply(&doc);

    let el = next.slides[0].element(&a).unwrap();
    assert_eq!(el.position(), Position::new(10.0, 20.0));
    assert_eq!(el.size(), Size::new(300.0, 40.0));
}

#[test]
fn test_set_background() {
    let (doc, slide_id) = deck();
    let bg = Background::Image {
        src: "bg.png".into(),
    };
    let next = Mutation::SetSlideBackground {
        slide_id,
        background: bg.clone(),
    }
    .apply(&doc);
    assert_eq!(next.slides[0].background, bg);
}

#[test]
fn test_add_slide_from_template() {
    let (doc, _) = deck();
    let next = Mutation::AddSlide {
        template_id: Some("comparison".into()),
    }
    .apply(&doc);

    assert_eq!(next.slides.len(), 2);
    assert!(!next.slides[1].elements.is_empty());
    assert_eq!(next.selection, Selection::slide(next.slides[1].id.clone()));
}
