use super::{read_presentation, resolve};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use slidecraft_document::{Background, Presentation};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Presentation file (plain or packed)
    pub input: PathBuf,

    /// List every element on every slide
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn info(args: InfoArgs, cwd: &str) -> Result<()> {
    let input = resolve(cwd, &args.input);
    let presentation = read_presentation(&input)?;
    print!("{}", describe(&presentation, args.verbose));
    Ok(())
}

fn background_label(background: &Background) -> String {
    match background {
        Background::None => "none".to_string(),
        Background::Color { value } => format!("color {}", value),
        Background::Image { .. } => "image".to_string(),
    }
}

fn describe(p: &Presentation, verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "📄".bold(), p.title.bright_white().bold()));
    out.push_str(&format!("   Id:       {}\n", p.id));
    if let Some(owner) = &p.owner_id {
        out.push_str(&format!("   Owner:    {}\n", owner));
    }
    out.push_str(&format!("   Slides:   {}\n", p.slides.len()));
    out.push_str(&format!("   Elements: {}\n", p.element_count()));
    out.push('\n');

    for (i, slide) in p.slides.iter().enumerate() {
        let marker = if p.selection.slide_id.as_deref() == Some(slide.id.as_str()) {
            "▸".cyan().to_string()
        } else {
            " ".to_string()
        };
        out.push_str(&format!(
            " {} {:>2}. {} [{}] {} elements, background {}\n",
            marker,
            i + 1,
            slide.name.as_deref().unwrap_or("(untitled)"),
            slide.id.dimmed(),
            slide.elements.len(),
            background_label(&slide.background)
        ));

        if verbose {
            for el in &slide.elements {
                let rect = el.rect();
                out.push_str(&format!(
                    "         {} {} at ({}, {}) {}×{}\n",
                    el.kind(),
                    el.id().dimmed(),
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidecraft_document::{make_presentation, make_text, SlideElement};

    #[test]
    fn test_describe_lists_slides() {
        colored::control::set_override(false);
        let mut p = make_presentation("Roadmap");
        p.slides[0].elements.push(SlideElement::Text(make_text(None)));

        let summary = describe(&p, false);
        assert!(summary.contains("Roadmap"));
        assert!(summary.contains("Slides:   1"));
        assert!(summary.contains("1 elements, background none"));
        assert!(!summary.contains("text "));

        let detailed = describe(&p, true);
        assert!(detailed.contains("text "));
        assert!(detailed.contains("240×80"));
    }
}
