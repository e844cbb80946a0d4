use super::{resolve, write_presentation};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use slidecraft_document::{make_presentation, template, templates};
use slidecraft_editor::{EditorStore, Mutation};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Output file
    pub output: PathBuf,

    /// Presentation title
    #[arg(short, long, default_value = "Presentation")]
    pub title: String,

    /// Append a slide built from this template (repeatable)
    #[arg(long = "template", value_name = "ID")]
    pub templates: Vec<String>,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let output = resolve(cwd, &args.output);

    if output.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            output.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    for id in &args.templates {
        if template(id).is_none() {
            let known: Vec<&str> = templates().iter().map(|t| t.id).collect();
            return Err(anyhow::anyhow!(
                "Unknown template: {}. Use one of: {}",
                id,
                known.join(", ")
            ));
        }
    }

    let mut store = EditorStore::new(make_presentation(&args.title));
    for id in &args.templates {
        store.dispatch(Mutation::AddSlide {
            template_id: Some(id.clone()),
        });
    }

    write_presentation(&output, store.current())?;

    println!(
        "  {} Created {} ({} slides)",
        "✓".green(),
        output.display(),
        store.current().slides.len()
    );
    Ok(())
}
