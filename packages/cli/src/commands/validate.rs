use super::{read_presentation, resolve};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Presentation file, or a directory to scan for .json files
    pub input: PathBuf,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let input = resolve(cwd, &args.input);

    let files = if input.is_file() {
        vec![input]
    } else if input.is_dir() {
        let files = find_json_files(&input);
        println!("   Found {} .json files", files.len());
        println!();
        files
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            input.display()
        ));
    };

    let mut failed = 0;
    for file in &files {
        match read_presentation(file) {
            Ok(p) => println!(
                "{} {} ({} slides, {} elements)",
                "✓".green(),
                file.display(),
                p.slides.len(),
                p.element_count()
            ),
            Err(err) => {
                failed += 1;
                println!("{} {}: {:#}", "✗".red(), file.display(), err);
            }
        }
    }

    if failed > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} files failed validation",
            failed,
            files.len()
        ));
    }
    Ok(())
}

fn find_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter(|p| {
            p.file_name()
                .is_some_and(|n| n != crate::config::DEFAULT_CONFIG_NAME)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::write_presentation;
    use slidecraft_document::make_empty_presentation;
    use std::fs;

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_string_lossy().to_string();
        fs::create_dir(dir.path().join("decks")).unwrap();
        write_presentation(&dir.path().join("decks/a.json"), &make_empty_presentation()).unwrap();
        write_presentation(&dir.path().join("decks/b.json"), &make_empty_presentation()).unwrap();
        fs::write(dir.path().join("decks/notes.txt"), "ignored").unwrap();

        let args = ValidateArgs {
            input: PathBuf::from("decks"),
        };
        assert!(validate(args, &cwd).is_ok());

        fs::write(dir.path().join("decks/broken.json"), r#"{"id": ""}"#).unwrap();
        let args = ValidateArgs {
            input: PathBuf::from("decks"),
        };
        let err = validate(args, &cwd).unwrap_err();
        assert!(err.to_string().contains("1 of 3"));
    }

    #[test]
    fn test_validate_missing_path() {
        let args = ValidateArgs {
            input: PathBuf::from("/definitely/not/here.json"),
        };
        assert!(validate(args, "/").is_err());
    }
}
