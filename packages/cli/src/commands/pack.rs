use super::{read_presentation, resolve, write_presentation};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use slidecraft_document::{pack as pack_presentation, COMPRESSED_PREFIX};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Presentation JSON file
    pub input: PathBuf,

    /// Output file (defaults to <input>.slides)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Payload size limit in characters (overrides storageLimit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// Storage payload file
    pub input: PathBuf,

    /// Output file (defaults to <input>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Encode a presentation as a storage payload.
pub fn pack(args: PackArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let output = args
        .output
        .map(|o| resolve(cwd, &o))
        .unwrap_or_else(|| input.with_extension("slides"));
    let limit = args.limit.unwrap_or(config.storage_limit);

    let presentation = read_presentation(&input)?;
    let payload = pack_presentation(&presentation, limit)?;
    fs::write(&output, &payload)?;

    let mode = if payload.starts_with(COMPRESSED_PREFIX) {
        "compressed"
    } else {
        "plain"
    };
    println!(
        "  {} Packed {} → {} ({} characters, {})",
        "✓".green(),
        input.display(),
        output.display(),
        payload.len(),
        mode
    );
    Ok(())
}

/// Decode a storage payload back to formatted JSON.
pub fn unpack(args: UnpackArgs, cwd: &str) -> Result<()> {
    let input = resolve(cwd, &args.input);
    let output = args
        .output
        .map(|o| resolve(cwd, &o))
        .unwrap_or_else(|| input.with_extension("json"));

    let presentation = read_presentation(&input)?;
    write_presentation(&output, &presentation)?;

    println!(
        "  {} Unpacked {} → {}",
        "✓".green(),
        input.display(),
        output.display()
    );
    Ok(())
}
