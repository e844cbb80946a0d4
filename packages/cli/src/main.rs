mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, info, new, pack, unpack, validate, ApplyArgs, InfoArgs, NewArgs, PackArgs, UnpackArgs,
    ValidateArgs,
};

/// Slidecraft CLI - create, inspect and script-edit presentation files
#[derive(Parser, Debug)]
#[command(name = "slidecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new presentation file
    New(NewArgs),

    /// Check presentation files against the document schema
    Validate(ValidateArgs),

    /// Print a summary of a presentation
    Info(InfoArgs),

    /// Encode a presentation as a size-limited storage payload
    Pack(PackArgs),

    /// Decode a storage payload back to JSON
    Unpack(UnpackArgs),

    /// Replay an edit script through the editor
    Apply(ApplyArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::New(args) => new(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Info(args) => info(args, &cwd),
        Command::Pack(args) => pack(args, &cwd),
        Command::Unpack(args) => unpack(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
