pub mod apply;
pub mod info;
pub mod new;
pub mod pack;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use info::{info, InfoArgs};
pub use new::{new, NewArgs};
pub use pack::{pack, unpack, PackArgs, UnpackArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use slidecraft_document::{decode_payload, parse_presentation, to_json_pretty, Presentation};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `path` against the working directory
pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    }
}

/// Read a presentation file, plain JSON or packed
pub(crate) fn read_presentation(path: &Path) -> Result<Presentation> {
    let payload =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let json = decode_payload(&payload)?;
    let presentation = parse_presentation(&json)
        .with_context(|| format!("{} is not a valid presentation", path.display()))?;
    Ok(presentation)
}

pub(crate) fn write_presentation(path: &Path, presentation: &Presentation) -> Result<()> {
    let json = to_json_pretty(presentation)?;
    fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}
