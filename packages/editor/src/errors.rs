//! Error types for the editor

use slidecraft_document::{CodecError, ValidationError};
use thiserror::Error;

/// Failures surfaced across the editor boundary. Mutations never fail;
/// only loading untrusted documents does.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid presentation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage payload error: {0}")]
    Codec(#[from] CodecError),
}
