//! Storage payload encoding.
//!
//! Documents are persisted as JSON text. A storage backend with a size cap
//! gets the raw JSON when it fits, otherwise `gz:` followed by the base64 of
//! the gzip-compressed JSON.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::model::Presentation;
use crate::validate::{parse_presentation, ValidationError};

/// Default storage limit, in characters.
pub const MAX_PAYLOAD_LENGTH: usize = 100_000;
pub const COMPRESSED_PREFIX: &str = "gz:";

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Presentation is too large to save ({length} characters, limit {limit})")]
    TooLarge { length: usize, limit: usize },

    #[error("Corrupt compressed payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Compression error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub fn to_json(p: &Presentation) -> Result<String, CodecError> {
    Ok(serde_json::to_string(p)?)
}

pub fn to_json_pretty(p: &Presentation) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(p)?)
}

/// Fit `json` into `limit` characters, compressing when needed.
pub fn encode_payload(json: &str, limit: usize) -> Result<String, CodecError> {
    if json.len() <= limit {
        return Ok(json.to_string());
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes())?;
    let compressed = encoder.finish()?;
    let payload = format!("{}{}", COMPRESSED_PREFIX, STANDARD.encode(compressed));

    tracing::debug!(
        raw = json.len(),
        compressed = payload.len(),
        "compressed presentation payload"
    );

    if payload.len() > limit {
        return Err(CodecError::TooLarge {
            length: payload.len(),
            limit,
        });
    }
    Ok(payload)
}

/// Inverse of [`encode_payload`]: returns the JSON text.
pub fn decode_payload(payload: &str) -> Result<String, CodecError> {
    let Some(encoded) = payload.strip_prefix(COMPRESSED_PREFIX) else {
        return Ok(payload.to_string());
    };

    let bytes = STANDARD.decode(encoded.trim())?;
    let mut json = String::new();
    GzDecoder::new(bytes.as_slice()).read_to_string(&mut json)?;
    Ok(json)
}

/// Serialize a presentation into a storage payload.
pub fn pack(p: &Presentation, limit: usize) -> Result<String, CodecError> {
    encode_payload(&to_json(p)?, limit)
}

/// Decode and validate a storage payload.
pub fn unpack(payload: &str) -> Result<Presentation, CodecError> {
    let json = decode_payload(payload)?;
    Ok(parse_presentation(&json)?)
}
