//! # Slidecraft Document
//!
//! The data side of the presentation editor: entity types, factories,
//! slide templates, the auto-layout placer and the validation/storage
//! boundaries. Nothing here keeps state; the editor crate owns the
//! current document and its history.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slidecraft_document::{make_empty_presentation, place_new_element, parse_presentation};
//!
//! let deck = make_empty_presentation();
//! let spot = place_new_element(&deck.slides[0], DEFAULT_TEXT_SIZE);
//!
//! let imported = parse_presentation(&std::fs::read_to_string("deck.json")?)?;
//! ```

pub mod codec;
pub mod id;
pub mod layout;
pub mod model;
pub mod templates;
pub mod validate;

pub use codec::{
    decode_payload, encode_payload, pack, to_json, to_json_pretty, unpack, CodecError,
    COMPRESSED_PREFIX, MAX_PAYLOAD_LENGTH,
};
pub use id::new_id;
pub use layout::{place_new_element, Rect, GAP, SLIDE_HEIGHT, SLIDE_WIDTH};
pub use model::*;
pub use templates::{template, templates, SlideTemplate};
pub use validate::{parse_presentation, prepare_imported, validate, ValidationError};
