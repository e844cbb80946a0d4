//! Random identifiers for presentations, slides and elements.

use rand::Rng;

/// Length of generated ids. 36^8 keeps collisions negligible for documents
/// holding hundreds of entities.
pub const ID_LENGTH: usize = 8;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh random base-36 identifier.
pub fn new_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
