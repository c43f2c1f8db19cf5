// ============================================================
// Layer 4 — Description Normaliser
// ============================================================
// Turns a description into the ContentHash used to keep the
// evaluation set free of duplicates.
//
// Two descriptions count as the same sample when they only
// differ in layout, e.g.
//
//   "header {\n  btn-active\n}"   and   "header{btn-active}"
//
// so every whitespace character (spaces, tabs, \r, \n and the
// Unicode variants) is removed before hashing. The hash itself
// is SHA-256, rendered as 64 lowercase hex characters.

use sha2::{Digest, Sha256};

use crate::domain::sample::ContentHash;

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Remove every whitespace character.
    pub fn strip_whitespace(&self, text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// SHA-256 of the whitespace-stripped text.
    pub fn content_hash(&self, text: &str) -> ContentHash {
        let stripped = self.strip_whitespace(text);
        let digest   = Sha256::digest(stripped.as_bytes());
        ContentHash(format!("{digest:x}"))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
