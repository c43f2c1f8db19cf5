// ============================================================
// Layer 3 — Sample Domain Types
// ============================================================
// A Sample is one (description, image) file pair that shares a
// base name inside the input directory:
//
//   samples/
//     0A1F.gui   ← description (plain text)
//     0A1F.png   ← image
//
// The Sample only stores the base name and the two extensions.
// Paths are always resolved against a directory on demand so
// the same Sample can point into the input directory or into
// one of the output directories.

use serde::{Deserialize, Serialize};
use std::{fmt, path::{Path, PathBuf}};

/// Default extension of description files.
pub const DEFAULT_DESC_EXT: &str = "gui";

/// Default extension of image files.
pub const DEFAULT_IMAGE_EXT: &str = "png";

/// Which extensions make up a sample pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairKind {
    pub desc_ext:  String,
    pub image_ext: String,
}

impl PairKind {
    pub fn new(desc_ext: impl Into<String>, image_ext: impl Into<String>) -> Self {
        Self {
            desc_ext:  trim_dot(desc_ext.into()),
            image_ext: trim_dot(image_ext.into()),
        }
    }
}

impl Default for PairKind {
    fn default() -> Self {
        Self::new(DEFAULT_DESC_EXT, DEFAULT_IMAGE_EXT)
    }
}

/// Accept both `png` and `.png` on the command line.
fn trim_dot(ext: String) -> String {
    match ext.strip_prefix('.') {
        Some(rest) => rest.to_string(),
        None       => ext,
    }
}

/// One eligible sample, identified by its base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sample {
    /// File stem shared by the description and the image
    pub name: String,
}

impl Sample {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `{dir}/{name}.{desc_ext}`
    pub fn description_path(&self, dir: &Path, kind: &PairKind) -> PathBuf {
        dir.join(self.file_name(&kind.desc_ext))
    }

    /// `{dir}/{name}.{image_ext}`
    pub fn image_path(&self, dir: &Path, kind: &PairKind) -> PathBuf {
        dir.join(self.file_name(&kind.image_ext))
    }

    fn file_name(&self, ext: &str) -> String {
        format!("{}.{}", self.name, ext)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lowercase hex SHA-256 of a whitespace-stripped description.
/// Two descriptions that differ only in layout share a ContentHash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub String);

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
