// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The splitter only needs two things from wherever the samples
// live: the list of eligible samples, and the ContentHash of a
// sample's description. Anything that can answer both can be
// split:
//   - DirScanner       → a directory of {name}.gui / {name}.png files
//   - tests            → an in-memory map of name → description

use anyhow::Result;

use crate::domain::sample::{ContentHash, Sample};

// ─── SampleSource ─────────────────────────────────────────────────────────────
pub trait SampleSource {
    /// Return every eligible sample, sorted by name.
    /// An empty source is an error (`SplitError::NoSamples`).
    fn scan(&self) -> Result<Vec<Sample>>;

    /// Hash the sample's description with whitespace removed.
    fn content_hash(&self, sample: &Sample) -> Result<ContentHash>;
}
