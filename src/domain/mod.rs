// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits that describe a split:
//
//   sample.rs — Sample, PairKind, ContentHash
//   split.rs  — SplitSizes (the target) and Partition (the outcome)
//   error.rs  — SplitError, the rule violations a run can hit
//   traits.rs — SampleSource, implemented by the data layer
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust types and traits

pub mod error;
pub mod sample;
pub mod split;
pub mod traits;
