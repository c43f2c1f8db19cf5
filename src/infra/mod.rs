// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
//   materializer.rs — creates training_set/ and eval_set/ next to
//                     the input directory and copies the pairs
//
//   report.rs       — optional JSON summary of a split (sizes,
//                     seed, chosen names)

/// Copies a partition into the output directories
pub mod materializer;

/// JSON split report
pub mod report;
