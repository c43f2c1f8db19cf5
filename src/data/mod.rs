// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the input directory and a Partition:
//
//   input directory
//       │
//       ▼
//   DirScanner        → eligible (description, image) pairs
//       │
//       ▼
//   shuffle_samples   → seeded Fisher-Yates permutation
//       │
//       ▼
//   partition         → greedy eval/train deal, deduplicated
//                       by Normalizer::content_hash

/// Finds sample pairs in a directory
pub mod scanner;

/// Whitespace stripping and SHA-256 ContentHash
pub mod normalizer;

/// Shuffles and partitions samples into evaluation/training sets
pub mod splitter;
