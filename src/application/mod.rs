// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data, domain and infra layers into a split.
//
// Rules for this layer:
//   - No hashing or shuffling code here (Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// The split workflow (run and dry run)
pub mod split_use_case;
