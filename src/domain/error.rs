// ============================================================
// Layer 3 — Split Errors
// ============================================================
// The failures that belong to the splitting rules themselves.
// Filesystem failures are not listed here: they travel as
// anyhow errors with the offending path attached as context.
//
// Every variant is fatal to a run. Callers that need to react
// to a specific one (tests, --allow-short) recover it with
// `anyhow::Error::downcast_ref::<SplitError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// The scan found no description file with a matching image.
    #[error("no valid .{desc_ext} and .{image_ext} file pairs found in '{}'", dir.display())]
    NoSamples {
        dir:       PathBuf,
        desc_ext:  String,
        image_ext: String,
    },

    /// An output directory resolves to the input directory itself.
    #[error(
        "output directory '{}' is the input directory; rename the input or move it elsewhere",
        dir.display()
    )]
    OutputIsInput { dir: PathBuf },

    #[error("distribution must be a positive integer")]
    InvalidDistribution,

    /// The computed split needs more samples than the corpus holds.
    #[error(
        "not enough samples to split: {train_count} training + {eval_count} evaluation \
         exceeds {total} available"
    )]
    InsufficientSamples {
        total:       usize,
        eval_count:  usize,
        train_count: usize,
    },

    /// The greedy partition could not fill one of the sets.
    #[error(
        "split size mismatch: expected {expected_eval} evaluation samples, got {actual_eval}; \
         expected {expected_train} training samples, got {actual_train} \
         ({duplicates_skipped} duplicate descriptions skipped, {dropped} samples dropped)"
    )]
    SplitSizeMismatch {
        expected_eval:      usize,
        actual_eval:        usize,
        expected_train:     usize,
        actual_train:       usize,
        duplicates_skipped: usize,
        dropped:            usize,
    },
}
