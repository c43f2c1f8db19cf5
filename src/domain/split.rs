// ============================================================
// Layer 3 — Split Domain Types
// ============================================================
// SplitSizes is the target: how many samples each set should
// receive for a corpus of `total` samples and a given ratio.
//
//   eval_count  = total / (distribution + 1)     (floor)
//   train_count = eval_count * distribution
//
// e.g. 100 samples, distribution 6 → 14 eval, 84 train, 2 left over
//
// Partition is the outcome of the greedy pass. `verify` compares
// it against the target.

use serde::{Deserialize, Serialize};

use crate::domain::error::SplitError;
use crate::domain::sample::Sample;

/// Default training:evaluation ratio.
pub const DEFAULT_DISTRIBUTION: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSizes {
    pub total:       usize,
    pub eval_count:  usize,
    pub train_count: usize,
}

impl SplitSizes {
    /// Compute the target sizes for `total` samples.
    ///
    /// # Arguments
    /// * `total`        - Number of eligible samples in the corpus
    /// * `distribution` - Training samples per evaluation sample (≥ 1)
    ///
    /// # Returns
    /// `InvalidDistribution` for a ratio of 0, otherwise the sizes.
    pub fn compute(total: usize, distribution: u32) -> Result<Self, SplitError> {
        if distribution == 0 {
            return Err(SplitError::InvalidDistribution);
        }
        let ratio       = distribution as usize;
        let eval_count  = total / (ratio + 1);
        let train_count = eval_count * ratio;

        if train_count + eval_count > total {
            return Err(SplitError::InsufficientSamples { total, eval_count, train_count });
        }

        Ok(Self { total, eval_count, train_count })
    }

    /// Samples that will be left out even with no duplicates.
    pub fn remainder(&self) -> usize {
        self.total - self.eval_count - self.train_count
    }
}

/// Result of one greedy pass over the shuffled corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub eval:  Vec<Sample>,
    pub train: Vec<Sample>,

    /// Samples that fitted in neither set
    pub dropped: Vec<Sample>,

    /// Samples refused by the eval set because their hash was already used
    pub duplicates_skipped: usize,
}

impl Partition {
    /// Check the partition filled both sets exactly.
    pub fn verify(&self, sizes: &SplitSizes) -> Result<(), SplitError> {
        if self.eval.len() == sizes.eval_count && self.train.len() == sizes.train_count {
            return Ok(());
        }
        Err(SplitError::SplitSizeMismatch {
            expected_eval:      sizes.eval_count,
            actual_eval:        self.eval.len(),
            expected_train:     sizes.train_count,
            actual_train:       self.train.len(),
            duplicates_skipped: self.duplicates_skipped,
            dropped:            self.dropped.len(),
        })
    }
}
