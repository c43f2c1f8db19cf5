// ============================================================
// Layer 5 — Split Report
// ============================================================
// A JSON record of one split, written when `--report` is given:
//
//   {
//     "input_dir": "data/all",
//     "distribution": 6,
//     "seed": 1234,
//     "sizes": { "total": 7, "eval_count": 1, "train_count": 6 },
//     "eval": ["0A1F"],
//     "train": [...],
//     ...
//   }
//
// The seed makes the run reproducible with `run --seed`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::sample::Sample;
use crate::domain::split::{Partition, SplitSizes};
use crate::infra::materializer::OutputDirs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub input_dir:          PathBuf,
    pub training_dir:       Option<PathBuf>,
    pub evaluation_dir:     Option<PathBuf>,
    pub distribution:       u32,
    pub seed:               u64,
    pub sizes:              SplitSizes,
    pub eval:               Vec<String>,
    pub train:              Vec<String>,
    pub dropped:            Vec<String>,
    pub duplicates_skipped: usize,
}

impl SplitReport {
    pub fn new(
        input_dir:    &Path,
        outputs:      Option<&OutputDirs>,
        distribution: u32,
        seed:         u64,
        sizes:        SplitSizes,
        partition:    &Partition,
    ) -> Self {
        let names = |set: &[Sample]| {
            set.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
        };
        Self {
            input_dir:          input_dir.to_path_buf(),
            training_dir:       outputs.map(|o| o.training.clone()),
            evaluation_dir:     outputs.map(|o| o.evaluation.clone()),
            distribution,
            seed,
            sizes,
            eval:               names(&partition.eval),
            train:              names(&partition.train),
            dropped:            names(&partition.dropped),
            duplicates_skipped: partition.duplicates_skipped,
        }
    }

    /// Pretty-printed JSON at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;
        tracing::debug!("Saved split report to '{}'", path.display());
        Ok(())
    }
}
