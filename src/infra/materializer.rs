// ============================================================
// Layer 5 — Materializer
// ============================================================
// Copies a Partition onto disk. Output directories are created
// next to the input directory:
//
//   data/
//     all/            ← input (never modified)
//     training_set/   ← {name}.gui + {name}.png for every training sample
//     eval_set/       ← {name}.gui + {name}.png for every evaluation sample
//
// Files are copied byte for byte under their original names.
// Existing files with the same name are overwritten, so running
// twice over the same partition leaves identical output.
//
// Why refuse an input named training_set/ or eval_set/?
//   The sibling of `data/training_set` called `training_set` is
//   the input itself. Copying a file onto itself truncates it
//   before a single byte is read, so the run would wipe the very
//   samples it was asked to split. Materializer::new compares the
//   canonical paths and stops before anything is opened.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::SplitError;
use crate::domain::sample::{PairKind, Sample};
use crate::domain::split::Partition;

pub const TRAINING_SET_NAME:   &str = "training_set";
pub const EVALUATION_SET_NAME: &str = "eval_set";

/// The two destination directories of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub training:   PathBuf,
    pub evaluation: PathBuf,
}

impl OutputDirs {
    /// Sibling directories of `input_dir`.
    pub fn beside(input_dir: &Path) -> Result<Self> {
        let parent = parent_dir(input_dir)?;
        Ok(Self {
            training:   parent.join(TRAINING_SET_NAME),
            evaluation: parent.join(EVALUATION_SET_NAME),
        })
    }
}

/// `data/all` → `data`. Paths without a usable parent (`all`, `.`,
/// `..`) are canonicalised first.
fn parent_dir(input_dir: &Path) -> Result<PathBuf> {
    if input_dir.file_name().is_some() {
        if let Some(parent) = input_dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            return Ok(parent.to_path_buf());
        }
    }

    let absolute = fs::canonicalize(input_dir)
        .with_context(|| format!("Cannot resolve '{}'", input_dir.display()))?;
    Ok(absolute.parent().unwrap_or(&absolute).to_path_buf())
}

/// Fail if an existing output directory is the input directory.
fn ensure_distinct(input_dir: &Path, outputs: &OutputDirs) -> Result<()> {
    let input = fs::canonicalize(input_dir)
        .with_context(|| format!("Cannot resolve '{}'", input_dir.display()))?;

    for dir in [&outputs.training, &outputs.evaluation] {
        if !dir.exists() {
            continue;
        }
        let output = fs::canonicalize(dir)
            .with_context(|| format!("Cannot resolve '{}'", dir.display()))?;
        if output == input {
            return Err(SplitError::OutputIsInput { dir: dir.clone() }.into());
        }
    }
    Ok(())
}

pub struct Materializer {
    input_dir: PathBuf,
    kind:      PairKind,
    outputs:   OutputDirs,
}

impl Materializer {
    /// Resolve the output directories for `input_dir`.
    ///
    /// # Returns
    /// `SplitError::OutputIsInput` when either output directory already
    /// exists and is the input directory under another name.
    pub fn new(input_dir: impl Into<PathBuf>, kind: PairKind) -> Result<Self> {
        let input_dir = input_dir.into();
        let outputs   = OutputDirs::beside(&input_dir)?;
        ensure_distinct(&input_dir, &outputs)?;
        Ok(Self { input_dir, kind, outputs })
    }

    pub fn outputs(&self) -> &OutputDirs {
        &self.outputs
    }

    /// Create both output directories and copy every selected pair.
    ///
    /// # Arguments
    /// * `partition` - The verified (or knowingly short) split; `dropped`
    ///                 samples are not copied anywhere
    ///
    /// Evaluation pairs are copied first, then training pairs. The first
    /// failing copy aborts the run with both paths in the error.
    pub fn materialize(&self, partition: &Partition) -> Result<()> {
        for dir in [&self.outputs.evaluation, &self.outputs.training] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        }

        self.copy_set(&partition.eval,  &self.outputs.evaluation)?;
        self.copy_set(&partition.train, &self.outputs.training)?;

        tracing::info!(
            "Copied {} evaluation and {} training pairs",
            partition.eval.len(),
            partition.train.len()
        );
        Ok(())
    }

    fn copy_set(&self, samples: &[Sample], dest: &Path) -> Result<()> {
        for sample in samples {
            self.copy_file(
                &sample.image_path(&self.input_dir, &self.kind),
                &sample.image_path(dest, &self.kind),
            )?;
            self.copy_file(
                &sample.description_path(&self.input_dir, &self.kind),
                &sample.description_path(dest, &self.kind),
            )?;
        }
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to).with_context(|| {
            format!("Cannot copy '{}' to '{}'", from.display(), to.display())
        })?;
        tracing::debug!("Copied '{}'", to.display());
        Ok(())
    }
}
