// ============================================================
// Layer 4 — Directory Scanner
// ============================================================
// Finds the sample pairs in an input directory.
//
// A sample is eligible when BOTH of its files are present:
//
//   samples/
//     a.gui  a.png   → eligible
//     b.gui          → skipped (no image)
//            c.png   → never considered (no description)
//     notes.txt      → ignored
//
// Only the top level of the directory is scanned.
//
// Why sort the result?
//   read_dir returns entries in whatever order the filesystem
//   keeps them, which differs between ext4, APFS and NTFS. The
//   shuffle is seeded, so sorting first is what makes `--seed 42`
//   give the same split on every machine.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::normalizer::Normalizer;
use crate::domain::error::SplitError;
use crate::domain::sample::{ContentHash, PairKind, Sample};
use crate::domain::traits::SampleSource;

/// A SampleSource backed by a directory on disk.
pub struct DirScanner {
    dir:        PathBuf,
    kind:       PairKind,
    normalizer: Normalizer,
}

impl DirScanner {
    pub fn new(dir: impl Into<PathBuf>, kind: PairKind) -> Self {
        Self {
            dir: dir.into(),
            kind,
            normalizer: Normalizer::new(),
        }
    }
}

impl SampleSource for DirScanner {
    fn scan(&self) -> Result<Vec<Sample>> {
        let mut samples = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let entry = entry?;
            let path  = entry.path();

            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(self.kind.desc_ext.as_str())
            {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("Skipping '{}': file name is not valid UTF-8", path.display());
                continue;
            };

            let sample = Sample::new(stem);
            if sample.image_path(&self.dir, &self.kind).is_file() {
                samples.push(sample);
            } else {
                tracing::debug!(
                    "Skipping '{}': no matching .{} image",
                    path.display(),
                    self.kind.image_ext
                );
            }
        }

        if samples.is_empty() {
            return Err(SplitError::NoSamples {
                dir:       self.dir.clone(),
                desc_ext:  self.kind.desc_ext.clone(),
                image_ext: self.kind.image_ext.clone(),
            }
            .into());
        }

        samples.sort();
        tracing::info!("Found {} sample pairs in '{}'", samples.len(), self.dir.display());
        Ok(samples)
    }

    fn content_hash(&self, sample: &Sample) -> Result<ContentHash> {
        let path = sample.description_path(&self.dir, &self.kind);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read description '{}'", path.display()))?;
        Ok(self.normalizer.content_hash(&text))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_only_complete_pairs_are_eligible() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.gui", "row{btn}");
        touch(tmp.path(), "b.png", "img");
        touch(tmp.path(), "a.gui", "row{label}");
        touch(tmp.path(), "a.png", "img");
        touch(tmp.path(), "no_image.gui", "row{}");
        touch(tmp.path(), "no_desc.png", "img");
        touch(tmp.path(), "notes.txt", "ignore me");

        let scanner = DirScanner::new(tmp.path(), PairKind::default());
        let samples = scanner.scan().unwrap();
        assert_eq!(samples, vec![Sample::new("a"), Sample::new("b")]);
    }

    #[test]
    fn test_custom_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "x.desc", "text");
        touch(tmp.path(), "x.img", "img");
        touch(tmp.path(), "y.gui", "text");
        touch(tmp.path(), "y.png", "img");

        let scanner = DirScanner::new(tmp.path(), PairKind::new("desc", "img"));
        assert_eq!(scanner.scan().unwrap(), vec![Sample::new("x")]);
    }

    #[test]
    fn test_directory_named_like_description_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested.gui")).unwrap();
        touch(tmp.path(), "nested.png", "img");

        let scanner = DirScanner::new(tmp.path(), PairKind::default());
        assert!(scanner.scan().is_err());
    }

    #[test]
    fn test_empty_directory_is_no_samples() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "orphan.png", "img");

        let err = DirScanner::new(tmp.path(), PairKind::default()).scan().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplitError>(),
            Some(SplitError::NoSamples { .. })
        ));
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let tmp     = TempDir::new().unwrap();
        let scanner = DirScanner::new(tmp.path().join("missing"), PairKind::default());
        let err     = scanner.scan().unwrap_err();
        assert!(err.downcast_ref::<SplitError>().is_none());
        assert!(err.to_string().contains("Cannot read directory"));
    }

    #[test]
    fn test_content_hash_reads_description() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.gui", "row { btn }\n");
        touch(tmp.path(), "b.gui", "row{btn}");

        let scanner = DirScanner::new(tmp.path(), PairKind::default());
        assert_eq!(
            scanner.content_hash(&Sample::new("a")).unwrap(),
            scanner.content_hash(&Sample::new("b")).unwrap()
        );
    }
}
