// ============================================================
// Layer 4 — Train/Evaluation Splitter
// ============================================================
// Shuffles the corpus and deals it into two sets in one pass:
//   - Evaluation set: `eval_count` samples, no two sharing a ContentHash
//   - Training set:   `train_count` samples, duplicates allowed
//
// For each sample, in shuffled order:
//   1. eval set not full AND hash unseen → evaluation (hash recorded)
//   2. else training set not full        → training
//   3. else                              → dropped
//
// A sample is never reconsidered once placed or dropped, so the
// result depends only on the shuffle order and the hashes.
//
// The shuffle is Fisher-Yates via rand::seq::SliceRandom over a
// StdRng seeded from a u64. The same seed over the same (sorted)
// corpus always yields the same partition.
//
// Why deduplicate only the evaluation set?
//   Near-identical samples in training are harmless, but a copy
//   of the same layout counted twice in evaluation inflates the
//   score. The training set takes whatever the eval set refuses.

use anyhow::Result;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::HashSet;

use crate::domain::sample::Sample;
use crate::domain::split::{Partition, SplitSizes};
use crate::domain::traits::SampleSource;

/// Use the given seed, or draw a fresh one from the thread RNG.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Shuffle `items` in place with an RNG seeded from `seed`.
pub fn shuffle_samples<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Deal `shuffled` into evaluation and training sets.
///
/// # Arguments
/// * `shuffled` - The corpus in the order it should be dealt (consumed)
/// * `sizes`    - Target sizes from `SplitSizes::compute`
/// * `source`   - Where ContentHashes come from
///
/// # Returns
/// A Partition whose sets may be short when duplicates used up the
/// corpus; call `Partition::verify` to find out.
///
/// Descriptions are only hashed while the evaluation set still has
/// room; once it is full every remaining sample goes straight to
/// training or is dropped.
///
/// # Example
/// ```ignore
/// let sizes     = SplitSizes::compute(samples.len(), 6)?;
/// let partition = partition(samples, &sizes, &scanner)?;
/// // 7 unique samples → 1 evaluation, 6 training
/// ```
pub fn partition<S: SampleSource + ?Sized>(
    shuffled: Vec<Sample>,
    sizes:    &SplitSizes,
    source:   &S,
) -> Result<Partition> {
    let mut out    = Partition::default();
    let mut hashes = HashSet::new();

    for sample in shuffled {
        if out.eval.len() < sizes.eval_count {
            let hash = source.content_hash(&sample)?;
            if hashes.insert(hash) {
                out.eval.push(sample);
                continue;
            }
            out.duplicates_skipped += 1;
        }

        if out.train.len() < sizes.train_count {
            out.train.push(sample);
        } else {
            out.dropped.push(sample);
        }
    }

    tracing::debug!(
        "Partition: {} evaluation, {} training, {} dropped, {} duplicates skipped",
        out.eval.len(),
        out.train.len(),
        out.dropped.len(),
        out.duplicates_skipped,
    );

    Ok(out)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalizer::Normalizer;
    use crate::domain::error::SplitError;
    use crate::domain::sample::ContentHash;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    /// name → description, hashed the same way DirScanner does
    struct MemorySource {
        descriptions: BTreeMap<String, String>,
        hash_calls:   Cell<usize>,
    }

    impl MemorySource {
        fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
            Self {
                descriptions: entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                hash_calls: Cell::new(0),
            }
        }

        fn unique(n: usize) -> Self {
            let owned: Vec<(String, String)> = (0..n)
                .map(|i| (format!("s{i:03}"), format!("row{{btn{i}}}")))
                .collect();
            Self {
                descriptions: owned.into_iter().collect(),
                hash_calls:   Cell::new(0),
            }
        }
    }

    impl SampleSource for MemorySource {
        fn scan(&self) -> Result<Vec<Sample>> {
            Ok(self.descriptions.keys().map(Sample::new).collect())
        }

        fn content_hash(&self, sample: &Sample) -> Result<ContentHash> {
            self.hash_calls.set(self.hash_calls.get() + 1);
            let text = self
                .descriptions
                .get(&sample.name)
                .ok_or_else(|| anyhow::anyhow!("unknown sample {sample}"))?;
            Ok(Normalizer::new().content_hash(text))
        }
    }

    fn split(source: &MemorySource, distribution: u32, seed: u64) -> (SplitSizes, Partition) {
        let mut samples = source.scan().unwrap();
        let sizes       = SplitSizes::compute(samples.len(), distribution).unwrap();
        shuffle_samples(&mut samples, seed);
        (sizes, partition(samples, &sizes, source).unwrap())
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut a: Vec<usize> = (0..50).collect();
        let mut b             = a.clone();
        shuffle_samples(&mut a, 42);
        shuffle_samples(&mut b, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_every_item() {
        let mut items: Vec<usize> = (0..50).collect();
        shuffle_samples(&mut items, 7);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_resolve_seed_prefers_explicit_value() {
        assert_eq!(resolve_seed(Some(99)), 99);
    }

    #[test]
    fn test_seven_unique_samples() {
        let source          = MemorySource::unique(7);
        let (sizes, result) = split(&source, 6, 1);
        assert_eq!(result.eval.len(),  1);
        assert_eq!(result.train.len(), 6);
        assert!(result.dropped.is_empty());
        assert!(result.verify(&sizes).is_ok());
    }

    #[test]
    fn test_follows_input_order() {
        let source  = MemorySource::unique(7);
        let samples = source.scan().unwrap();
        let sizes   = SplitSizes::compute(samples.len(), 6).unwrap();
        let result  = partition(samples.clone(), &sizes, &source).unwrap();
        assert_eq!(result.eval,  samples[..1].to_vec());
        assert_eq!(result.train, samples[1..].to_vec());
    }

    #[test]
    fn test_identical_descriptions_below_threshold() {
        let source = MemorySource::new([
            ("a", "row{btn}"),
            ("b", "row { btn }"),
            ("c", "row{\n  btn\n}"),
        ]);
        let (sizes, result) = split(&source, 6, 3);
        assert_eq!(sizes.eval_count,  0);
        assert_eq!(sizes.train_count, 0);
        assert!(result.eval.is_empty());
        assert!(result.train.is_empty());
        assert_eq!(result.dropped.len(), 3);
        assert_eq!(source.hash_calls.get(), 0);
        assert!(result.verify(&sizes).is_ok());
    }

    #[test]
    fn test_all_duplicates_leave_eval_short() {
        let owned: Vec<(String, String)> =
            (0..14).map(|i| (format!("d{i:02}"), "row{btn}".to_string())).collect();
        let source = MemorySource::new(owned.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let (sizes, result) = split(&source, 6, 11);
        assert_eq!(sizes.eval_count,  2);
        assert_eq!(result.eval.len(),  1);
        assert_eq!(result.train.len(), 12);
        assert_eq!(result.dropped.len(), 1);
        assert_eq!(result.duplicates_skipped, 13);
        assert!(matches!(
            result.verify(&sizes),
            Err(SplitError::SplitSizeMismatch { actual_eval: 1, expected_eval: 2, .. })
        ));
    }

    #[test]
    fn test_partition_invariants_with_duplicates() {
        // 40 samples, every description shared by 4 of them → 10 distinct hashes
        let owned: Vec<(String, String)> = (0..40)
            .map(|i| (format!("m{i:02}"), format!("col{{img{}}}", i % 10)))
            .collect();
        let source = MemorySource::new(owned.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let corpus: HashSet<Sample> = source.scan().unwrap().into_iter().collect();

        for seed in 0..25 {
            let (sizes, result) = split(&source, 3, seed);

            let eval:  HashSet<&Sample> = result.eval.iter().collect();
            let train: HashSet<&Sample> = result.train.iter().collect();
            assert!(eval.is_disjoint(&train));
            assert!(eval.iter().chain(train.iter()).all(|s| corpus.contains(*s)));

            let hashes: HashSet<ContentHash> = result
                .eval
                .iter()
                .map(|s| source.content_hash(s).unwrap())
                .collect();
            assert_eq!(hashes.len(), result.eval.len());

            assert_eq!(
                result.eval.len() + result.train.len() + result.dropped.len(),
                sizes.total
            );
            assert!(result.verify(&sizes).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_partition() {
        let source = MemorySource::unique(30);
        let (_, a) = split(&source, 4, 2024);
        let (_, b) = split(&source, 4, 2024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_errors_propagate() {
        let source  = MemorySource::unique(7);
        let samples = vec![Sample::new("not-in-source")];
        let sizes   = SplitSizes::compute(7, 6).unwrap();
        assert!(partition(samples, &sizes, &source).is_err());
    }
}
