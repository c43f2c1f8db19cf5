// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs one split end to end:
//
//   Step 1: Scan the input directory         (Layer 4 - data)
//   Step 2: Compute the target sizes         (Layer 3 - domain)
//   Step 3: Shuffle with a seeded RNG        (Layer 4 - data)
//   Step 4: Greedy eval/train partition      (Layer 4 - data)
//   Step 5: Verify both sets are full        (Layer 3 - domain)
//   Step 6: Copy pairs to the output dirs    (Layer 5 - infra)
//   Step 7: Write the JSON report            (Layer 5 - infra)
//
// `plan` stops after step 5 and touches nothing on disk except
// the report, if one was asked for.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    scanner::DirScanner,
    splitter::{partition, resolve_seed, shuffle_samples},
};
use crate::domain::{
    error::SplitError,
    sample::PairKind,
    split::{Partition, SplitSizes, DEFAULT_DISTRIBUTION},
    traits::SampleSource,
};
use crate::infra::{
    materializer::{Materializer, OutputDirs},
    report::SplitReport,
};

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input_dir:    PathBuf,
    pub distribution: u32,
    pub seed:         Option<u64>,
    pub kind:         PairKind,

    /// Materialize a short split instead of failing
    pub allow_short:  bool,
    pub report_path:  Option<PathBuf>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input_dir:    PathBuf::from("data/all"),
            distribution: DEFAULT_DISTRIBUTION,
            seed:         None,
            kind:         PairKind::default(),
            allow_short:  false,
            report_path:  None,
        }
    }
}

/// An in-memory split, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub seed:      u64,
    pub sizes:     SplitSizes,
    pub partition: Partition,
}

/// A split that has been copied to disk.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub plan:    SplitPlan,
    pub outputs: OutputDirs,
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Steps 1–5: build and verify the partition without copying.
    pub fn plan(&self) -> Result<SplitPlan> {
        let cfg = &self.config;

        // ── Step 1: Scan ──────────────────────────────────────────────────────
        let scanner     = DirScanner::new(&cfg.input_dir, cfg.kind.clone());
        let mut samples = scanner.scan()?;

        // ── Step 2: Target sizes ──────────────────────────────────────────────
        let sizes = SplitSizes::compute(samples.len(), cfg.distribution)?;
        tracing::info!(
            "Splitting datasets, training samples: {}, evaluation samples: {}",
            sizes.train_count,
            sizes.eval_count
        );

        // ── Step 3: Shuffle ───────────────────────────────────────────────────
        let seed = resolve_seed(cfg.seed);
        tracing::info!("Shuffle seed: {}", seed);
        shuffle_samples(&mut samples, seed);

        // ── Step 4: Partition ─────────────────────────────────────────────────
        let partition = partition(samples, &sizes, &scanner)?;
        tracing::info!("Final eval_set length: {}",  partition.eval.len());
        tracing::info!("Final train_set length: {}", partition.train.len());

        // ── Step 5: Verify ────────────────────────────────────────────────────
        self.check(&partition, &sizes)?;

        Ok(SplitPlan { seed, sizes, partition })
    }

    /// Full run: plan, copy, report.
    pub fn execute(&self) -> Result<SplitOutcome> {
        let cfg  = &self.config;
        let plan = self.plan()?;

        // ── Step 6: Materialize ───────────────────────────────────────────────
        let materializer = Materializer::new(&cfg.input_dir, cfg.kind.clone())?;
        materializer.materialize(&plan.partition)?;
        let outputs = materializer.outputs().clone();

        // ── Step 7: Report ────────────────────────────────────────────────────
        self.write_report(&plan, Some(&outputs))?;

        Ok(SplitOutcome { plan, outputs })
    }

    /// `plan` followed by the report, for dry runs.
    pub fn dry_run(&self) -> Result<SplitPlan> {
        let plan = self.plan()?;
        self.write_report(&plan, None)?;
        Ok(plan)
    }

    fn check(&self, partition: &Partition, sizes: &SplitSizes) -> Result<()> {
        match partition.verify(sizes) {
            Ok(()) => {}
            Err(err @ SplitError::SplitSizeMismatch { .. }) if self.config.allow_short => {
                tracing::warn!("{err}; continuing with a short split");
            }
            Err(err) => return Err(err.into()),
        }

        let unused = partition.dropped.len();
        if unused > sizes.remainder() {
            tracing::warn!(
                "{} eligible samples were left out ({} beyond the split remainder)",
                unused,
                unused - sizes.remainder()
            );
        } else if unused > 0 {
            tracing::debug!("{} samples left over by the split ratio", unused);
        }
        Ok(())
    }

    fn write_report(&self, plan: &SplitPlan, outputs: Option<&OutputDirs>) -> Result<()> {
        let Some(path) = &self.config.report_path else {
            return Ok(());
        };
        SplitReport::new(
            &self.config.input_dir,
            outputs,
            self.config.distribution,
            plan.seed,
            plan.sizes,
            &plan.partition,
        )
        .save(path)
    }
}
