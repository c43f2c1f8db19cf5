// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands over the same arguments:
//   run  — split and copy into training_set/ and eval_set/
//   plan — split in memory and print the result, copy nothing

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::SplitConfig;
use crate::domain::sample::{PairKind, DEFAULT_DESC_EXT, DEFAULT_IMAGE_EXT};
use crate::domain::split::DEFAULT_DISTRIBUTION;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the samples and copy them into training_set/ and eval_set/
    Run(SplitArgs),

    /// Show the split that `run` would make, without copying anything
    Plan(SplitArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Directory holding {name}.gui and {name}.png pairs.
    /// For {name}.desc / {name}.img pairs pass `--desc-ext desc --image-ext img`
    pub input_path: PathBuf,

    /// Training:evaluation ratio, e.g. 6 means 6 training samples per evaluation sample
    #[arg(
        default_value_t = DEFAULT_DISTRIBUTION,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub distribution: u32,

    /// Seed for the shuffle; a random one is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy a short split instead of failing when duplicates leave a set unfilled
    #[arg(long)]
    pub allow_short: bool,

    /// Write a JSON report of the split to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Extension of description files
    #[arg(long, default_value = DEFAULT_DESC_EXT)]
    pub desc_ext: String,

    /// Extension of image files
    #[arg(long, default_value = DEFAULT_IMAGE_EXT)]
    pub image_ext: String,
}

/// The application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input_dir:    a.input_path,
            distribution: a.distribution,
            seed:         a.seed,
            kind:         PairKind::new(a.desc_ext, a.image_ext),
            allow_short:  a.allow_short,
            report_path:  a.report,
        }
    }
}
