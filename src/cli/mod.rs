// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands a SplitConfig to the
// application layer. Results are printed here and nowhere else.
//
// Exit behaviour (enforced by main.rs):
//   no arguments          → usage on stdout, exit 0
//   any error from run()  → message on stderr, exit 1

pub mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use commands::{Commands, SplitArgs};

use crate::application::split_use_case::{SplitPlan, SplitUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "sample-splitter",
    version,
    about = "Split paired description/image samples into training and evaluation sets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// True when the program was started with no arguments beyond its name.
///
/// # Arguments
/// * `args` - The full argument list, program name included
///            (e.g. `std::env::args_os()`)
pub fn usage_requested<I>(args: I) -> bool
where
    I: IntoIterator,
{
    args.into_iter().nth(1).is_none()
}

/// The rendered `--help` text.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args)  => run_split(args),
            Commands::Plan(args) => run_plan(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    tracing::info!("Splitting samples in: {}", args.input_path.display());

    let outcome = SplitUseCase::new(args.into()).execute()?;
    print_summary(&outcome.plan);

    println!("Training dataset: {}",   outcome.outputs.training.display());
    println!("Evaluation dataset: {}", outcome.outputs.evaluation.display());
    Ok(())
}

fn run_plan(args: SplitArgs) -> Result<()> {
    let plan = SplitUseCase::new(args.into()).dry_run()?;
    print_plan(&plan);
    Ok(())
}

fn print_plan(plan: &SplitPlan) {
    print_summary(plan);
    let p = &plan.partition;
    for (label, set) in [("eval", &p.eval), ("train", &p.train), ("dropped", &p.dropped)] {
        for sample in set {
            println!("{label}\t{sample}");
        }
    }
}

fn print_summary(plan: &SplitPlan) {
    let p = &plan.partition;
    println!(
        "seed {}: {} samples → {} evaluation, {} training, {} dropped ({} duplicates skipped)",
        plan.seed,
        plan.sizes.total,
        p.eval.len(),
        p.train.len(),
        p.dropped.len(),
        p.duplicates_skipped,
    );
}
