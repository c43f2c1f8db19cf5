mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sample_splitter=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // No arguments at all: show usage and exit cleanly
    if cli::usage_requested(std::env::args_os()) {
        println!("{}", cli::usage());
        return Ok(());
    }

    let cli = Cli::parse();
    cli.run()
}
