//! FileTriage — console file classification triage tool.
//!
//! Thin binary entry point. All logic lives in the `filetriage-core`
//! and `filetriage-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Diagnostics go to stderr so the
    // rendered report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("FileTriage starting");

    let args = filetriage_cli::Args::parse();
    filetriage_cli::run(&args)
}
