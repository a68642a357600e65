/// Command-line argument surface.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Classify filenames by extension, rank them by priority, and report the
/// distribution.
///
/// Filenames are treated as opaque strings — nothing is ever read from,
/// moved on, or written to the filesystem for them.
#[derive(Parser, Debug)]
#[command(name = "filetriage", version, about)]
pub struct Args {
    /// Filenames to classify.
    pub filenames: Vec<String>,

    /// Read newline-separated filenames from a list file ("-" for stdin).
    #[arg(short, long, value_name = "FILE", conflicts_with = "filenames")]
    pub input: Option<PathBuf>,

    /// Classify the built-in demonstration dataset (default when no
    /// filenames are given).
    #[arg(long, conflicts_with_all = ["filenames", "input"])]
    pub demo: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Suppress the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Report output formats. Everything is written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Box-drawing console report with distribution statistics.
    Table,
    /// Structured report (records plus both distributions) as JSON.
    Json,
    /// Per-record rows as CSV.
    Csv,
}
