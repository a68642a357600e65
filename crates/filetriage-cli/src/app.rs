/// Run orchestration — resolve the input list, drive the core pipeline,
/// and render the report.
use std::time::Instant;

use colored::Colorize;
use filetriage_core::analysis::{aggregate, sort_by_priority, Distribution};
use filetriage_core::classify::classify;
use filetriage_core::model::ClassifiedRecord;
use filetriage_core::registry::ExtensionRegistry;
use indicatif::ProgressBar;

use crate::args::{Args, ReportFormat};
use crate::input::{self, InputError};
use crate::progress;
use crate::report;

/// Execute one full run: input → classify → sort → aggregate → render.
///
/// The report body goes to stdout; progress and the completion status
/// line go to stderr so piped output stays clean.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let filenames = resolve_input(args)?;
    let registry = ExtensionRegistry::builtin();

    let started = Instant::now();
    let (records, dist) = classify_batch(&filenames, &registry, progress_bar(args, &filenames));
    let elapsed = started.elapsed();
    tracing::info!(
        files = dist.total,
        elapsed_us = elapsed.as_micros() as u64,
        "classification finished"
    );

    match args.format {
        ReportFormat::Table => print!("{}", report::render_report(&records, &dist)),
        ReportFormat::Json => println!("{}", report::render_json(&records, &dist)?),
        ReportFormat::Csv => print!("{}", report::render_csv(&records)?),
    }

    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    eprintln!(
        "{} {}",
        format!("\u{2713} {} files classified", dist.total).green(),
        format!("({elapsed:.1?}, {stamp})").dimmed(),
    );
    Ok(())
}

/// Classify every filename, ticking the progress bar per record, then
/// sort and aggregate.
fn classify_batch(
    filenames: &[String],
    registry: &ExtensionRegistry,
    bar: ProgressBar,
) -> (Vec<ClassifiedRecord>, Distribution) {
    let records: Vec<ClassifiedRecord> = filenames
        .iter()
        .map(|name| {
            let record = classify(name, registry);
            bar.inc(1);
            record
        })
        .collect();
    bar.finish_and_clear();

    let sorted = sort_by_priority(records);
    let dist = aggregate(&sorted);
    (sorted, dist)
}

/// Pick the input source: an explicit list file, positional filenames, or
/// the demonstration dataset when neither is given.
fn resolve_input(args: &Args) -> Result<Vec<String>, InputError> {
    if let Some(path) = &args.input {
        return input::read_list(path);
    }
    if !args.filenames.is_empty() {
        return Ok(args.filenames.clone());
    }
    Ok(input::demonstration_dataset())
}

/// Progress display is table-format cosmetics only; structured formats
/// and `--no-progress` get a hidden bar.
fn progress_bar(args: &Args, filenames: &[String]) -> ProgressBar {
    if args.no_progress || args.format != ReportFormat::Table {
        ProgressBar::hidden()
    } else {
        progress::classification_bar(filenames.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(argv)
    }

    /// No filenames and no input file means the demo dataset.
    #[test]
    fn resolve_defaults_to_demo() {
        let args = parse(&["filetriage"]);
        let filenames = resolve_input(&args).unwrap();
        assert_eq!(filenames.len(), 32);
    }

    /// Positional filenames win over the demo dataset.
    #[test]
    fn resolve_prefers_positionals() {
        let args = parse(&["filetriage", "a.txt", "b.zip"]);
        let filenames = resolve_input(&args).unwrap();
        assert_eq!(filenames, vec!["a.txt", "b.zip"]);
    }

    /// `--demo` explicitly selects the dataset.
    #[test]
    fn resolve_explicit_demo() {
        let args = parse(&["filetriage", "--demo"]);
        let filenames = resolve_input(&args).unwrap();
        assert_eq!(filenames.len(), 32);
    }

    /// The batch helper returns sorted records with a matching
    /// distribution.
    #[test]
    fn classify_batch_sorts_and_aggregates() {
        let registry = ExtensionRegistry::builtin();
        let filenames: Vec<String> = ["notes", "report.docx"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();

        let (records, dist) = classify_batch(&filenames, &registry, ProgressBar::hidden());
        assert_eq!(records[0].filename, "report.docx");
        assert_eq!(records[1].filename, "notes");
        assert_eq!(dist.total, 2);
    }

    /// Structured formats never draw a progress bar.
    #[test]
    fn no_bar_for_structured_formats() {
        let args = parse(&["filetriage", "--format", "json"]);
        let bar = progress_bar(&args, &[]);
        assert!(bar.is_hidden());
    }

    /// `--no-progress` hides the bar even for the table format.
    #[test]
    fn no_progress_flag_hides_bar() {
        let args = parse(&["filetriage", "--no-progress"]);
        let bar = progress_bar(&args, &[]);
        assert!(bar.is_hidden());
    }
}
