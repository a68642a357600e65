/// Structured report export — JSON and CSV, written to stdout by the
/// caller. The tool never creates or modifies files.
use std::io;

use filetriage_core::analysis::Distribution;
use filetriage_core::model::ClassifiedRecord;
use thiserror::Error;

/// Errors raised while serialising a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialise report to JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialise report to CSV")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV buffer")]
    CsvFlush(#[from] io::Error),
}

/// Render the full structured report as pretty-printed JSON: the sorted
/// records plus both distributions.
pub fn render_json(
    records: &[ClassifiedRecord],
    dist: &Distribution,
) -> Result<String, ExportError> {
    let report = serde_json::json!({
        "total": dist.total,
        "records": records,
        "category_distribution": dist.categories,
        "priority_distribution": dist.priorities,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render per-record rows as CSV with a header line.
///
/// Distribution statistics are a JSON/table concern; CSV carries the flat
/// record table only.
pub fn render_csv(records: &[ClassifiedRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(["filename", "extension", "category", "priority"])?;
        for record in records {
            let priority = record.priority.to_string();
            writer.write_record([
                record.filename.as_str(),
                record.extension.as_str(),
                record.category.label(),
                priority.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
