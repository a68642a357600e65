/// Box-drawing console report — classification results and distribution
/// statistics.
///
/// Rendering is a pure function of the records and their distribution so
/// it can be asserted on directly in tests. No colour codes are emitted
/// here; colour lives in the status lines around the report, never inside
/// the aligned panels.
use filetriage_core::analysis::Distribution;
use filetriage_core::model::format::{format_count, format_percent};
use filetriage_core::model::ClassifiedRecord;

/// Number of `═` characters in a horizontal rule; panel content is padded
/// to this width minus the surrounding spaces.
const WIDTH: usize = 62;

/// Maximum filename characters in a results line before middle-truncation.
const NAME_WIDTH: usize = 25;

/// Render the full report: results panel followed by the statistics panel.
///
/// `records` are printed in the order given — callers sort by priority
/// first.
pub fn render_report(records: &[ClassifiedRecord], dist: &Distribution) -> String {
    let mut out = String::new();
    render_results(&mut out, records);
    out.push('\n');
    render_statistics(&mut out, dist);
    out
}

/// The per-file classification panel, one line per record.
fn render_results(out: &mut String, records: &[ClassifiedRecord]) {
    push_rule(out, Rule::Top);
    push_centered(out, "PROCESSING RESULTS");
    push_rule(out, Rule::Mid);
    for record in records {
        let name = truncate_name(record.filename.as_str(), NAME_WIDTH);
        push_boxed(
            out,
            &format!(
                "{name:<NAME_WIDTH$} → {label:<20} [P{priority}]",
                label = record.category.label(),
                priority = record.priority,
            ),
        );
    }
    push_rule(out, Rule::Bottom);
}

/// The statistics panel: total, category distribution, priority
/// distribution.
fn render_statistics(out: &mut String, dist: &Distribution) {
    push_rule(out, Rule::Top);
    push_centered(out, "STATISTICAL ANALYSIS REPORT");
    push_rule(out, Rule::Mid);
    push_boxed(
        out,
        &format!("Total files processed: {}", format_count(dist.total)),
    );

    push_rule(out, Rule::Mid);
    push_centered(out, "CATEGORY DISTRIBUTION");
    push_rule(out, Rule::Mid);
    for share in &dist.categories {
        push_boxed(
            out,
            &format!(
                "{label:<24}: {count:>4} files ({percent})",
                label = share.category.label(),
                count = format_count(share.count),
                percent = format_percent(share.percent),
            ),
        );
    }

    push_rule(out, Rule::Mid);
    push_centered(out, "PRIORITY DISTRIBUTION");
    push_rule(out, Rule::Mid);
    for share in &dist.priorities {
        push_boxed(
            out,
            &format!(
                "{label:<24}: {count:>4} files ({percent})",
                label = format!("Priority level {}", share.priority),
                count = format_count(share.count),
                percent = format_percent(share.percent),
            ),
        );
    }
    push_rule(out, Rule::Bottom);
}

enum Rule {
    Top,
    Mid,
    Bottom,
}

fn push_rule(out: &mut String, rule: Rule) {
    let (left, right) = match rule {
        Rule::Top => ('╔', '╗'),
        Rule::Mid => ('╠', '╣'),
        Rule::Bottom => ('╚', '╝'),
    };
    out.push(left);
    for _ in 0..WIDTH {
        out.push('═');
    }
    out.push(right);
    out.push('\n');
}

fn push_boxed(out: &mut String, content: &str) {
    out.push_str(&format!("║ {:<width$} ║\n", content, width = WIDTH - 2));
}

fn push_centered(out: &mut String, title: &str) {
    out.push_str(&format!("║ {:^width$} ║\n", title, width = WIDTH - 2));
}

/// Middle-truncate a filename to `max_len` characters with an ellipsis.
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        return name.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetriage_core::analysis::{aggregate, sort_by_priority};
    use filetriage_core::classify::classify_all;
    use filetriage_core::registry::ExtensionRegistry;

    fn render_names(names: &[&str]) -> String {
        let registry = ExtensionRegistry::builtin();
        let records = sort_by_priority(classify_all(names.iter().copied(), &registry));
        let dist = aggregate(&records);
        render_report(&records, &dist)
    }

    /// Every rendered line has the same character width, so the box edges
    /// line up.
    #[test]
    fn lines_are_uniform_width() {
        let report = render_names(&["report.docx", "photo.JPG", "notes"]);
        let widths: Vec<usize> = report
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().count())
            .collect();
        assert!(!widths.is_empty());
        assert!(
            widths.iter().all(|&w| w == widths[0]),
            "uneven line widths: {widths:?}"
        );
    }

    /// Result lines carry filename, category label, and priority tag, in
    /// priority order.
    #[test]
    fn result_lines_in_priority_order() {
        let report = render_names(&["notes", "report.docx"]);
        let docx = report.find("report.docx").expect("docx line missing");
        let notes = report.find("notes").expect("notes line missing");
        assert!(docx < notes, "P1 record must precede P5 record");
        assert!(report.contains("DOCUMENTS_REPOSITORY"));
        assert!(report.contains("[P1]"));
        assert!(report.contains("MISCELLANEOUS_FILES"));
        assert!(report.contains("[P5]"));
    }

    /// The statistics panel reports the total and percentage shares.
    #[test]
    fn statistics_panel_content() {
        let report = render_names(&["a.txt", "b.txt", "c.zip", "d.zip"]);
        assert!(report.contains("STATISTICAL ANALYSIS REPORT"));
        assert!(report.contains("Total files processed: 4"));
        assert!(report.contains("CATEGORY DISTRIBUTION"));
        assert!(report.contains("PRIORITY DISTRIBUTION"));
        // Two categories at two files each: 50.0% shares.
        assert_eq!(report.matches("(50.0%)").count(), 4);
        assert!(report.contains("Priority level 1"));
        assert!(report.contains("Priority level 4"));
    }

    /// An empty batch still renders both panels, with a zero total and no
    /// entry lines.
    #[test]
    fn empty_batch_renders_frame() {
        let report = render_names(&[]);
        assert!(report.contains("PROCESSING RESULTS"));
        assert!(report.contains("Total files processed: 0"));
        assert!(!report.contains("[P"));
    }

    /// Overlong filenames are middle-truncated so panels stay aligned.
    #[test]
    fn long_names_are_truncated() {
        let long = "a_very_long_filename_that_never_seems_to_end.tar";
        let report = render_names(&[long]);
        assert!(!report.contains(long), "raw overlong name must not appear");
        assert!(report.contains("..."));

        let widths: Vec<usize> = report
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().count())
            .collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    // ── truncate_name ────────────────────────────────────────────────────

    #[test]
    fn truncate_short_name_is_identity() {
        assert_eq!(truncate_name("short.txt", 25), "short.txt");
    }

    #[test]
    fn truncate_long_name_keeps_ends() {
        let truncated = truncate_name("abcdefghijklmnopqrstuvwxyz0123456789.zip", 25);
        assert_eq!(truncated.chars().count(), 25);
        assert!(truncated.starts_with("abcdefghijk"));
        assert!(truncated.ends_with("6789.zip"));
        assert!(truncated.contains("..."));
    }
}
