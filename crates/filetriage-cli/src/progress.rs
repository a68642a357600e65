/// Classification progress display.
///
/// Purely cosmetic console animation — it ticks as records are produced
/// and knows nothing about classification itself. Indicatif suppresses
/// drawing automatically when stderr is not a terminal.
use indicatif::{ProgressBar, ProgressStyle};

/// Build the block-character progress bar used while classifying.
pub fn classification_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "Processing {bar:40} {percent:>3}% ({pos}/{len})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█░");
    ProgressBar::new(len).with_style(style)
}
