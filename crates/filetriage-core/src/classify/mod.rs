/// Per-filename classification — extension extraction, category lookup,
/// and batch processing.
///
/// Every function here is total: empty strings, missing extensions, and
/// unrecognised extensions are valid inputs with defined outputs, never
/// errors.
use compact_str::CompactString;

use crate::model::{Category, ClassifiedRecord};
use crate::registry::ExtensionRegistry;

/// Extract the extension from a filename: the text after the last `.`,
/// ASCII-lowercased.
///
/// Returns the empty string when the filename contains no dot, or when the
/// dot is the final character. A leading dot followed by text yields the
/// trailing text (".gitignore" → "gitignore") — deliberately the literal
/// "after the last dot" rule, with no hidden-file special case.
pub fn extract_extension(filename: &str) -> CompactString {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() => filename[pos + 1..]
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .collect(),
        _ => CompactString::default(),
    }
}

/// Resolve an extension to a category via the registry, falling back to
/// [`Category::Miscellaneous`] for unregistered extensions (including the
/// empty extension).
pub fn categorise(extension: &str, registry: &ExtensionRegistry) -> Category {
    registry
        .lookup(extension)
        .unwrap_or(Category::Miscellaneous)
}

/// Classify a single filename: extract → categorise → derive priority.
pub fn classify(filename: &str, registry: &ExtensionRegistry) -> ClassifiedRecord {
    let extension = extract_extension(filename);
    let category = categorise(&extension, registry);
    ClassifiedRecord::new(CompactString::new(filename), extension, category)
}

/// Classify every filename in input order.
///
/// Items are independent — no cross-item state — so the output list lines
/// up index-for-index with the input until a later sort reorders it.
pub fn classify_all<'a>(
    filenames: impl IntoIterator<Item = &'a str>,
    registry: &ExtensionRegistry,
) -> Vec<ClassifiedRecord> {
    let records: Vec<ClassifiedRecord> = filenames
        .into_iter()
        .map(|name| classify(name, registry))
        .collect();
    tracing::debug!(count = records.len(), "classified filename batch");
    records
}
