/// Extension-to-category lookup table.
///
/// Built once at startup from a fixed mapping table and read-only
/// thereafter; classification never mutates it. A custom table can be
/// injected through [`ExtensionRegistry::from_pairs`], which keeps test
/// fixtures deterministic and lets frontends extend the mapping without
/// touching this crate.
use compact_str::CompactString;
use std::collections::HashMap;

use crate::model::Category;

/// The built-in extension mapping.
///
/// Keys are lowercase with no leading dot. Unlisted extensions (and the
/// empty extension) fall through to [`Category::Miscellaneous`] at the
/// call site — absence is "no match", not an error.
const DEFAULT_MAPPINGS: &[(&str, Category)] = &[
    // Documents
    ("txt", Category::Documents),
    ("doc", Category::Documents),
    ("docx", Category::Documents),
    ("pdf", Category::Documents),
    ("rtf", Category::Documents),
    // Multimedia
    ("jpg", Category::Multimedia),
    ("jpeg", Category::Multimedia),
    ("png", Category::Multimedia),
    ("gif", Category::Multimedia),
    ("bmp", Category::Multimedia),
    // Audio
    ("mp3", Category::Audio),
    ("wav", Category::Audio),
    ("flac", Category::Audio),
    ("aac", Category::Audio),
    // Video
    ("mp4", Category::Video),
    ("avi", Category::Video),
    ("mkv", Category::Video),
    ("mov", Category::Video),
    // Archives
    ("zip", Category::Archives),
    ("rar", Category::Archives),
    ("7z", Category::Archives),
    ("tar", Category::Archives),
    // Source code
    ("cpp", Category::SourceCode),
    ("c", Category::SourceCode),
    ("py", Category::SourceCode),
    ("java", Category::SourceCode),
    ("js", Category::SourceCode),
    ("html", Category::SourceCode),
];

/// Immutable mapping from lowercase file extension to [`Category`].
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    map: HashMap<CompactString, Category>,
}

impl ExtensionRegistry {
    /// Build the registry from the built-in mapping table.
    pub fn builtin() -> Self {
        Self::from_pairs(DEFAULT_MAPPINGS.iter().copied())
    }

    /// Build a registry from arbitrary (extension, category) pairs.
    ///
    /// Later pairs win on duplicate extensions. Keys are ASCII-lowercased
    /// on insertion so lookups against extractor output always match.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Category)>) -> Self {
        let map = pairs
            .into_iter()
            .map(|(ext, category)| {
                let key: CompactString = ext.chars().map(|c| c.to_ascii_lowercase()).collect();
                (key, category)
            })
            .collect();
        Self { map }
    }

    /// Look up an extension. Returns `None` when the extension is not
    /// registered; the caller decides the fallback.
    pub fn lookup(&self, extension: &str) -> Option<Category> {
        self.map.get(extension).copied()
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return `true` if no extensions are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
