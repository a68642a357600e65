/// File classification categories and their priority ranking.
use serde::{Serialize, Serializer};
use std::fmt;

/// Classification category assigned to a filename by extension lookup.
///
/// The enum is closed: every filename resolves to exactly one variant, with
/// [`Category::Miscellaneous`] as the fallback for unrecognised or missing
/// extensions. Derives `Copy`, `Eq`, and `Hash` so it can be used as a
/// `HashMap` key in tally code without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Documents,
    Multimedia,
    Audio,
    Video,
    Archives,
    SourceCode,
    Miscellaneous,
}

/// All categories, in declaration order. Handy for exhaustive reporting.
pub const ALL_CATEGORIES: [Category; 7] = [
    Category::Documents,
    Category::Multimedia,
    Category::Audio,
    Category::Video,
    Category::Archives,
    Category::SourceCode,
    Category::Miscellaneous,
];

impl Category {
    /// Stable report label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "DOCUMENTS_REPOSITORY",
            Self::Multimedia => "MULTIMEDIA_ASSETS",
            Self::Audio => "AUDIO_LIBRARY",
            Self::Video => "VIDEO_CONTENT",
            Self::Archives => "ARCHIVE_STORAGE",
            Self::SourceCode => "SOURCE_CODE",
            Self::Miscellaneous => "MISCELLANEOUS_FILES",
        }
    }

    /// Processing priority for this category: 1 (highest) to 5 (lowest).
    ///
    /// Total over the enum, so every record carries a priority in [1, 5].
    /// Documents outrank source code; the three media categories share a
    /// level; archives and unclassified files trail.
    pub fn priority(self) -> u8 {
        match self {
            Self::Documents => 1,
            Self::SourceCode => 2,
            Self::Multimedia | Self::Audio | Self::Video => 3,
            Self::Archives => 4,
            Self::Miscellaneous => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    /// Serialise as the report label so exported data matches the rendered
    /// report exactly.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
