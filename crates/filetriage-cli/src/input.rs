/// Input sources — the built-in demonstration dataset and list-file
/// reading.
///
/// The core accepts any injected filename sequence; this module is the
/// only place the CLI turns an outside source into that sequence. List
/// files are read as text, one filename per line — the named files
/// themselves are never touched.
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while gathering the input filename list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read filename list from {}", path.display())]
    ListFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read filename list from stdin")]
    Stdin(#[source] io::Error),
}

/// Read a newline-separated filename list from `path`, or from stdin when
/// `path` is `-`.
///
/// Lines are trimmed of surrounding whitespace; blank lines are skipped.
pub fn read_list(path: &Path) -> Result<Vec<String>, InputError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| InputError::ListFile {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(parse_list(&text))
}

/// Split list-file text into filenames: one per line, trimmed, blanks
/// skipped.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The fixed demonstration dataset from the original console program:
/// 32 names spanning all six categories plus five unclassified examples.
pub fn demonstration_dataset() -> Vec<String> {
    [
        // Documents
        "project_proposal.docx",
        "technical_specification.pdf",
        "meeting_minutes.txt",
        "user_manual.doc",
        "requirements_document.rtf",
        // Multimedia
        "corporate_logo.png",
        "presentation_slide.jpg",
        "infographic_design.gif",
        "website_banner.jpeg",
        "icon_collection.bmp",
        // Audio
        "conference_recording.mp3",
        "podcast_episode.wav",
        "training_audio.flac",
        "notification_sound.aac",
        // Video
        "training_video.mp4",
        "presentation_demo.avi",
        "tutorial_content.mkv",
        "promotional_video.mov",
        // Archives
        "backup_archive.zip",
        "software_package.rar",
        "data_backup.7z",
        "system_files.tar",
        // Source code
        "main_application.cpp",
        "utility_functions.c",
        "data_processor.py",
        "web_interface.html",
        "style_definitions.js",
        // Unclassified
        "readme_file",
        "configuration.ini",
        "database_schema.sql",
        "log_entries.log",
        "system_preferences.cfg",
    ]
    .iter()
    .map(|name| (*name).to_owned())
    .collect()
}
