use crate::config::{DisplaySettings, MetadataConfig};
use crate::error::Result;
use crate::records::{EventRecord, LibraryEntry, VideoFile};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Extensions accepted as playable video, matched case-insensitively.
const VIDEO_EXTENSIONS: [&str; 7] = ["mkv", "mp4", "flv", "avi", "iso", "mpg", "ts"];

/// Walks the directory of a library entry and returns its playable files,
/// sorted by filename. Files outside the extension allow-list are logged
/// and skipped.
pub fn resolve_videos(entry: &LibraryEntry, settings: &DisplaySettings) -> Result<Vec<VideoFile>> {
    let mut videos = Vec::new();

    for dir_entry in WalkDir::new(&entry.path) {
        let dir_entry = dir_entry.map_err(io::Error::from)?;
        if !dir_entry.file_type().is_file() {
            continue;
        }

        let filename = dir_entry.file_name().to_string_lossy().to_string();
        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        if !VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            info!("File ignored: {}", dir_entry.path().display());
            continue;
        }

        let display_title = if settings.clean_filenames {
            clean_title(&filename)
        } else {
            filename.clone()
        };

        videos.push(VideoFile {
            filename,
            extension,
            path: dir_entry.into_path(),
            display_title,
        });
    }

    videos.sort_by(|a, b| a.filename.cmp(&b.filename).then_with(|| a.path.cmp(&b.path)));
    Ok(videos)
}

/// Strips the extension and any leading run of digits, dots and spaces
/// ("01. " style ordering prefixes).
fn clean_title(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename);
    stem.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
        .to_string()
}

/// Poster and fanart paths for an event, after fallback resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub poster: PathBuf,
    pub fanart: PathBuf,
}

/// Cached per-event art wins; otherwise the promotion-level default, keyed
/// by the promotion name with spaces removed. Never fails.
pub fn resolve_artwork(event: &EventRecord, metadata: &MetadataConfig) -> Artwork {
    Artwork {
        poster: art_path(event, metadata, "poster"),
        fanart: art_path(event, metadata, "fanart"),
    }
}

fn art_path(event: &EventRecord, metadata: &MetadataConfig, kind: &str) -> PathBuf {
    let cached = metadata.cache_dir.join(format!("{}-{}.jpg", event.id, kind));
    if cached.exists() {
        return cached;
    }
    let promotion = event.promotion.replace(' ', "");
    metadata
        .promotion_dir
        .join(format!("{}-{}.jpg", promotion, kind))
}

/// The cached description file's contents, or the synthesized outline when
/// the file cannot be read. Never fails.
pub fn resolve_description(event: &EventRecord, metadata: &MetadataConfig) -> String {
    let path = metadata
        .cache_dir
        .join(format!("{}-description.txt", event.id));
    match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => outline(event),
    }
}

/// One-line event summary shown when no description file exists.
pub fn outline(event: &EventRecord) -> String {
    format!("{}: {}, {}", event.promotion, event.venue, event.city)
}
