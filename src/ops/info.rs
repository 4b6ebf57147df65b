//! File info queries and human-readable formatting for the demo output.

use crate::errors::{RecfileError, RecfileResult};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Size and timestamps of a file, in unix seconds. `created` is `None` on
/// platforms that do not report a creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub size: u64,
    pub modified: u64,
    pub created: Option<u64>,
}

/// Size of a file in bytes.
pub fn file_size(path: &Path) -> RecfileResult<u64> {
    if !path.exists() {
        return Err(RecfileError::NotFound(path.display().to_string()));
    }
    Ok(std::fs::metadata(path)?.len())
}

/// Query size and timestamps for an existing file.
pub fn file_info(path: &Path) -> RecfileResult<FileInfo> {
    if !path.exists() {
        return Err(RecfileError::NotFound(path.display().to_string()));
    }
    let metadata = std::fs::metadata(path)?;
    let modified = metadata
        .modified()?
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let created = metadata
        .created()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs());
    Ok(FileInfo {
        size: metadata.len(),
        modified,
        created,
    })
}

/// Format a byte count with a binary-unit suffix.
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{size} B")
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// Format a unix-seconds timestamp as a UTC date-time string.
pub fn format_timestamp(timestamp: u64) -> String {
    use chrono::{DateTime, Utc};
    let datetime = DateTime::<Utc>::from_timestamp(timestamp as i64, 0)
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).unwrap());
    datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
