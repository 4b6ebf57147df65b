//! Whole-file UTF-8 text helpers.
//!
//! Files are raw UTF-8 bytes with no byte-order mark. `write_text`
//! truncates, `append_line` never does.

use crate::errors::{RecfileError, RecfileResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write `text` as the entire contents of a newly created (truncating) file.
pub fn write_text(path: &Path, text: &str) -> RecfileResult<()> {
    fs::write(path, text.as_bytes())?;
    log::debug!("wrote {} bytes of text to {path:?}", text.len());
    Ok(())
}

/// Read the entire file and decode it as UTF-8.
///
/// # Errors
/// Fails with [`RecfileError::NotFound`] when the path does not exist and
/// [`RecfileError::InvalidEncoding`] when the bytes are not valid UTF-8.
pub fn read_text(path: &Path) -> RecfileResult<String> {
    if !path.exists() {
        return Err(RecfileError::NotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Append `line` plus a trailing newline, creating the file if absent and
/// preserving existing content otherwise.
pub fn append_line(path: &Path, line: &str) -> RecfileResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Append `message` prefixed with a UTC timestamp, log-file style.
pub fn append_log_entry(path: &Path, message: &str) -> RecfileResult<()> {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    append_line(path, &format!("[{timestamp}] {message}"))
}
