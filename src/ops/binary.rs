//! Fixed-layout binary file helpers.
//!
//! These functions move [`Record`]s and single integers between memory and
//! files. Record files are back-to-back 21-byte entries with no header.

use crate::errors::{RecfileError, RecfileResult};
use crate::record::{Record, RECORD_SIZE};
use std::fs;
use std::path::Path;

/// Write one encoded record as the entire contents of a file (truncating).
pub fn write_record(path: &Path, record: &Record) -> RecfileResult<()> {
    fs::write(path, record.encode())?;
    log::debug!("wrote record id={} to {path:?}", record.id);
    Ok(())
}

/// Read one record from the start of a file.
///
/// # Errors
/// Fails with [`RecfileError::NotFound`] when the path does not exist, and
/// with the codec errors when the contents are malformed.
pub fn read_record(path: &Path) -> RecfileResult<Record> {
    if !path.exists() {
        return Err(RecfileError::NotFound(path.display().to_string()));
    }
    let data = fs::read(path)?;
    Record::decode(&data)
}

/// Read every record from a file of back-to-back 21-byte entries.
///
/// # Errors
/// Fails with [`RecfileError::Record`] when the file length is not a
/// multiple of [`RECORD_SIZE`].
pub fn read_records(path: &Path) -> RecfileResult<Vec<Record>> {
    if !path.exists() {
        return Err(RecfileError::NotFound(path.display().to_string()));
    }
    let data = fs::read(path)?;
    if data.len() % RECORD_SIZE != 0 {
        return Err(RecfileError::Record(format!(
            "file length {} is not a multiple of {RECORD_SIZE}",
            data.len()
        )));
    }
    data.chunks_exact(RECORD_SIZE).map(Record::decode).collect()
}

/// Write a single little-endian i32 as the entire contents of a file.
pub fn write_i32(path: &Path, value: i32) -> RecfileResult<()> {
    fs::write(path, value.to_le_bytes())?;
    Ok(())
}

/// Read a single little-endian i32 from the start of a file.
pub fn read_i32(path: &Path) -> RecfileResult<i32> {
    if !path.exists() {
        return Err(RecfileError::NotFound(path.display().to_string()));
    }
    let data = fs::read(path)?;
    if data.len() < 4 {
        return Err(RecfileError::Record(format!(
            "need 4 bytes, got {}",
            data.len()
        )));
    }
    Ok(i32::from_le_bytes([data[0], data[1], data[2], data[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ScaledDecimal;
    use tempfile::tempdir;

    fn sample_record(id: i32) -> Record {
        Record::new(id, ScaledDecimal::new(9999, false, 2).unwrap(), true)
    }

    #[test]
    fn test_record_file_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("numbers.dat");

        write_record(&path, &sample_record(12345)).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), RECORD_SIZE as u64);
        assert_eq!(read_record(&path).unwrap(), sample_record(12345));
    }

    #[test]
    fn test_read_record_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = read_record(&temp_dir.path().join("missing.dat"));
        assert!(matches!(result, Err(RecfileError::NotFound(_))));
    }

    #[test]
    fn test_read_record_truncated_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("short.dat");
        fs::write(&path, [0u8; 10]).unwrap();

        let result = read_record(&path);
        assert!(matches!(result, Err(RecfileError::Record(_))));
    }

    #[test]
    fn test_read_records_multiple() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("batch.dat");

        let mut bytes = Vec::new();
        for id in [1, 2, 3] {
            bytes.extend_from_slice(&sample_record(id).encode());
        }
        fs::write(&path, &bytes).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], sample_record(3));
    }

    #[test]
    fn test_read_records_rejects_partial_trailing_record() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("batch.dat");

        let mut bytes = sample_record(1).encode().to_vec();
        bytes.extend_from_slice(&[0u8; 5]);
        fs::write(&path, &bytes).unwrap();

        let result = read_records(&path);
        assert!(matches!(result, Err(RecfileError::Record(_))));
    }

    #[test]
    fn test_read_records_empty_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.dat");
        fs::write(&path, b"").unwrap();

        assert_eq!(read_records(&path).unwrap(), Vec::new());
    }

    #[test]
    fn test_i32_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("number.dat");

        write_i32(&path, -42).unwrap();
        assert_eq!(read_i32(&path).unwrap(), -42);
    }

    #[test]
    fn test_read_i32_short_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("number.dat");
        fs::write(&path, [1u8, 2]).unwrap();

        let result = read_i32(&path);
        assert!(matches!(result, Err(RecfileError::Record(_))));
    }
}
