//! Chunked file copying.
//!
//! Copies transfer a bounded reusable buffer at a time rather than loading
//! the whole file into memory. Verification is a separate pass the caller
//! opts into; the copy loop itself is byte-exact by construction.

use crate::errors::{RecfileError, RecfileResult};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Buffer size used by [`copy_file`].
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Copy `src` to `dst` through a [`DEFAULT_CHUNK_SIZE`] buffer.
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> RecfileResult<u64> {
    copy_file_with_chunk_size(src, dst, DEFAULT_CHUNK_SIZE)
}

/// Copy `src` to `dst` through a reusable buffer of `chunk_size` bytes
/// (clamped to at least 1). The destination is created or truncated.
///
/// A read may return fewer bytes than the buffer holds even before end of
/// stream; only the bytes actually read are written, and the loop continues
/// until a read returns zero. The destination ends up identical to the
/// source as it existed when the copy began; concurrent mutation of the
/// source mid-copy is unguarded.
///
/// # Errors
/// Fails with [`RecfileError::NotFound`] when `src` is not an existing
/// regular file.
pub fn copy_file_with_chunk_size(src: &Path, dst: &Path, chunk_size: usize) -> RecfileResult<u64> {
    if !src.is_file() {
        return Err(RecfileError::NotFound(src.display().to_string()));
    }

    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut total: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }

    log::debug!("copied {total} bytes from {src:?} to {dst:?}");
    Ok(total)
}

/// Compare `src` and `dst` byte for byte, in chunks.
///
/// # Errors
/// Fails with [`RecfileError::CopyMismatch`] when the lengths or contents
/// differ.
pub fn verify_copy(src: &Path, dst: &Path) -> RecfileResult<()> {
    let src_len = std::fs::metadata(src)?.len();
    let dst_len = std::fs::metadata(dst)?.len();
    if src_len != dst_len {
        return Err(RecfileError::CopyMismatch(format!(
            "{src:?} is {src_len} bytes but {dst:?} is {dst_len} bytes"
        )));
    }

    let mut a = File::open(src)?;
    let mut b = File::open(dst)?;
    let mut buf_a = vec![0u8; DEFAULT_CHUNK_SIZE];
    let mut buf_b = vec![0u8; DEFAULT_CHUNK_SIZE];
    let mut offset: u64 = 0;

    loop {
        let n = a.read(&mut buf_a)?;
        if n == 0 {
            return Ok(());
        }
        // Lengths are equal, so the destination must yield the same count.
        b.read_exact(&mut buf_b[..n])?;
        if buf_a[..n] != buf_b[..n] {
            return Err(RecfileError::CopyMismatch(format!(
                "content differs within {n} bytes starting at offset {offset}"
            )));
        }
        offset += n as u64;
    }
}

/// Copy and then verify in one call. Returns the number of bytes copied.
pub fn copy_file_verified(src: &Path, dst: &Path, chunk_size: usize) -> RecfileResult<u64> {
    let copied = copy_file_with_chunk_size(src, dst, chunk_size)?;
    verify_copy(src, dst)?;
    Ok(copied)
}
