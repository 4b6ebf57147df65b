//! File operations: whole-file text helpers, fixed-layout record files,
//! chunked copying, and file info queries.
//!
//! Every function here is synchronous and blocking, opens at most two file
//! handles for its own duration, and releases them on every exit path. No
//! state is shared across calls; concurrent external modification of a file
//! mid-operation is out of scope.

pub mod binary;
pub mod copy;
pub mod info;
pub mod text;

pub use binary::{read_i32, read_record, read_records, write_i32, write_record};
pub use copy::{copy_file, copy_file_verified, copy_file_with_chunk_size, verify_copy, DEFAULT_CHUNK_SIZE};
pub use info::{file_info, file_size, format_file_size, format_timestamp, FileInfo};
pub use text::{append_line, append_log_entry, read_text, write_text};
