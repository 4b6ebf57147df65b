//! recfile - Fixed-layout record files and elementary file I/O helpers
//!
//! A small library (plus demonstration binary) for basic file input/output:
//! whole-file UTF-8 text, fixed 21-byte binary records, append-to-file, and
//! chunked file copying with optional verification.
//!
//! ## Features
//!
//! - **Record codec**: a fixed little-endian layout of (i32, 128-bit scaled
//!   decimal, boolean), 21 bytes per record, no header or versioning
//! - **Chunked copy**: bounded-buffer copying with a byte-for-byte
//!   verification pass
//! - **Text helpers**: whole-file UTF-8 write/read and non-truncating append
//! - **File info**: size and timestamp queries with readable formatting
//!
//! All I/O is synchronous and blocking. Each operation opens at most two
//! file handles for its own duration and releases them on every exit path.
//!
//! ## Usage
//!
//! ```rust
//! use recfile::record::{Record, ScaledDecimal};
//!
//! // 99.99 as a scaled decimal: mantissa 9999, scale 2
//! let amount = ScaledDecimal::new(9999, false, 2).unwrap();
//! let record = Record::new(12345, amount, true);
//!
//! let encoded = record.encode();
//! assert_eq!(encoded.len(), recfile::record::RECORD_SIZE);
//!
//! let decoded = Record::decode(&encoded).unwrap();
//! assert_eq!(decoded, record);
//! assert_eq!(decoded.amount.to_string(), "99.99");
//! ```

pub mod errors;
pub mod ops;
pub mod record;

// Re-export main types for convenience
pub use errors::{RecfileError, RecfileResult};
pub use record::{DecimalFlags, Record, ScaledDecimal, MAX_SCALE, RECORD_SIZE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the recfile library with logging
pub fn init() -> RecfileResult<()> {
    env_logger::init();
    log::info!("recfile v{VERSION} initialized");
    Ok(())
}
