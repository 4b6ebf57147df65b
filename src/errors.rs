use std::fmt;

#[derive(Debug)]
pub enum RecfileError {
    /// Path does not exist or is not a regular file
    NotFound(String),
    /// Malformed fixed-layout record data
    Record(String),
    /// Decimal scale outside the supported range
    InvalidScale(u8),
    /// Text bytes are not valid UTF-8
    InvalidEncoding(String),
    /// Post-copy verification mismatch
    CopyMismatch(String),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for RecfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecfileError::NotFound(msg) => write!(f, "File not found: {msg}"),
            RecfileError::Record(msg) => write!(f, "Malformed record: {msg}"),
            RecfileError::InvalidScale(scale) => {
                write!(f, "Invalid decimal scale {scale} (must be 0..=28)")
            }
            RecfileError::InvalidEncoding(msg) => write!(f, "Invalid UTF-8 encoding: {msg}"),
            RecfileError::CopyMismatch(msg) => write!(f, "Copy verification failed: {msg}"),
            RecfileError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for RecfileError {}

impl From<std::io::Error> for RecfileError {
    fn from(err: std::io::Error) -> Self {
        RecfileError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for RecfileError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RecfileError::InvalidEncoding(err.to_string())
    }
}

impl PartialEq for RecfileError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecfileError::NotFound(a), RecfileError::NotFound(b)) => a == b,
            (RecfileError::Record(a), RecfileError::Record(b)) => a == b,
            (RecfileError::InvalidScale(a), RecfileError::InvalidScale(b)) => a == b,
            (RecfileError::InvalidEncoding(a), RecfileError::InvalidEncoding(b)) => a == b,
            (RecfileError::CopyMismatch(a), RecfileError::CopyMismatch(b)) => a == b,
            // For Io errors, compare the messages since std::io::Error doesn't implement PartialEq
            (RecfileError::Io(a), RecfileError::Io(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

pub type RecfileResult<T> = Result<T, RecfileError>;
