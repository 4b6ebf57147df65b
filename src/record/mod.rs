//! Fixed-layout binary record codec.
//!
//! A [`Record`] is a 21-byte tuple of a 32-bit signed integer, a 128-bit
//! scaled decimal, and a 1-byte boolean, laid out little-endian with no
//! padding and no header. Files holding records carry no length prefix or
//! version marker; a consumer must know the shape out of band.

pub mod decimal;

pub use decimal::{DecimalFlags, ScaledDecimal, MAX_SCALE};

use crate::errors::{RecfileError, RecfileResult};

/// Wire size of one encoded record: id(4) + decimal(16) + flag(1).
pub const RECORD_SIZE: usize = 21;

/// A fixed-layout record. Transient by design: built right before a write,
/// dropped right after a read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i32,
    pub amount: ScaledDecimal,
    pub active: bool,
}

impl Record {
    pub fn new(id: i32, amount: ScaledDecimal, active: bool) -> Self {
        Self { id, amount, active }
    }

    /// Encode into the fixed 21-byte wire layout.
    ///
    /// Bytes 0..4 hold the id (little-endian two's-complement), 4..16 the
    /// decimal mantissa words lo/mid/hi, 16..20 the packed flags word, and
    /// byte 20 the boolean as 0x01/0x00.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..4].copy_from_slice(&self.id.to_le_bytes());
        buf[4..8].copy_from_slice(&self.amount.lo().to_le_bytes());
        buf[8..12].copy_from_slice(&self.amount.mid().to_le_bytes());
        buf[12..16].copy_from_slice(&self.amount.hi().to_le_bytes());
        buf[16..20].copy_from_slice(&self.amount.flags().to_bits().to_le_bytes());
        buf[20] = self.active as u8;
        buf
    }

    /// Decode a record from the first [`RECORD_SIZE`] bytes of `buf`.
    ///
    /// # Errors
    /// Fails with [`RecfileError::Record`] when fewer than 21 bytes are
    /// available or the decimal flags word carries reserved bits, and with
    /// [`RecfileError::InvalidScale`] when the scale is outside `0..=28`.
    pub fn decode(buf: &[u8]) -> RecfileResult<Self> {
        if buf.len() < RECORD_SIZE {
            return Err(RecfileError::Record(format!(
                "need {RECORD_SIZE} bytes, got {}",
                buf.len()
            )));
        }
        let id = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let lo = read_u32_le(buf, 4);
        let mid = read_u32_le(buf, 8);
        let hi = read_u32_le(buf, 12);
        let flags = DecimalFlags::from_bits(read_u32_le(buf, 16))?;
        Ok(Self {
            id,
            amount: ScaledDecimal::from_parts(lo, mid, hi, flags),
            // Any nonzero byte reads as true, matching the producer.
            active: buf[20] != 0,
        })
    }
}

fn read_u32_le(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}
