//! Scaled decimal values for fixed-layout records.
//!
//! A `ScaledDecimal` pairs a 96-bit unsigned mantissa with a sign bit and a
//! power-of-ten scale, representing `mantissa * 10^(-scale)`, negated when
//! the sign bit is set. The sign and scale travel on the wire as a single
//! packed flags word; `DecimalFlags` keeps that packing behind validated
//! constructors so the scale invariant is enforced at construction.

use crate::errors::{RecfileError, RecfileResult};
use std::fmt;

/// Largest scale a decimal may carry (10^-28).
pub const MAX_SCALE: u8 = 28;

const SIGN_MASK: u32 = 0x8000_0000;
const SCALE_MASK: u32 = 0x00FF_0000;
const SCALE_SHIFT: u32 = 16;
const RESERVED_MASK: u32 = !(SIGN_MASK | SCALE_MASK);

/// Sign and scale metadata of a decimal, packed into one 32-bit word on the
/// wire: sign in bit 31, scale in bits 16..24, all other bits reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalFlags {
    negative: bool,
    scale: u8,
}

impl DecimalFlags {
    /// Create flags, rejecting scales outside `0..=MAX_SCALE`.
    pub fn new(negative: bool, scale: u8) -> RecfileResult<Self> {
        if scale > MAX_SCALE {
            return Err(RecfileError::InvalidScale(scale));
        }
        Ok(Self { negative, scale })
    }

    /// Unpack a wire flags word. Reserved bits must be zero; the scale must
    /// be in range. Both conditions match what the original record producer
    /// enforces, so every accepted word re-packs to itself.
    pub fn from_bits(bits: u32) -> RecfileResult<Self> {
        if bits & RESERVED_MASK != 0 {
            return Err(RecfileError::Record(format!(
                "reserved decimal flag bits set: {bits:#010x}"
            )));
        }
        let scale = ((bits & SCALE_MASK) >> SCALE_SHIFT) as u8;
        Self::new(bits & SIGN_MASK != 0, scale)
    }

    /// Pack into the wire flags word.
    pub fn to_bits(self) -> u32 {
        let mut bits = (self.scale as u32) << SCALE_SHIFT;
        if self.negative {
            bits |= SIGN_MASK;
        }
        bits
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }
}

/// A decimal value with a 96-bit mantissa split into three little-endian
/// 32-bit words, plus packed sign/scale flags. Total wire size is 16 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaledDecimal {
    lo: u32,
    mid: u32,
    hi: u32,
    flags: DecimalFlags,
}

impl ScaledDecimal {
    /// Create a decimal from an unsigned mantissa, sign, and scale.
    ///
    /// # Errors
    /// Fails if the mantissa does not fit in 96 bits or the scale exceeds
    /// [`MAX_SCALE`].
    pub fn new(mantissa: u128, negative: bool, scale: u8) -> RecfileResult<Self> {
        if mantissa >> 96 != 0 {
            return Err(RecfileError::Record(format!(
                "decimal mantissa {mantissa} exceeds 96 bits"
            )));
        }
        Ok(Self {
            lo: mantissa as u32,
            mid: (mantissa >> 32) as u32,
            hi: (mantissa >> 64) as u32,
            flags: DecimalFlags::new(negative, scale)?,
        })
    }

    /// Assemble a decimal from its raw mantissa words and validated flags.
    pub fn from_parts(lo: u32, mid: u32, hi: u32, flags: DecimalFlags) -> Self {
        Self { lo, mid, hi, flags }
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn mid(&self) -> u32 {
        self.mid
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    pub fn flags(&self) -> DecimalFlags {
        self.flags
    }

    /// The full 96-bit mantissa.
    pub fn mantissa(&self) -> u128 {
        ((self.hi as u128) << 64) | ((self.mid as u128) << 32) | self.lo as u128
    }

    pub fn scale(&self) -> u8 {
        self.flags.scale()
    }

    pub fn is_negative(&self) -> bool {
        self.flags.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.lo == 0 && self.mid == 0 && self.hi == 0
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() && !self.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = self.mantissa().to_string();
        let scale = self.scale() as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        // Pad so at least one digit remains before the decimal point.
        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };
        let split = padded.len() - scale;
        write!(f, "{sign}{}.{}", &padded[..split], &padded[split..])
    }
}
