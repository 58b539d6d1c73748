//! Integer widths, for choosing the codec's width at run time.

use crate::{uint, Error, ErrorKind};
use std::convert::TryFrom;
use std::fmt;

/// The bit width of an unsigned integer handled by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 8 bits, one byte.
    W8,
    /// 16 bits, two bytes.
    W16,
    /// 32 bits, four bytes.
    W32,
    /// 64 bits, eight bytes.
    W64,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// The number of bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// The number of bytes in an encoding of this width.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// The largest value representable in this width.
    pub const fn max_value(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }

    /// Decodes a value of this width from the trailing bytes of `bytes`.
    ///
    /// Behaves like [`decode`](crate::decode) for the matching integer type. Only
    /// [`bytes`](Self::bytes) bytes are read, so the result never exceeds
    /// [`max_value`](Self::max_value).
    ///
    /// ```
    /// use bigend::Width;
    ///
    /// assert_eq!(Width::W16.decode(&[0xff, 0xab, 0xcd]), 0xabcd);
    /// assert_eq!(Width::W32.decode(&[0x0f]), 0x0f);
    /// ```
    pub fn decode(self, bytes: &[u8]) -> u64 {
        uint::accumulate(bytes, self.bytes())
    }

    /// Encodes `value`, narrowed to this width, as exactly [`bytes`](Self::bytes) bytes.
    ///
    /// ```
    /// use bigend::Width;
    ///
    /// assert_eq!(Width::W16.encode(0xabcd), [0xab, 0xcd]);
    /// assert_eq!(Width::W16.encode(0x1_abcd), [0xab, 0xcd]);
    /// ```
    pub fn encode(self, value: u64) -> Vec<u8> {
        uint::split(value & self.max_value(), self.bytes())
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    /// Looks up the width with the given number of bits.
    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            _ => Err(Error::new(ErrorKind::UnsupportedWidth(bits))),
        }
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.bits()
    }
}

impl Default for Width {
    /// (64 bits) The widest integer the codec accumulates into.
    fn default() -> Self {
        Self::W64
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}
