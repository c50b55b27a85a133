//! Value types exchanged by the codec: Unicode code points on one side,
//! short encoded byte sequences on the other.

use std::fmt;

/// Largest value a Unicode code point can take
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One Unicode code point in `0..=0x10FFFF`
///
/// Surrogate values are representable; whether they can be encoded is up to
/// the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// U+FFFD, substituted by lossy decoding
    pub const REPLACEMENT: CodePoint = CodePoint(0xFFFD);

    /// Create a code point, or `None` when `value` is above `0x10FFFF`
    pub const fn new(value: u32) -> Option<Self> {
        if value <= MAX_CODE_POINT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the code point
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The code point as a `char`, unless it is a surrogate
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        Self(ch as u32)
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        CodePoint::new(value).ok_or_else(|| format!("code point 0x{:X} is out of range", value))
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// Encoded form of one code point: a single byte or a lead/trail pair
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSeq {
    bytes: [u8; 2],
    len: u8,
}

impl ByteSeq {
    /// A one-byte sequence
    pub const fn single(byte: u8) -> Self {
        Self {
            bytes: [byte, 0],
            len: 1,
        }
    }

    /// A two-byte sequence
    pub const fn double(lead: u8, trail: u8) -> Self {
        Self {
            bytes: [lead, trail],
            len: 2,
        }
    }

    /// Build from a slice of one or two bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [b] => Some(Self::single(b)),
            [lead, trail] => Some(Self::double(lead, trail)),
            _ => None,
        }
    }

    /// The encoded bytes
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of bytes (1 or 2)
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; present for API symmetry with slices
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for ByteSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSeq({:02X?})", self.as_slice())
    }
}
