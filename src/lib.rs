//! # DbcsEncode - Table-Driven Double-Byte Code Page Codec
//!
//! A strict encoder/decoder between Unicode code points and a legacy CJK
//! double-byte code page (x-windows-950, Microsoft's Big5 variant).
//!
//! ## Features
//!
//! - **Table-driven scanning**: which bytes start two-byte units is derived
//!   from the mapping table, never from a fixed byte range
//! - **Strict by default**: unmappable characters and malformed bytes are
//!   reported with their position, and no partial output is returned
//! - **Caller-chosen recovery** via [`CodingErrorAction`]
//! - **Streaming support** for input that arrives in chunks
//! - **Thread-safe**: a [`Codec`] is immutable after construction
//!
//! ## Quick Start
//!
//! ```rust
//! use dbcs_encode::Codec;
//!
//! let codec = Codec::windows_950().unwrap();
//!
//! let bytes = codec.encode_str("A一€").unwrap();
//! assert_eq!(bytes, [0x41, 0xA4, 0x40, 0xA3, 0xE1]);
//!
//! let text = codec.decode_to_string(&bytes).unwrap();
//! assert_eq!(text, "A一€");
//! ```

#![deny(missing_docs)]

use thiserror::Error;

mod codec;
mod codepoint;
mod mapping;
mod streaming;
mod tables;

pub use codec::{Codec, CodingErrorAction, Decoder};
pub use codepoint::{ByteSeq, CodePoint, MAX_CODE_POINT};
pub use mapping::{ByteClass, MappingTable, TableError, TableSpec};
pub use streaming::{StreamingDecoder, StreamingEncoder};

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during encoding and decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Code point has no entry in the mapping table
    #[error("cannot encode {code_point} at position {position}")]
    UnmappableCharacter {
        /// The unmappable code point
        code_point: CodePoint,
        /// Index of the code point in the input
        position: usize,
    },
    /// Byte input does not form a valid sequence
    #[error("malformed input at byte {position}: {kind}")]
    MalformedInput {
        /// Byte offset where scanning failed
        position: usize,
        /// What was wrong at that offset
        kind: MalformedKind,
    },
    /// The mapping table is inconsistent
    #[error("invalid mapping table: {0}")]
    InvalidTable(#[from] TableError),
    /// Replacement bytes are not themselves valid in the code page
    #[error("replacement {0:02X?} is not a valid sequence in this charset")]
    InvalidReplacement(Vec<u8>),
    /// No codec is registered under the requested name
    #[error("unknown charset: {0}")]
    UnknownCharset(String),
}

/// Reason a byte sequence failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedKind {
    /// Lead byte at end of input with no trail byte
    #[error("lead byte without trail byte")]
    Truncated,
    /// Byte or byte pair has no table entry
    #[error("no mapping for byte sequence")]
    Unmapped,
    /// Unit maps to a surrogate code point, which a `String` cannot hold
    #[error("sequence decodes to a surrogate code point")]
    Surrogate,
}

/// Canonical names of the built-in charsets
pub fn available_charsets() -> Vec<&'static str> {
    vec!["x-windows-950"]
}

/// Look up a built-in codec by canonical name or alias
///
/// Matching ignores ASCII case and treats `_` and `-` alike.
pub fn codec_for_name(name: &str) -> Result<&'static Codec> {
    let codec = Codec::windows_950()?;
    if codec.matches_name(name) {
        Ok(codec)
    } else {
        Err(Error::UnknownCharset(name.to_string()))
    }
}
