//! Immutable code point <-> byte sequence mapping tables
//!
//! A [`MappingTable`] owns both lookup directions plus a per-byte
//! classification derived from its own entries. Nothing about the byte layout
//! of a code page is hard-coded here: a byte is a lead byte only because some
//! two-byte entry starts with it.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codepoint::{ByteSeq, CodePoint};

/// Reverse-table slot value meaning "no entry"
const NO_ENTRY: u32 = u32::MAX;

/// Defects found while building a mapping table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two entries share a code point
    #[error("code point {0} is mapped more than once")]
    DuplicateCodePoint(CodePoint),
    /// Two entries share a byte sequence
    #[error("byte sequence {0:02X?} is mapped more than once")]
    DuplicateSequence(Vec<u8>),
    /// An entry's byte sequence is empty or longer than two bytes
    #[error("entry for 0x{code_point:X} has {len} bytes, expected 1 or 2")]
    BadSequenceLength {
        /// Code point of the offending entry
        code_point: u32,
        /// Length that was supplied
        len: usize,
    },
    /// An entry's code point is above U+10FFFF
    #[error("code point 0x{0:X} is out of range")]
    CodePointOutOfRange(u32),
    /// A byte is both a complete one-byte entry and the lead of a two-byte entry
    #[error("byte 0x{0:02X} is used both as a single-byte character and as a lead byte")]
    ByteClassConflict(u8),
    /// The table description could not be parsed
    #[error("malformed table description: {0}")]
    Parse(String),
}

/// Role a byte value plays at the start of an encoded unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteClass {
    /// No entry starts with this byte
    #[default]
    Unused,
    /// The byte is a complete one-byte character
    Single,
    /// The byte starts a two-byte character
    Lead,
}

/// Serializable description of a mapping table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Canonical charset name
    pub name: String,
    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<String>,
    /// `(code point, encoded bytes)` pairs
    pub entries: Vec<(u32, Vec<u8>)>,
}

/// Bijective code point <-> byte sequence table with derived byte classes
#[derive(Clone)]
pub struct MappingTable {
    name: String,
    aliases: Vec<String>,
    /// Sorted by code point
    forward: Vec<(CodePoint, ByteSeq)>,
    singles: [Option<CodePoint>; 256],
    /// Indexed by `lead << 8 | trail`
    doubles: Box<[u32]>,
    classes: [ByteClass; 256],
}

impl MappingTable {
    /// Build a table from `(code point, bytes)` entries
    ///
    /// Fails on duplicate code points or sequences, sequences that are not one
    /// or two bytes long, out-of-range code points, and bytes that would be
    /// both single characters and lead bytes.
    pub fn new<I, B>(
        name: impl Into<String>,
        aliases: Vec<String>,
        entries: I,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u32, B)>,
        B: AsRef<[u8]>,
    {
        let mut forward = Vec::new();
        let mut singles = [None; 256];
        let mut doubles = vec![NO_ENTRY; 1 << 16].into_boxed_slice();
        let mut classes = [ByteClass::Unused; 256];

        for (value, bytes) in entries {
            let bytes = bytes.as_ref();
            let code_point =
                CodePoint::new(value).ok_or(TableError::CodePointOutOfRange(value))?;
            let seq = ByteSeq::from_slice(bytes).ok_or(TableError::BadSequenceLength {
                code_point: value,
                len: bytes.len(),
            })?;

            match *seq.as_slice() {
                [byte] => {
                    if classes[byte as usize] == ByteClass::Lead {
                        return Err(TableError::ByteClassConflict(byte));
                    }
                    classes[byte as usize] = ByteClass::Single;
                    if singles[byte as usize].replace(code_point).is_some() {
                        return Err(TableError::DuplicateSequence(bytes.to_vec()));
                    }
                }
                [lead, trail] => {
                    if classes[lead as usize] == ByteClass::Single {
                        return Err(TableError::ByteClassConflict(lead));
                    }
                    classes[lead as usize] = ByteClass::Lead;
                    let slot = &mut doubles[double_index(lead, trail)];
                    if *slot != NO_ENTRY {
                        return Err(TableError::DuplicateSequence(bytes.to_vec()));
                    }
                    *slot = code_point.value();
                }
                _ => unreachable!("ByteSeq holds one or two bytes"),
            }

            forward.push((code_point, seq));
        }

        forward.sort_unstable_by_key(|&(cp, _)| cp);
        if let Some(pair) = forward.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(TableError::DuplicateCodePoint(pair[0].0));
        }

        let name = name.into();
        tracing::debug!(
            charset = %name,
            entries = forward.len(),
            lead_bytes = classes.iter().filter(|&&c| c == ByteClass::Lead).count(),
            "built mapping table"
        );

        Ok(Self {
            name,
            aliases,
            forward,
            singles,
            doubles,
            classes,
        })
    }

    /// The built-in x-windows-950 table
    pub fn windows_950() -> Result<Self, TableError> {
        Self::new(
            "x-windows-950",
            ["windows-950", "cp950", "ms950", "x-ms950"]
                .iter()
                .map(|alias| alias.to_string())
                .collect(),
            crate::tables::WINDOWS_950.iter().copied(),
        )
    }

    /// Build a table from a [`TableSpec`]
    pub fn from_spec(spec: TableSpec) -> Result<Self, TableError> {
        Self::new(spec.name, spec.aliases, spec.entries)
    }

    /// Parse a JSON table description
    ///
    /// ```json
    /// { "name": "x-example", "aliases": ["ex"], "entries": [[65, [65]], [19968, [164, 64]]] }
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let spec: TableSpec =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_spec(spec)
    }

    /// Export the table as a [`TableSpec`], entries sorted by code point
    pub fn to_spec(&self) -> TableSpec {
        TableSpec {
            name: self.name.clone(),
            aliases: self.aliases.clone(),
            entries: self
                .forward
                .iter()
                .map(|(cp, seq)| (cp.value(), seq.as_slice().to_vec()))
                .collect(),
        }
    }

    /// Canonical charset name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative charset names
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Encoded form of `code_point`, if the table has one
    #[inline]
    pub fn lookup(&self, code_point: CodePoint) -> Option<ByteSeq> {
        self.forward
            .binary_search_by_key(&code_point, |&(cp, _)| cp)
            .ok()
            .map(|idx| self.forward[idx].1)
    }

    /// Role of `byte` at the start of an encoded unit
    #[inline]
    pub fn class(&self, byte: u8) -> ByteClass {
        self.classes[byte as usize]
    }

    /// Code point for a one-byte sequence
    #[inline]
    pub fn single(&self, byte: u8) -> Option<CodePoint> {
        self.singles[byte as usize]
    }

    /// Code point for a two-byte sequence
    #[inline]
    pub fn double(&self, lead: u8, trail: u8) -> Option<CodePoint> {
        match self.doubles[double_index(lead, trail)] {
            NO_ENTRY => None,
            value => CodePoint::new(value),
        }
    }

    /// All entries in code point order
    pub fn entries(&self) -> impl Iterator<Item = (CodePoint, ByteSeq)> + '_ {
        self.forward.iter().copied()
    }

    /// Contiguous runs of byte values with the given class
    pub fn byte_ranges(&self, class: ByteClass) -> Vec<RangeInclusive<u8>> {
        let mut ranges = Vec::new();
        let mut start: Option<u8> = None;

        for byte in 0..=u8::MAX {
            let hit = self.class(byte) == class;
            match (start, hit) {
                (None, true) => start = Some(byte),
                (Some(first), false) => {
                    ranges.push(first..=byte - 1);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(first) = start {
            ranges.push(first..=u8::MAX);
        }

        ranges
    }
}

impl fmt::Debug for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingTable")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("entries", &self.forward.len())
            .field("lead_bytes", &self.byte_ranges(ByteClass::Lead))
            .finish()
    }
}

#[inline]
fn double_index(lead: u8, trail: u8) -> usize {
    ((lead as usize) << 8) | trail as usize
}
