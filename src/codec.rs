//! Strict encoder/decoder over a [`MappingTable`]
//!
//! The codec carries no mutable state: every call is a pure function of the
//! table and its input, so a single [`Codec`] can be shared across threads.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use crate::codepoint::{ByteSeq, CodePoint};
use crate::mapping::{ByteClass, MappingTable, TableError};
use crate::{Error, MalformedKind, Result};

/// What a lossy call does with input the table cannot represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodingErrorAction {
    /// Fail the whole call (same as the strict API)
    #[default]
    Report,
    /// Substitute a replacement and continue
    Replace,
    /// Drop the offending unit and continue
    Ignore,
}

/// Encoder/decoder for one legacy double-byte code page
#[derive(Debug, Clone)]
pub struct Codec {
    table: MappingTable,
}

static WINDOWS_950: OnceLock<std::result::Result<Codec, TableError>> = OnceLock::new();

impl Codec {
    /// Wrap an already validated mapping table
    pub fn from_table(table: MappingTable) -> Self {
        Self { table }
    }

    /// Shared x-windows-950 codec, built on first use
    pub fn windows_950() -> Result<&'static Codec> {
        WINDOWS_950
            .get_or_init(|| MappingTable::windows_950().map(Codec::from_table))
            .as_ref()
            .map_err(|e| Error::InvalidTable(e.clone()))
    }

    /// Underlying mapping table
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Canonical charset name
    pub fn name(&self) -> &str {
        self.table.name()
    }

    /// Alternative charset names
    pub fn aliases(&self) -> &[String] {
        self.table.aliases()
    }

    /// True if `name` is the canonical name or an alias
    ///
    /// Comparison ignores ASCII case and treats `_` and `-` alike.
    pub fn matches_name(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        std::iter::once(self.name())
            .chain(self.aliases().iter().map(String::as_str))
            .any(|candidate| normalize_name(candidate) == wanted)
    }

    /// Number of characters the code page can represent
    pub fn repertoire_len(&self) -> usize {
        self.table.len()
    }

    /// Byte values that start two-byte sequences, as inclusive ranges
    pub fn lead_bytes(&self) -> Vec<RangeInclusive<u8>> {
        self.table.byte_ranges(ByteClass::Lead)
    }

    /// True if `code_point` has an encoding
    pub fn can_encode(&self, code_point: CodePoint) -> bool {
        self.table.lookup(code_point).is_some()
    }

    /// Encode code points in order
    ///
    /// Fails on the first code point without a table entry; no partial output
    /// is returned.
    pub fn encode(&self, text: &[CodePoint]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(text.len() * 2);
        self.encode_into(text.iter().copied(), 0, &mut output)?;
        Ok(output)
    }

    /// Encode a string; error positions are character indices
    pub fn encode_str(&self, text: &str) -> Result<Vec<u8>> {
        self.encode_chars(text.chars())
    }

    /// Encode a sequence of `char`s
    pub fn encode_chars<I>(&self, chars: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut output = Vec::new();
        self.encode_into(chars.into_iter().map(CodePoint::from), 0, &mut output)?;
        Ok(output)
    }

    /// Number of bytes `encode` would produce
    pub fn encoded_len(&self, text: &[CodePoint]) -> Result<usize> {
        text.iter().enumerate().try_fold(0, |total, (position, &code_point)| {
            self.lookup(code_point, position).map(|seq| total + seq.len())
        })
    }

    /// Append the encoding of `text` to `output`
    ///
    /// `base` is added to error positions. On failure `output` is restored to
    /// its original length.
    pub(crate) fn encode_into<I>(&self, text: I, base: usize, output: &mut Vec<u8>) -> Result<()>
    where
        I: IntoIterator<Item = CodePoint>,
    {
        let start = output.len();
        for (offset, code_point) in text.into_iter().enumerate() {
            match self.lookup(code_point, base + offset) {
                Ok(seq) => output.extend_from_slice(seq.as_slice()),
                Err(e) => {
                    output.truncate(start);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Encode, applying `action` to unmappable code points
    ///
    /// With [`CodingErrorAction::Replace`], `replacement` is written in place
    /// of each unmappable code point; it must itself decode under this table.
    pub fn encode_with(
        &self,
        text: &[CodePoint],
        action: CodingErrorAction,
        replacement: &[u8],
    ) -> Result<Vec<u8>> {
        if action == CodingErrorAction::Report {
            return self.encode(text);
        }
        if action == CodingErrorAction::Replace
            && (replacement.is_empty() || self.decode_to_vec(replacement).is_err())
        {
            return Err(Error::InvalidReplacement(replacement.to_vec()));
        }

        let mut output = Vec::with_capacity(text.len() * 2);
        for &code_point in text {
            match self.table.lookup(code_point) {
                Some(seq) => output.extend_from_slice(seq.as_slice()),
                None if action == CodingErrorAction::Replace => {
                    output.extend_from_slice(replacement)
                }
                None => {}
            }
        }
        Ok(output)
    }

    /// Lazily decode `bytes`
    ///
    /// The returned iterator yields one item per encoded unit and stops after
    /// the first error.
    pub fn decode<'a>(&'a self, bytes: &'a [u8]) -> Decoder<'a> {
        Decoder {
            table: &self.table,
            input: bytes,
            position: 0,
            failed: false,
        }
    }

    /// Decode all of `bytes`, failing atomically
    pub fn decode_to_vec(&self, bytes: &[u8]) -> Result<Vec<CodePoint>> {
        self.decode(bytes).collect()
    }

    /// Decode all of `bytes` into a `String`
    ///
    /// Fails with [`MalformedKind::Surrogate`] if the table maps a unit to a
    /// surrogate code point.
    pub fn decode_to_string(&self, bytes: &[u8]) -> Result<String> {
        let mut output = String::with_capacity(bytes.len());
        let mut decoder = self.decode(bytes);
        loop {
            let position = decoder.position();
            match decoder.next() {
                None => return Ok(output),
                Some(item) => {
                    let ch = item?.to_char().ok_or(Error::MalformedInput {
                        position,
                        kind: MalformedKind::Surrogate,
                    })?;
                    output.push(ch);
                }
            }
        }
    }

    /// Decode, applying `action` to malformed units
    ///
    /// Recovery skips a single byte past the offending position, so a bad
    /// lead byte does not swallow the byte after it.
    pub fn decode_with(&self, bytes: &[u8], action: CodingErrorAction) -> Result<Vec<CodePoint>> {
        if action == CodingErrorAction::Report {
            return self.decode_to_vec(bytes);
        }

        let mut output = Vec::with_capacity(bytes.len());
        let mut position = 0;
        while position < bytes.len() {
            match decode_unit(&self.table, bytes, position) {
                Ok((code_point, width)) => {
                    output.push(code_point);
                    position += width;
                }
                Err(_) => {
                    if action == CodingErrorAction::Replace {
                        output.push(CodePoint::REPLACEMENT);
                    }
                    position += 1;
                }
            }
        }
        Ok(output)
    }

    /// Decode into a `String`, applying `action` to malformed units
    ///
    /// Units that decode to surrogate code points count as malformed: they
    /// fail under [`CodingErrorAction::Report`], become U+FFFD under
    /// [`CodingErrorAction::Replace`] and are dropped under
    /// [`CodingErrorAction::Ignore`].
    pub fn decode_to_string_with(&self, bytes: &[u8], action: CodingErrorAction) -> Result<String> {
        if action == CodingErrorAction::Report {
            return self.decode_to_string(bytes);
        }

        let code_points = self.decode_with(bytes, action)?;
        let text = code_points
            .into_iter()
            .filter_map(|cp| match cp.to_char() {
                Some(ch) => Some(ch),
                None if action == CodingErrorAction::Replace => Some(char::REPLACEMENT_CHARACTER),
                None => None,
            })
            .collect();
        Ok(text)
    }

    fn lookup(&self, code_point: CodePoint, position: usize) -> Result<ByteSeq> {
        self.table
            .lookup(code_point)
            .ok_or(Error::UnmappableCharacter {
                code_point,
                position,
            })
    }
}

/// Lazy decoding iterator returned by [`Codec::decode`]
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    table: &'a MappingTable,
    input: &'a [u8],
    position: usize,
    failed: bool,
}

impl Decoder<'_> {
    /// Byte offset of the next unit to decode
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &[u8] {
        &self.input[self.position..]
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<CodePoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.input.len() {
            return None;
        }

        match decode_unit(self.table, self.input, self.position) {
            Ok((code_point, width)) => {
                self.position += width;
                Some(Ok(code_point))
            }
            Err(kind) => {
                self.failed = true;
                Some(Err(Error::MalformedInput {
                    position: self.position,
                    kind,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // The first malformed unit ends iteration, so only one item is certain
        let remaining = self.input.len() - self.position;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decode the unit starting at `position`, returning it and its byte width
pub(crate) fn decode_unit(
    table: &MappingTable,
    input: &[u8],
    position: usize,
) -> std::result::Result<(CodePoint, usize), MalformedKind> {
    let byte = input[position];
    match table.class(byte) {
        ByteClass::Single => table
            .single(byte)
            .map(|cp| (cp, 1))
            .ok_or(MalformedKind::Unmapped),
        ByteClass::Lead => {
            let trail = *input.get(position + 1).ok_or(MalformedKind::Truncated)?;
            table
                .double(byte, trail)
                .map(|cp| (cp, 2))
                .ok_or(MalformedKind::Unmapped)
        }
        ByteClass::Unused => Err(MalformedKind::Unmapped),
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
        .collect()
}
