//! Chunked conversion for inputs that arrive in pieces
//!
//! A chunk boundary may fall between a lead byte and its trail byte. The
//! decoder holds such a lead byte back until the next chunk arrives; the
//! [`Codec`] itself stays stateless.

use crate::codec::{Codec, decode_unit};
use crate::codepoint::CodePoint;
use crate::{Error, MalformedKind, Result};

/// Incremental decoder that tolerates units split across chunks
#[derive(Debug)]
pub struct StreamingDecoder<'a> {
    codec: &'a Codec,
    /// Lead byte held back from the previous chunk
    pending: Option<u8>,
    /// Absolute offset of the first byte not yet decoded
    consumed: usize,
    /// Once set, every further call returns this error
    failed: Option<Error>,
}

impl<'a> StreamingDecoder<'a> {
    /// Create a decoder over `codec`
    pub fn new(codec: &'a Codec) -> Self {
        Self {
            codec,
            pending: None,
            consumed: 0,
            failed: None,
        }
    }

    /// Total bytes fully decoded so far
    pub fn bytes_consumed(&self) -> usize {
        self.consumed
    }

    /// Decode the next chunk
    ///
    /// Error positions count from the start of the stream. After an error the
    /// decoder is unusable and repeats that error.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<CodePoint>> {
        if let Some(ref err) = self.failed {
            return Err(err.clone());
        }

        let mut buffer = Vec::with_capacity(chunk.len() + 1);
        buffer.extend(self.pending.take());
        buffer.extend_from_slice(chunk);

        let table = self.codec.table();
        let mut output = Vec::with_capacity(buffer.len());
        let mut position = 0;

        while position < buffer.len() {
            match decode_unit(table, &buffer, position) {
                Ok((code_point, width)) => {
                    output.push(code_point);
                    position += width;
                }
                Err(MalformedKind::Truncated) => {
                    tracing::trace!(
                        lead = buffer[position],
                        offset = self.consumed + position,
                        "carrying lead byte into next chunk"
                    );
                    self.pending = Some(buffer[position]);
                    break;
                }
                Err(kind) => {
                    let err = Error::MalformedInput {
                        position: self.consumed + position,
                        kind,
                    };
                    self.failed = Some(err.clone());
                    return Err(err);
                }
            }
        }

        self.consumed += position;
        Ok(output)
    }

    /// End the stream, failing if a lead byte is still waiting for its trail
    pub fn finish(self) -> Result<()> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        match self.pending {
            Some(_) => Err(Error::MalformedInput {
                position: self.consumed,
                kind: MalformedKind::Truncated,
            }),
            None => Ok(()),
        }
    }
}

/// Incremental encoder that reports stream-absolute error positions
#[derive(Debug)]
pub struct StreamingEncoder<'a> {
    codec: &'a Codec,
    position: usize,
}

impl<'a> StreamingEncoder<'a> {
    /// Create an encoder over `codec`
    pub fn new(codec: &'a Codec) -> Self {
        Self { codec, position: 0 }
    }

    /// Code points encoded so far
    pub fn chars_consumed(&self) -> usize {
        self.position
    }

    /// Encode the next chunk of code points
    pub fn feed(&mut self, chunk: &[CodePoint]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(chunk.len() * 2);
        self.codec
            .encode_into(chunk.iter().copied(), self.position, &mut output)?;
        self.position += chunk.len();
        Ok(output)
    }

    /// Encode the next chunk of text
    pub fn feed_str(&mut self, chunk: &str) -> Result<Vec<u8>> {
        let code_points: Vec<CodePoint> = chunk.chars().map(CodePoint::from).collect();
        self.feed(&code_points)
    }
}
