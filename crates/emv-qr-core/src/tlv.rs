//! TLV framing shared by the payload and its nested templates.
//!
//! Every data object is `ID(2 digits) + LEN(2 digits) + VALUE`, where LEN counts
//! the characters of VALUE. The same reader and writer handle the top level,
//! the merchant account template (29) and the additional data template (62).

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag and length digits preceding every value.
pub const HEADER_LEN: usize = 4;
/// Largest length two decimal digits can express.
pub const MAX_VALUE_LEN: usize = 99;
const MAX_TAG: u8 = 99;

/// Framing errors raised while scanning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    #[error("Truncated tag/length header at offset {offset}")]
    TruncatedHeader { offset: usize },

    #[error("Non-numeric tag/length header at offset {offset}")]
    InvalidHeader { offset: usize },

    #[error("Tag {tag:02} at offset {offset} declares {declared} characters, only {available} left")]
    Overrun {
        tag: u8,
        offset: usize,
        declared: usize,
        available: usize,
    },
}

/// Errors raised while writing a field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvWriteError {
    #[error("Value of tag {tag:02} is {length} characters long, at most 99 fit")]
    ValueTooLong { tag: u8, length: usize },

    #[error("Tag id {0} does not fit in two digits")]
    TagOutOfRange(u8),
}

/// Borrowed view of a single framed data object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    pub tag: u8,
    pub value: &'a str,
    /// Byte offset of the tag within the scanned input.
    pub offset: usize,
}

/// Owned data object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlvField {
    pub tag: u8,
    pub value: String,
}

impl TlvField {
    pub fn new(tag: u8, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }
}

impl From<RawField<'_>> for TlvField {
    fn from(raw: RawField<'_>) -> Self {
        Self::new(raw.tag, raw.value)
    }
}

/// Streaming reader over framed data objects.
///
/// Yields fields in the order they appear. The first framing error is yielded
/// once and ends the iteration; the reader never reads past the input.
pub struct TlvReader<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> TlvReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    fn read_field(&mut self) -> Result<RawField<'a>, FramingError> {
        let offset = self.pos;
        let rest = &self.input[offset..];

        let header = rest
            .as_bytes()
            .get(..HEADER_LEN)
            .ok_or(FramingError::TruncatedHeader { offset })?;
        if !header.iter().all(u8::is_ascii_digit) {
            return Err(FramingError::InvalidHeader { offset });
        }

        let tag = (header[0] - b'0') * 10 + (header[1] - b'0');
        let declared = ((header[2] - b'0') * 10 + (header[3] - b'0')) as usize;

        // Header is four ASCII bytes, so this is a char boundary
        let body = &rest[HEADER_LEN..];
        let end = char_offset(body, declared).ok_or_else(|| FramingError::Overrun {
            tag,
            offset,
            declared,
            available: body.chars().count(),
        })?;

        self.pos = offset + HEADER_LEN + end;
        log::trace!("TLV: tag {:02} len {} at {}", tag, declared, offset);

        Ok(RawField {
            tag,
            value: &body[..end],
            offset,
        })
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = Result<RawField<'a>, FramingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        match self.read_field() {
            Ok(field) => Some(Ok(field)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Byte offset just past the first `chars` characters of `s`, if it has that many.
fn char_offset(s: &str, chars: usize) -> Option<usize> {
    s.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()))
        .nth(chars)
}

/// Appends one framed data object to `out`.
pub fn write_field(out: &mut String, tag: u8, value: &str) -> Result<(), TlvWriteError> {
    if tag > MAX_TAG {
        return Err(TlvWriteError::TagOutOfRange(tag));
    }

    let length = value.chars().count();
    if length > MAX_VALUE_LEN {
        return Err(TlvWriteError::ValueTooLong { tag, length });
    }

    // Writing into a String is infallible
    let _ = write!(out, "{:02}{:02}{}", tag, length, value);
    Ok(())
}

/// Frames a sequence of `(tag, value)` pairs into a template string.
pub fn encode_fields<'a, I>(fields: I) -> Result<String, TlvWriteError>
where
    I: IntoIterator<Item = (u8, &'a str)>,
{
    let mut out = String::new();
    for (tag, value) in fields {
        write_field(&mut out, tag, value)?;
    }
    Ok(out)
}

/// Reads a whole template into owned fields.
pub fn decode_fields(input: &str) -> Result<Vec<TlvField>, FramingError> {
    TlvReader::new(input)
        .map(|field| field.map(TlvField::from))
        .collect()
}
