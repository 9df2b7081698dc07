//! # TLV Tokenizer - EMV QR Field Splitting
//!
//! ## Purpose
//!
//! Splits QR payload text into ordered tag-length-value fields. Every field is
//! a 2-character tag, a 2-digit decimal length and exactly that many characters
//! of value. The same routine tokenizes the top-level payload and the nested
//! templates carried inside merchant account and additional data values.
//!
//! ## Framing Rules
//!
//! - Positions and lengths count characters, never bytes, so multi-byte
//!   merchant names cannot be split inside a code point
//! - Tokenizing stops when fewer than 4 characters remain; that trailing
//!   fragment is dropped without error
//! - A length field that is not two decimal digits is
//!   [`DecodeError::MalformedLength`]
//! - A declared length running past the end of the input is
//!   [`DecodeError::TruncatedValue`]; nothing is ever read out of bounds
//!
//! ## Zero-Copy Iteration
//!
//! [`TlvReader`] yields [`TlvFieldRef`]s borrowing from the input. Owned
//! [`TlvField`]s are only allocated by the collecting helpers.

use tracing::{debug, trace};
use types::TlvField;

use crate::constants::{FIELD_HEADER_LEN, LENGTH_FIELD_LEN, TAG_LEN};
use crate::error::{DecodeError, DecodeResult};

/// Field borrowed from the tokenized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvFieldRef<'a> {
    pub tag: &'a str,
    pub length: usize,
    pub value: &'a str,
    /// Character position of the tag within the tokenized input
    pub offset: usize,
}

impl<'a> TlvFieldRef<'a> {
    pub fn to_owned_field(&self) -> TlvField {
        TlvField {
            tag: self.tag.to_string(),
            length: self.length,
            value: self.value.to_string(),
        }
    }
}

/// Iterator over the TLV fields of one tokenization level
///
/// Stops after the first error.
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    input: &'a str,
    /// Byte offset of every character, followed by `input.len()`
    boundaries: Vec<usize>,
    position: usize,
    finished: bool,
}

impl<'a> TlvReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::at(input, 0)
    }

    /// Start tokenizing at character position `start`
    pub fn at(input: &'a str, start: usize) -> Self {
        let boundaries = input
            .char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(input.len()))
            .collect();

        Self {
            input,
            boundaries,
            position: start,
            finished: false,
        }
    }

    /// Characters in the input
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Current character position
    pub fn position(&self) -> usize {
        self.position
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[self.boundaries[start]..self.boundaries[end]]
    }

    fn read_field(&mut self) -> Option<DecodeResult<TlvFieldRef<'a>>> {
        let total = self.char_len();
        let remaining = total.saturating_sub(self.position);

        if remaining < FIELD_HEADER_LEN {
            if remaining > 0 {
                debug!(
                    "Dropping {} trailing characters at position {}",
                    remaining, self.position
                );
            }
            return None;
        }

        let offset = self.position;
        let tag = self.slice(offset, offset + TAG_LEN);
        let length_start = offset + TAG_LEN;
        let raw_length = self.slice(length_start, length_start + LENGTH_FIELD_LEN);

        let length = match parse_length(raw_length) {
            Some(length) => length,
            None => return Some(Err(DecodeError::malformed_length(length_start, raw_length))),
        };

        let value_start = offset + FIELD_HEADER_LEN;
        let available = total - value_start;
        if length > available {
            return Some(Err(DecodeError::truncated_value(
                tag,
                value_start,
                length,
                available,
            )));
        }

        let value = self.slice(value_start, value_start + length);
        self.position = value_start + length;

        trace!("TLV field {} at {}: {} characters", tag, offset, length);

        Some(Ok(TlvFieldRef {
            tag,
            length,
            value,
            offset,
        }))
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = DecodeResult<TlvFieldRef<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.read_field();
        if !matches!(item, Some(Ok(_))) {
            self.finished = true;
        }
        item
    }
}

impl std::iter::FusedIterator for TlvReader<'_> {}

/// Two ASCII decimal digits, nothing else
fn parse_length(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    if bytes.len() != LENGTH_FIELD_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(((bytes[0] - b'0') * 10 + (bytes[1] - b'0')) as usize)
}

/// Tokenize a whole string into owned fields
pub fn parse_tlv_fields(input: &str) -> DecodeResult<Vec<TlvField>> {
    parse_tlv_fields_from(input, 0)
}

/// Tokenize from character position `start`
pub fn parse_tlv_fields_from(input: &str, start: usize) -> DecodeResult<Vec<TlvField>> {
    TlvReader::at(input, start)
        .map(|field| field.map(|field| field.to_owned_field()))
        .collect()
}

/// Tokenize the value of template `tag` found at nesting level `depth`
///
/// The top-level payload is depth 1. Errors are wrapped with the enclosing
/// tag so callers can tell which template was malformed.
pub fn parse_nested_fields<'a>(
    tag: &str,
    value: &'a str,
    depth: usize,
    max_depth: usize,
) -> DecodeResult<Vec<TlvFieldRef<'a>>> {
    if depth > max_depth {
        return Err(DecodeError::NestingTooDeep {
            tag: tag.to_string(),
            depth,
            limit: max_depth,
        });
    }

    TlvReader::new(value)
        .collect::<DecodeResult<Vec<_>>>()
        .map_err(|err| DecodeError::nested(tag, err))
}

/// First top-level value for `tag`, without classifying anything
///
/// Returns `None` if the tag is absent or the input is malformed before the
/// tag is reached.
pub fn find_tlv_by_tag<'a>(input: &'a str, tag: &str) -> Option<&'a str> {
    TlvReader::new(input)
        .map_while(Result::ok)
        .find(|field| field.tag == tag)
        .map(|field| field.value)
}

/// Encode fields back to wire text
pub fn encode_tlv_fields(fields: &[TlvField]) -> String {
    fields.iter().map(TlvField::encode).collect()
}
