//! Decode errors for EMV QR payload processing
//!
//! Every failure aborts the whole decode; there is no partial result. Errors
//! raised inside a nested template are wrapped in [`DecodeError::Nested`] so
//! the message names the enclosing tag, while [`DecodeError::root_cause`] and
//! [`DecodeError::kind`] still expose what actually went wrong.

use thiserror::Error;

/// QR decoding errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is below the minimum viable length for its grammar
    #[error("QR payload too short: need at least {need} characters, got {got} (context: {context})")]
    TooShort {
        need: usize,
        got: usize,
        context: String,
    },

    /// Two-character length field is not a decimal number
    #[error("Invalid length field {raw:?} at position {offset}: expected two decimal digits")]
    MalformedLength { offset: usize, raw: String },

    /// Declared value length runs past the end of the input
    #[error("Invalid data length for tag {tag} at position {offset}: declared {declared} characters, {available} available")]
    TruncatedValue {
        tag: String,
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// Embedded checksum does not match the computed one
    #[error("Invalid CRC: expected {expected}, got {actual}")]
    CrcValidationFailed { expected: String, actual: String },

    /// CRC tag was captured but is not the trailing `6304XXXX` field
    #[error("CRC tag not found at expected position {offset}: found {found:?}")]
    MisplacedCrc { offset: usize, found: String },

    /// Template nesting exceeds the configured limit
    #[error("Template {tag} nested {depth} levels deep exceeds limit {limit}")]
    NestingTooDeep {
        tag: String,
        depth: usize,
        limit: usize,
    },

    /// Reserved for callers layering additional grammar rules
    #[error("Unsupported grammar: {0}")]
    UnsupportedGrammar(String),

    /// Failure inside the value of a nested template
    ///
    /// Positions carried by `source` count from the start of the template
    /// value, not from the start of the payload.
    #[error("Invalid template at tag {tag}: {source}")]
    Nested {
        tag: String,
        source: Box<DecodeError>,
    },
}

/// Fieldless discriminant of [`DecodeError`], for matching on the cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TooShort,
    MalformedLength,
    TruncatedValue,
    CrcValidationFailed,
    MisplacedCrc,
    NestingTooDeep,
    UnsupportedGrammar,
}

impl DecodeError {
    pub fn too_short(need: usize, got: usize, context: impl Into<String>) -> Self {
        Self::TooShort {
            need,
            got,
            context: context.into(),
        }
    }

    pub fn malformed_length(offset: usize, raw: impl Into<String>) -> Self {
        Self::MalformedLength {
            offset,
            raw: raw.into(),
        }
    }

    pub fn truncated_value(
        tag: impl Into<String>,
        offset: usize,
        declared: usize,
        available: usize,
    ) -> Self {
        Self::TruncatedValue {
            tag: tag.into(),
            offset,
            declared,
            available,
        }
    }

    /// `expected` is computed from the covered data, `actual` is what the
    /// payload carries
    pub fn crc_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::CrcValidationFailed {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Wrap an error raised while tokenizing the value of `tag`
    pub fn nested(tag: impl Into<String>, source: DecodeError) -> Self {
        Self::Nested {
            tag: tag.into(),
            source: Box::new(source),
        }
    }

    /// Innermost error, unwrapping any template nesting
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let Self::Nested { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooShort { .. } => ErrorKind::TooShort,
            Self::MalformedLength { .. } => ErrorKind::MalformedLength,
            Self::TruncatedValue { .. } => ErrorKind::TruncatedValue,
            Self::CrcValidationFailed { .. } => ErrorKind::CrcValidationFailed,
            Self::MisplacedCrc { .. } => ErrorKind::MisplacedCrc,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Self::UnsupportedGrammar(_) => ErrorKind::UnsupportedGrammar,
            Self::Nested { source, .. } => source.kind(),
        }
    }

    /// Tags of the enclosing templates, outermost first
    pub fn tag_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Nested { tag, source } = current {
            path.push(tag.as_str());
            current = source;
        }
        path
    }
}

/// Result type for decode operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
