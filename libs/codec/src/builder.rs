//! # QR Payload Builder
//!
//! ## Purpose
//!
//! Composes EMV QR payload text field by field, the inverse of the decoder.
//! Used to produce fixtures and to re-emit payloads after inspection.
//!
//! ## Architecture
//!
//! ```text
//! fields/templates → [QrPayloadBuilder] → "TTLLvalue..." → append_emv_crc → QR text
//! ```
//!
//! Validation errors are deferred: the first invalid field is remembered and
//! returned by [`QrPayloadBuilder::build`] so calls can be chained.

use thiserror::Error;
use types::TlvField;

use crate::constants::{tags, MAX_FIELD_VALUE_LEN, TAG_LEN};
use crate::validation::append_emv_crc;

/// Payload construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Tag is not exactly two ASCII alphanumeric characters
    #[error("Invalid tag {0:?}: expected two ASCII alphanumeric characters")]
    InvalidTag(String),

    /// Value does not fit the two-digit length field
    #[error("Value for tag {tag} is {length} characters, maximum is {max}")]
    ValueTooLong {
        tag: String,
        length: usize,
        max: usize,
    },

    /// CRC field added by hand to a builder that appends its own
    #[error("Tag 63 is reserved for the generated CRC")]
    ExplicitCrc,
}

/// Chained builder for EMV QR payload text
#[derive(Debug, Clone, Default)]
pub struct QrPayloadBuilder {
    fields: Vec<TlvField>,
    error: Option<BuildError>,
}

impl QrPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scalar field
    pub fn add_field(mut self, tag: &str, value: &str) -> Self {
        if self.error.is_none() {
            match validate(tag, value) {
                Ok(()) => self.fields.push(TlvField::new(tag, value)),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Append a template whose value is the encoded content of `template`
    pub fn add_template(mut self, tag: &str, template: QrPayloadBuilder) -> Self {
        if self.error.is_none() {
            match template.build() {
                Ok(value) => return self.add_field(tag, &value),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Encoded length in characters, excluding any CRC
    pub fn payload_len(&self) -> usize {
        self.fields.iter().map(TlvField::encoded_len).sum()
    }

    /// Encoded fields without a CRC
    pub fn build(self) -> Result<String, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(self.fields.iter().map(TlvField::encode).collect())
    }

    /// Encoded fields followed by a valid `6304XXXX` field
    pub fn build_with_crc(self) -> Result<String, BuildError> {
        if self.fields.iter().any(|field| field.tag == tags::CRC) {
            return Err(BuildError::ExplicitCrc);
        }
        let data = self.build()?;
        Ok(append_emv_crc(&data))
    }
}

fn validate(tag: &str, value: &str) -> Result<(), BuildError> {
    if tag.len() != TAG_LEN || !tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(BuildError::InvalidTag(tag.to_string()));
    }

    let length = value.chars().count();
    if length > MAX_FIELD_VALUE_LEN {
        return Err(BuildError::ValueTooLong {
            tag: tag.to_string(),
            length,
            max: MAX_FIELD_VALUE_LEN,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_payload_building() {
        let payload = QrPayloadBuilder::new()
            .add_field("00", "01")
            .add_field("01", "12")
            .add_field("58", "TH")
            .build()
            .unwrap();

        assert_eq!(payload, "0002010102125802TH");
    }

    #[test]
    fn test_template_encoding() {
        let account = QrPayloadBuilder::new()
            .add_field("00", "A000000677010111")
            .add_field("02", "0245564003096");

        let payload = QrPayloadBuilder::new()
            .add_field("00", "01")
            .add_field("01", "12")
            .add_template("29", account)
            .add_field("58", "TH")
            .add_field("53", "764")
            .add_field("54", "1000.88")
            .build_with_crc()
            .unwrap();

        assert_eq!(
            payload,
            "00020101021229370016A000000677010111021302455640030965802TH530376454071000.886304713E"
        );
    }

    #[test]
    fn test_first_error_is_reported() {
        let err = QrPayloadBuilder::new()
            .add_field("0", "01")
            .add_field("01", &"x".repeat(100))
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::InvalidTag("0".to_string()));
    }

    #[test]
    fn test_value_too_long() {
        let err = QrPayloadBuilder::new()
            .add_field("59", &"x".repeat(100))
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::ValueTooLong { length: 100, .. }));
    }

    #[test]
    fn test_explicit_crc_rejected() {
        let err = QrPayloadBuilder::new()
            .add_field("63", "ABCD")
            .build_with_crc()
            .unwrap_err();
        assert_eq!(err, BuildError::ExplicitCrc);
    }

    #[test]
    fn test_length_counts_characters() {
        let builder = QrPayloadBuilder::new().add_field("59", "ร้าน");
        assert_eq!(builder.payload_len(), 8);
        assert_eq!(builder.build().unwrap(), "5904ร้าน");
    }
}
