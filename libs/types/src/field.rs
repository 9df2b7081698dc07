//! Tag-Length-Value triplet as it appears on the wire

use std::fmt;

/// One tag-length-value triplet read from a QR payload
///
/// `length` always equals the number of characters in `value`; the tokenizer
/// only emits fields whose declared length was fully available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlvField {
    /// Two-character tag identifier, normally two ASCII digits
    pub tag: String,
    /// Declared length, 0-99
    pub length: usize,
    /// Value text, exactly `length` characters
    pub value: String,
}

impl TlvField {
    /// Build a field, deriving the length from the value's character count
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            tag: tag.into(),
            length: value.chars().count(),
            value,
        }
    }

    /// Re-encode as `tag + LL + value`
    pub fn encode(&self) -> String {
        format!("{}{:02}{}", self.tag, self.length, self.value)
    }

    /// Number of characters this field occupies on the wire
    pub fn encoded_len(&self) -> usize {
        4 + self.length
    }
}

impl fmt::Display for TlvField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}) {}", self.tag, self.length, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_characters() {
        let field = TlvField::new("59", "ร้านค้า");
        assert_eq!(field.length, 7);
        assert_eq!(field.encoded_len(), 11);
    }

    #[test]
    fn test_encode_zero_pads_length() {
        assert_eq!(TlvField::new("58", "TH").encode(), "5802TH");
        assert_eq!(TlvField::new("62", "").encode(), "6200");
    }

    #[test]
    fn test_display() {
        let field = TlvField::new("54", "1000.88");
        assert_eq!(field.to_string(), "[54] (7) 1000.88");
    }
}
