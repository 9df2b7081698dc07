//! Result of the compact positional QR grammar

/// Fields extracted by the compact parser
///
/// Serialized names follow the format existing consumers already read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct CompactInfo {
    /// Tag 01
    pub format: String,
    /// Raw value of tag 29 or 30, whichever came last
    pub merchant_account: String,
    /// Tag 54
    pub amount: String,
    /// Suffix of tag 29 after its phone / ID marker
    pub phone_number: String,
    /// Tag 58
    pub country_code: String,
    /// Tag 63
    pub crc: String,
    /// Tag 53
    #[cfg_attr(feature = "serde", serde(rename = "CurrencyISO4217"))]
    pub currency_iso4217: String,
    /// Tag 30 sub-tag 01
    #[cfg_attr(feature = "serde", serde(rename = "BillerID"))]
    pub biller_id: String,
    /// Tag 30 sub-tag 02
    pub ref1: String,
    /// Tag 30 sub-tag 03
    pub ref2: String,
    /// Tag 62 without its first sub-field header
    pub ref3: String,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names() {
        let info = CompactInfo {
            format: "01".to_string(),
            crc: "41C5".to_string(),
            ..CompactInfo::default()
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["Format"], "01");
        assert_eq!(json["Crc"], "41C5");
        assert!(json["CurrencyISO4217"].is_string());
        assert!(json["BillerID"].is_string());
        assert!(json["PhoneNumber"].is_string());
        assert!(json["Ref1"].is_string());
    }
}
