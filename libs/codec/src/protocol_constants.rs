//! Grammar constants for EMVCo merchant-presented QR payloads
//!
//! These values are part of the payload format itself and must stay in sync
//! with every producer of QR text the decoder is expected to read.

/// Characters in a tag identifier
pub const TAG_LEN: usize = 2;

/// Characters in a length field
pub const LENGTH_FIELD_LEN: usize = 2;

/// Characters in a tag + length header
pub const FIELD_HEADER_LEN: usize = TAG_LEN + LENGTH_FIELD_LEN;

/// Largest value length a two-digit length field can declare
pub const MAX_FIELD_VALUE_LEN: usize = 99;

/// Shortest input the full decoder accepts: one field header
pub const MIN_PAYLOAD_LEN: usize = FIELD_HEADER_LEN;

/// Shortest input the compact decoder accepts
pub const MIN_COMPACT_PAYLOAD_LEN: usize = 14;

/// Header of the trailing CRC field: tag 63, length 04
pub const CRC_FIELD_HEADER: &str = "6304";

/// Hex digits in a CRC value
pub const CRC_VALUE_LEN: usize = 4;

/// Characters in the complete trailing CRC field
pub const CRC_FIELD_LEN: usize = CRC_FIELD_HEADER.len() + CRC_VALUE_LEN;

/// Top-level payload plus one level of templates
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 2;

/// Top-level tags
pub mod tags {
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    pub const POINT_OF_INITIATION_METHOD: &str = "01";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const TRANSACTION_CURRENCY: &str = "53";
    pub const TRANSACTION_AMOUNT: &str = "54";
    pub const TIP_OR_CONVENIENCE_INDICATOR: &str = "55";
    pub const VALUE_OF_CONVENIENCE_FEE: &str = "56";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const POSTAL_CODE: &str = "61";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CRC: &str = "63";

    /// Merchant account information templates
    pub const MERCHANT_ACCOUNT_RANGE: std::ops::RangeInclusive<u8> = 2..=51;

    /// Merchant information language templates
    pub const MERCHANT_INFORMATION_RANGE: std::ops::RangeInclusive<u8> = 64..=98;

    /// Accounts preferred as the primary account, in priority order
    pub const PREFERRED_PRIMARY_ACCOUNTS: [&str; 10] =
        ["26", "27", "28", "29", "30", "31", "32", "33", "34", "35"];
}

/// Sub-tags inside a merchant account information template
pub mod merchant_account {
    pub const AID: &str = "00";
    pub const MERCHANT_ID: &str = "01";
    pub const REFERENCE_1: &str = "02";
    pub const REFERENCE_2: &str = "03";
    pub const REFERENCE_3: &str = "04";
}

/// Tags of the compact positional grammar
pub mod compact {
    pub const FORMAT: &str = "01";
    pub const PHONE_ACCOUNT: &str = "29";
    pub const BILLER_ACCOUNT: &str = "30";
    pub const CURRENCY: &str = "53";
    pub const AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CRC: &str = "63";

    /// Sub-tags of the biller account template
    pub const BILLER_ID: &str = "01";
    pub const REF1: &str = "02";
    pub const REF2: &str = "03";

    /// Markers preceding the phone number / national ID inside tag 29,
    /// checked in this order
    pub const PHONE_MARKERS: [&str; 2] = ["011300", "110213"];
}

/// Two-digit numeric value of a tag, if it is two ASCII digits
pub fn tag_number(tag: &str) -> Option<u8> {
    let bytes = tag.as_bytes();
    if bytes.len() != TAG_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
}
