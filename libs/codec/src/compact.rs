//! # Compact QR Decoder
//!
//! Positional grammar used by bill-payment and transfer QR codes that only
//! need a handful of fields. The whole string is checksummed with
//! [`ChecksumStrategy::Trailing`] before any field is read, then the shared
//! tokenizer walks the top level and picks out:
//!
//! | Tag | Field |
//! |---|---|
//! | 01 | format |
//! | 29 | merchant account, phone number after the `011300` / `110213` marker |
//! | 30 | merchant account, biller ID and references 1-2 from sub-tags 01-03 |
//! | 53 | ISO 4217 currency |
//! | 54 | amount |
//! | 58 | country code |
//! | 62 | reference 3: the value minus its first sub-field header |
//! | 63 | CRC |
//!
//! Every other tag is ignored.

use tracing::{debug, trace};
use types::CompactInfo;

use crate::constants::{compact, FIELD_HEADER_LEN};
use crate::error::DecodeResult;
use crate::parser::{parse_nested_fields, TlvReader};
use crate::validation::{ChecksumStrategy, DecoderConfig};

/// Decode a compact QR string with the default configuration
pub fn parse_compact(qr: &str) -> DecodeResult<CompactInfo> {
    parse_compact_with(qr, &DecoderConfig::default())
}

/// Decode a compact QR string
///
/// With `enforce_crc` disabled the minimum length is still checked but the
/// trailing checksum is not compared.
pub fn parse_compact_with(qr: &str, config: &DecoderConfig) -> DecodeResult<CompactInfo> {
    if config.enforce_crc {
        ChecksumStrategy::Trailing.verify(qr)?;
    } else {
        ChecksumStrategy::Trailing.split(qr)?;
    }

    let mut info = CompactInfo::default();

    for field in TlvReader::new(qr) {
        let field = field?;
        trace!("Compact tag {} ({} characters)", field.tag, field.length);

        match field.tag {
            compact::FORMAT => info.format = field.value.to_string(),
            compact::PHONE_ACCOUNT => {
                info.merchant_account = field.value.to_string();
                if let Some(phone) = phone_number(field.value) {
                    info.phone_number = phone.to_string();
                }
            }
            compact::BILLER_ACCOUNT => {
                info.merchant_account = field.value.to_string();
                for sub in parse_nested_fields(field.tag, field.value, 2, config.max_nesting_depth)? {
                    match sub.tag {
                        compact::BILLER_ID => info.biller_id = sub.value.to_string(),
                        compact::REF1 => info.ref1 = sub.value.to_string(),
                        compact::REF2 => info.ref2 = sub.value.to_string(),
                        _ => {}
                    }
                }
            }
            compact::CURRENCY => info.currency_iso4217 = field.value.to_string(),
            compact::AMOUNT => info.amount = field.value.to_string(),
            compact::COUNTRY_CODE => info.country_code = field.value.to_string(),
            compact::ADDITIONAL_DATA => {
                if field.length > FIELD_HEADER_LEN {
                    info.ref3 = field.value.chars().skip(FIELD_HEADER_LEN).collect();
                }
            }
            compact::CRC => info.crc = field.value.to_string(),
            _ => {}
        }
    }

    debug!("Compact payload decoded (format {:?})", info.format);
    Ok(info)
}

/// Suffix after the first phone marker that occurs in `value`
fn phone_number(value: &str) -> Option<&str> {
    compact::PHONE_MARKERS.iter().find_map(|marker| {
        value
            .find(marker)
            .map(|index| &value[index + marker.len()..])
    })
}
