//! CRC-16 Checksum Validation
//!
//! Two checksum strategies exist and are bound to different grammars:
//!
//! - [`ChecksumStrategy::EmvTagged`] (full decoder): the payload must end with
//!   the `6304` CRC field header followed by four hex digits. The checksum
//!   covers everything up to and including that header.
//! - [`ChecksumStrategy::Trailing`] (compact decoder): the last four characters
//!   are the checksum and everything before them is covered. No tag or length
//!   is inspected.
//!
//! Both produce CRC-16/CCITT-FALSE rendered as four uppercase hex digits and
//! compare case-sensitively.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CRC_FIELD_HEADER, CRC_FIELD_LEN, CRC_VALUE_LEN, MIN_COMPACT_PAYLOAD_LEN};
use crate::error::{DecodeError, DecodeResult};

/// CRC-16/CCITT-FALSE generator polynomial
pub const CRC16_POLYNOMIAL: u16 = 0x1021;

/// CRC-16/CCITT-FALSE initial register value
pub const CRC16_INITIAL: u16 = 0xFFFF;

/// Library CRC engine used by the trailing strategy
const CRC16_CCITT_FALSE: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740);

/// Bitwise CRC-16/CCITT-FALSE: no reflection, no final XOR
pub fn calculate_crc16(data: &[u8]) -> u16 {
    let mut crc = CRC16_INITIAL;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC16_POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }

    crc
}

/// Table-driven CRC-16/CCITT-FALSE from the `crc` crate
pub fn calculate_crc16_table(data: &[u8]) -> u16 {
    CRC16_CCITT_FALSE.checksum(data)
}

/// Four uppercase hex digits, zero padded
pub fn format_crc(crc: u16) -> String {
    format!("{:04X}", crc)
}

/// Byte index where the last `count` characters of `input` begin
fn suffix_start(input: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return Some(input.len());
    }
    input.char_indices().rev().nth(count - 1).map(|(index, _)| index)
}

/// How a payload carries its checksum and which part of it is covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumStrategy {
    /// Trailing `6304XXXX` field; covers the payload through `6304`
    EmvTagged,
    /// Last four characters; covers everything before them
    Trailing,
}

impl ChecksumStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmvTagged => "emv-tagged",
            Self::Trailing => "trailing",
        }
    }

    /// Split `input` into covered data and the embedded checksum text
    pub fn split<'a>(&self, input: &'a str) -> DecodeResult<(&'a str, &'a str)> {
        match self {
            Self::EmvTagged => {
                let (header_start, value_start) =
                    match (suffix_start(input, CRC_FIELD_LEN), suffix_start(input, CRC_VALUE_LEN)) {
                        (Some(header_start), Some(value_start)) => (header_start, value_start),
                        _ => {
                            return Err(DecodeError::MisplacedCrc {
                                offset: 0,
                                found: input.to_string(),
                            })
                        }
                    };

                let header = &input[header_start..value_start];
                if header != CRC_FIELD_HEADER {
                    return Err(DecodeError::MisplacedCrc {
                        offset: input[..header_start].chars().count(),
                        found: header.to_string(),
                    });
                }

                Ok((&input[..value_start], &input[value_start..]))
            }
            Self::Trailing => {
                let got = input.chars().count();
                if got < MIN_COMPACT_PAYLOAD_LEN {
                    return Err(DecodeError::too_short(
                        MIN_COMPACT_PAYLOAD_LEN,
                        got,
                        "trailing CRC validation",
                    ));
                }

                let value_start = suffix_start(input, CRC_VALUE_LEN).unwrap_or(0);
                Ok((&input[..value_start], &input[value_start..]))
            }
        }
    }

    /// Checksum of already-split covered data
    pub fn compute(&self, covered: &[u8]) -> u16 {
        match self {
            Self::EmvTagged => calculate_crc16(covered),
            Self::Trailing => calculate_crc16_table(covered),
        }
    }

    /// Verify `input` against an explicitly supplied embedded value
    ///
    /// The full decoder passes the CRC captured from tag 63 here rather than
    /// re-reading the trailing characters.
    pub fn verify_against(&self, input: &str, embedded: &str) -> DecodeResult<()> {
        let (covered, _) = self.split(input)?;
        let calculated = format_crc(self.compute(covered.as_bytes()));

        if calculated != embedded {
            debug!(
                "CRC mismatch ({}): calculated {}, payload carries {}",
                self.name(),
                calculated,
                embedded
            );
            return Err(DecodeError::crc_mismatch(calculated, embedded));
        }

        debug!("CRC {} verified ({})", calculated, self.name());
        Ok(())
    }

    /// Verify `input` against the checksum this strategy locates in it
    pub fn verify(&self, input: &str) -> DecodeResult<()> {
        let (_, embedded) = self.split(input)?;
        self.verify_against(input, embedded)
    }
}

/// Append a valid trailing `6304XXXX` field to `data`
pub fn append_emv_crc(data: &str) -> String {
    let mut payload = String::with_capacity(data.len() + CRC_FIELD_LEN);
    payload.push_str(data);
    payload.push_str(CRC_FIELD_HEADER);
    let crc = calculate_crc16(payload.as_bytes());
    payload.push_str(&format_crc(crc));
    payload
}
