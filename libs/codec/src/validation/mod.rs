//! # Payload Validation
//!
//! ## Purpose
//!
//! Integrity checks and decoder policy for QR payloads.
//!
//! ```text
//! QR text → Tokenizer → Classifier → DecodedPayload
//!                                        ↓
//!                      ChecksumStrategy::EmvTagged (if tag 63 present)
//!
//! QR text → ChecksumStrategy::Trailing → Tokenizer → CompactInfo
//! ```

pub mod checksum;
pub mod config;

pub use checksum::{
    append_emv_crc, calculate_crc16, calculate_crc16_table, format_crc, ChecksumStrategy,
    CRC16_INITIAL, CRC16_POLYNOMIAL,
};
pub use config::DecoderConfig;
