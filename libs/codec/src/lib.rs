//! # EMV QR Codec - Decoding and Validation Rules
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer for merchant-presented payment QR
//! codes:
//! - TLV tokenizing of payload text, recursively for templates
//! - CRC-16/CCITT-FALSE validation, in the tagged and trailing variants
//! - Field classification into [`types::DecodedPayload`]
//! - The compact positional grammar ([`parse_compact`])
//! - Primary-account projection ([`project`])
//! - Payload construction ([`QrPayloadBuilder`])
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → tools (emvqr)
//!     ↑           ↓             ↓
//! Pure Data   Tokenize      JSON output
//! Structures  Classify
//!             Verify CRC
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Raw data structure definitions (belongs in libs/types)
//! - Configuration file loading (belongs in libs/config)
//! - Any I/O; every entry point is a pure function of its input
//!
//! ## Examples
//!
//! ```rust
//! let qr = "00020101021229370016A000000677010111021302455640030965802TH530376454071000.886304713E";
//!
//! let payload = codec::decode(qr)?;
//! let view = codec::project(&payload);
//!
//! assert_eq!(view.aid, "A000000677010111");
//! assert_eq!(view.country_code, "TH");
//! # Ok::<(), codec::DecodeError>(())
//! ```

// Core modules
pub mod builder;
pub mod classifier;
pub mod compact;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod parser;
pub mod projector;
mod protocol_constants;
pub mod tlv_types;

pub mod validation;

// Re-export key types for convenience
pub use builder::{BuildError, QrPayloadBuilder};
pub use classifier::FieldClassifier;
pub use compact::{parse_compact, parse_compact_with};
pub use decoder::{decode, parse_flat, EmvDecoder};
pub use error::{DecodeError, DecodeResult, ErrorKind};
pub use parser::{
    encode_tlv_fields, find_tlv_by_tag, parse_nested_fields, parse_tlv_fields,
    parse_tlv_fields_from, TlvFieldRef, TlvReader,
};
pub use projector::{primary_account, project};
pub use tlv_types::FieldClass;
pub use validation::{
    append_emv_crc, calculate_crc16, calculate_crc16_table, format_crc, ChecksumStrategy,
    DecoderConfig,
};
