//! # EMV Decoder
//!
//! ## Purpose
//!
//! Orchestrates one full decode: tokenize the payload once, route every field
//! through the [`FieldClassifier`], then verify the trailing CRC when the
//! payload carries one. Any failure aborts the decode with no partial result.
//!
//! ## Integration Points
//!
//! - **Input**: raw QR text, already whitespace-normalized by the caller
//! - **Output**: [`DecodedPayload`], or the flat field list for inspection
//! - **Configuration**: [`DecoderConfig`] controls the nesting limit and
//!   whether the CRC is enforced
//!
//! ## Examples
//!
//! ```rust
//! use codec::EmvDecoder;
//!
//! let qr = "00020101021229370016A000000677010111021302455640030965802TH530376454071000.886304713E";
//! let payload = EmvDecoder::default().decode(qr)?;
//!
//! assert_eq!(payload.transaction_amount, "1000.88");
//! assert_eq!(payload.crc, "713E");
//! # Ok::<(), codec::DecodeError>(())
//! ```

use std::collections::HashSet;

use tracing::{debug, warn};
use types::{DecodedPayload, TlvField};

use crate::classifier::FieldClassifier;
use crate::constants::MIN_PAYLOAD_LEN;
use crate::error::{DecodeError, DecodeResult};
use crate::parser::{parse_tlv_fields, TlvReader};
use crate::validation::{ChecksumStrategy, DecoderConfig};

/// Full EMVCo merchant-presented QR decoder
#[derive(Debug, Clone)]
pub struct EmvDecoder {
    config: DecoderConfig,
    classifier: FieldClassifier,
}

impl Default for EmvDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl EmvDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        let classifier = FieldClassifier::new(config.max_nesting_depth);
        Self { config, classifier }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `qr` into a structured payload
    pub fn decode(&self, qr: &str) -> DecodeResult<DecodedPayload> {
        ensure_min_len(qr, "EMV payload")?;

        let mut payload = DecodedPayload::default();
        let mut seen = HashSet::new();

        for field in TlvReader::new(qr) {
            let field = field?;
            if !seen.insert(field.tag) {
                warn!(
                    "Duplicate tag {} at position {}; later value wins",
                    field.tag, field.offset
                );
            }
            self.classifier.apply(&mut payload, field)?;
        }

        if payload.has_crc() {
            if self.config.enforce_crc {
                ChecksumStrategy::EmvTagged.verify_against(qr, &payload.crc)?;
            } else {
                debug!("CRC {} captured but not verified", payload.crc);
            }
        }

        debug!(
            "Decoded payload: {} fields, {} merchant accounts",
            seen.len(),
            payload.merchant_account_info.len()
        );
        Ok(payload)
    }

    /// Raw top-level fields without classification or CRC check
    pub fn parse_flat(&self, qr: &str) -> DecodeResult<Vec<TlvField>> {
        ensure_min_len(qr, "flat TLV listing")?;
        parse_tlv_fields(qr)
    }
}

fn ensure_min_len(qr: &str, context: &str) -> DecodeResult<()> {
    let got = qr.chars().count();
    if got < MIN_PAYLOAD_LEN {
        return Err(DecodeError::too_short(MIN_PAYLOAD_LEN, got, context));
    }
    Ok(())
}

/// Decode with the default configuration
pub fn decode(qr: &str) -> DecodeResult<DecodedPayload> {
    EmvDecoder::default().decode(qr)
}

/// Flat field listing with the default configuration
pub fn parse_flat(qr: &str) -> DecodeResult<Vec<TlvField>> {
    EmvDecoder::default().parse_flat(qr)
}
