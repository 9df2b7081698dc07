//! # Decoder Configuration Module
//!
//! Tunable decoder limits and switches. Defaults reproduce the standard
//! EMVCo behaviour exactly; deployments override them through the
//! `qr-config` crate or by constructing the struct directly.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_NESTING_DEPTH;

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Deepest tokenization level allowed; the top-level payload is level 1
    pub max_nesting_depth: usize,

    /// Verify the trailing CRC when the payload carries one. When disabled
    /// the CRC value is still captured but never checked, which is only
    /// appropriate for trusted, already-validated input.
    pub enforce_crc: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            enforce_crc: true,
        }
    }
}

impl DecoderConfig {
    /// Configuration for trusted input that skips CRC verification
    pub fn without_crc() -> Self {
        Self {
            enforce_crc: false,
            ..Self::default()
        }
    }
}
