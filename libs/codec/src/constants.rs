//! # Protocol Constants
//!
//! ## Purpose
//!
//! Central registry of grammar-level constants used throughout the codec.
//! These values define how QR text is framed and must remain stable for
//! compatibility with every QR producer in the field.
//!
//! ## Integration Points
//!
//! - **Tokenizer**: field header widths and value length limits
//! - **Classifier**: tag identifiers and tag ranges
//! - **Checksum**: trailing CRC field layout
//! - **Compact Decoder**: compact grammar tags and phone markers

pub use crate::protocol_constants::*;
