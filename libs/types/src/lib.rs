//! # EMV QR Types Library
//!
//! Pure data structures for decoded EMV merchant-presented QR payloads.
//!
//! ## Design Philosophy
//!
//! - **Text In, Text Out**: Every value is kept as the exact text found in the
//!   payload. Amounts are never parsed into floats, so nothing is rounded.
//! - **Closed Classifications**: Payment scheme, AID type and POI method are
//!   enums with an explicit `Unknown` fallback instead of open strings.
//! - **Encounter Order**: Tag-keyed mappings are [`TagMap`]s, which iterate in
//!   the order the tags appeared in the payload.
//! - **Clear Boundaries**: No parsing lives here. Tokenizing, classification
//!   and checksum rules belong to the `codec` crate.
//!
//! ## Architecture Role
//!
//! ```text
//! QR text → codec (rules) → [types] → callers
//!              ↓               ↓
//!          Tokenizer      DecodedPayload
//!          CRC checks     MerchantAccount
//!          Classifier     ConsolidatedView
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{AidType, PaymentScheme, TlvField};
//!
//! let field = TlvField::new("00", "A000000677010111");
//! assert_eq!(field.encode(), "0016A000000677010111");
//! assert_eq!(AidType::from_aid(&field.value), AidType::C2C);
//! assert_eq!(PaymentScheme::from_aid(&field.value), PaymentScheme::PromptPay);
//! ```

pub mod compact;
pub mod field;
pub mod payload;
pub mod scheme;
pub mod view;

pub use compact::CompactInfo;
pub use field::TlvField;
pub use payload::{DecodedPayload, MerchantAccount, TagMap};
pub use scheme::{aids, AidType, PaymentScheme, PoiMethodType};
pub use view::ConsolidatedView;
