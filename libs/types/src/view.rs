//! Simplified single-account summary of a decoded payload

use crate::scheme::{AidType, PaymentScheme, PoiMethodType};

/// Primary-account projection of a [`crate::DecodedPayload`]
///
/// Always derived on demand; never decoded directly from QR text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsolidatedView {
    pub aid: String,
    pub aid_type: AidType,
    pub poi_method_type: PoiMethodType,
    pub payment_scheme: PaymentScheme,
    pub transaction_amount: String,
    pub country_code: String,
    pub merchant_id: String,
    pub reference_1: String,
    pub reference_2: String,
    pub reference_3: String,
}

impl ConsolidatedView {
    /// Mutable reference slots 1-3 in order
    pub fn references_mut(&mut self) -> [&mut String; 3] {
        [
            &mut self.reference_1,
            &mut self.reference_2,
            &mut self.reference_3,
        ]
    }
}
