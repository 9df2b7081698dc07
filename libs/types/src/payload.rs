//! Structured result of decoding a full EMVCo merchant-presented QR payload

use indexmap::IndexMap;

use crate::scheme::{AidType, PaymentScheme, PoiMethodType};

/// Tag-keyed mapping that iterates in encounter order
pub type TagMap<V> = IndexMap<String, V>;

/// Merchant account information template (top-level tags 02-51)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MerchantAccount {
    /// Sub-tag 00: application / globally unique identifier
    pub aid: String,
    pub aid_type: AidType,
    pub payment_scheme: PaymentScheme,
    /// Sub-tag 01: merchant or biller identifier
    pub merchant_id: String,
    /// Sub-tag 02
    pub reference_1: String,
    /// Sub-tag 03
    pub reference_2: String,
    /// Sub-tag 04
    pub reference_3: String,
    /// Template text exactly as it appeared in the payload
    pub raw_value: String,
    /// Sub-tags without a dedicated field
    pub unresolved_data: TagMap<String>,
}

impl MerchantAccount {
    /// Empty account that remembers the template it was built from
    pub fn with_raw_value(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            ..Self::default()
        }
    }

    /// Set the AID and both classifications derived from it
    pub fn set_aid(&mut self, aid: impl Into<String>) {
        let aid = aid.into();
        self.aid_type = AidType::from_aid(&aid);
        self.payment_scheme = PaymentScheme::from_aid(&aid);
        self.aid = aid;
    }

    /// Reference slots 1-3 in order
    pub fn references(&self) -> [&str; 3] {
        [&self.reference_1, &self.reference_2, &self.reference_3]
    }
}

/// Decoded EMVCo QR payload
///
/// Scalar fields hold the raw text of their tag, or an empty string when the
/// tag was absent. Tags no rule recognises land in `unresolved_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedPayload {
    /// Tag 00
    pub payload_format_indicator: String,
    /// Tag 01, raw
    pub point_of_initiation_method: String,
    /// Tag 01, classified
    pub poi_method_type: PoiMethodType,
    /// Tags 02-51
    pub merchant_account_info: TagMap<MerchantAccount>,
    /// Tag 52
    pub merchant_category_code: String,
    /// Tag 53, ISO 4217 numeric
    pub transaction_currency: String,
    /// Tag 54, decimal text
    pub transaction_amount: String,
    /// Tag 55
    pub tip_or_convenience_indicator: String,
    /// Tag 56
    pub value_of_convenience_fee: String,
    /// Tag 58, ISO 3166 alpha-2
    pub country_code: String,
    /// Tag 59
    pub merchant_name: String,
    /// Tag 60
    pub merchant_city: String,
    /// Tag 61
    pub postal_code: String,
    /// Tag 62 sub-fields
    pub additional_data: TagMap<String>,
    /// Tags 64-98
    pub merchant_information: TagMap<String>,
    /// Tag 63
    pub crc: String,
    pub unresolved_data: TagMap<String>,
}

impl DecodedPayload {
    pub fn merchant_account(&self, tag: &str) -> Option<&MerchantAccount> {
        self.merchant_account_info.get(tag)
    }

    pub fn has_crc(&self) -> bool {
        !self.crc.is_empty()
    }

    pub fn is_dynamic(&self) -> bool {
        self.poi_method_type == PoiMethodType::Dynamic
    }

    /// Schemes of all merchant accounts, in encounter order
    pub fn payment_schemes(&self) -> impl Iterator<Item = PaymentScheme> + '_ {
        self.merchant_account_info
            .values()
            .map(|account| account.payment_scheme)
    }
}
