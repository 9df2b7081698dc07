//! # Field Classifier
//!
//! Routes each top-level TLV field into its slot of a [`DecodedPayload`].
//! Merchant account and additional data values are tokenized one level
//! deeper through [`parse_nested_fields`].

use tracing::{debug, trace};
use types::{DecodedPayload, MerchantAccount, PoiMethodType, TagMap};

use crate::constants::merchant_account;
use crate::error::DecodeResult;
use crate::parser::{parse_nested_fields, TlvFieldRef};
use crate::tlv_types::FieldClass;

/// Nesting level of the top-level payload
const TOP_LEVEL: usize = 1;

/// Applies classified fields to a payload under construction
#[derive(Debug, Clone, Copy)]
pub struct FieldClassifier {
    max_depth: usize,
}

impl FieldClassifier {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Store one top-level field. Later fields overwrite earlier ones with
    /// the same tag.
    pub fn apply(&self, payload: &mut DecodedPayload, field: TlvFieldRef<'_>) -> DecodeResult<()> {
        let class = FieldClass::of(field.tag);
        debug!("Tag {} classified as {}", field.tag, class);
        trace!("Tag {} value {:?}", field.tag, field.value);

        let value = field.value.to_string();
        match class {
            FieldClass::PayloadFormatIndicator => payload.payload_format_indicator = value,
            FieldClass::PointOfInitiationMethod => {
                payload.poi_method_type = PoiMethodType::from_code(&value);
                payload.point_of_initiation_method = value;
            }
            FieldClass::MerchantAccount => {
                let account = self.parse_merchant_account(field.tag, field.value)?;
                payload
                    .merchant_account_info
                    .insert(field.tag.to_string(), account);
            }
            FieldClass::MerchantCategoryCode => payload.merchant_category_code = value,
            FieldClass::TransactionCurrency => payload.transaction_currency = value,
            FieldClass::TransactionAmount => payload.transaction_amount = value,
            FieldClass::TipOrConvenienceIndicator => payload.tip_or_convenience_indicator = value,
            FieldClass::ValueOfConvenienceFee => payload.value_of_convenience_fee = value,
            FieldClass::CountryCode => payload.country_code = value,
            FieldClass::MerchantName => payload.merchant_name = value,
            FieldClass::MerchantCity => payload.merchant_city = value,
            FieldClass::PostalCode => payload.postal_code = value,
            FieldClass::AdditionalData => {
                payload.additional_data = self.parse_additional_data(field.tag, field.value)?;
            }
            FieldClass::Crc => payload.crc = value,
            FieldClass::MerchantInformation => {
                payload
                    .merchant_information
                    .insert(field.tag.to_string(), value);
            }
            FieldClass::Unresolved => {
                payload.unresolved_data.insert(field.tag.to_string(), value);
            }
        }

        Ok(())
    }

    /// Build a merchant account from the value of top-level tag `tag`
    pub fn parse_merchant_account(&self, tag: &str, value: &str) -> DecodeResult<MerchantAccount> {
        let mut account = MerchantAccount::with_raw_value(value);

        for sub in parse_nested_fields(tag, value, TOP_LEVEL + 1, self.max_depth)? {
            match sub.tag {
                merchant_account::AID => account.set_aid(sub.value),
                merchant_account::MERCHANT_ID => account.merchant_id = sub.value.to_string(),
                merchant_account::REFERENCE_1 => account.reference_1 = sub.value.to_string(),
                merchant_account::REFERENCE_2 => account.reference_2 = sub.value.to_string(),
                merchant_account::REFERENCE_3 => account.reference_3 = sub.value.to_string(),
                other => {
                    account
                        .unresolved_data
                        .insert(other.to_string(), sub.value.to_string());
                }
            }
        }

        debug!(
            "Merchant account {}: scheme {}, type {}",
            tag, account.payment_scheme, account.aid_type
        );
        Ok(account)
    }

    /// Sub-fields of an additional data template, in encounter order
    pub fn parse_additional_data(&self, tag: &str, value: &str) -> DecodeResult<TagMap<String>> {
        let data = parse_nested_fields(tag, value, TOP_LEVEL + 1, self.max_depth)?
            .into_iter()
            .map(|sub| (sub.tag.to_string(), sub.value.to_string()))
            .collect();
        Ok(data)
    }
}
