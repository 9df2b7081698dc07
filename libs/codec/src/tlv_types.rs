//! # TLV Type System - EMV QR Tag Registry
//!
//! ## Purpose
//!
//! Maps every top-level tag to the semantic field it carries. The mapping is
//! a fixed dispatch table:
//!
//! | Tag | Field |
//! |---|---|
//! | 00 | Payload format indicator |
//! | 01 | Point-of-initiation method |
//! | 02-51 | Merchant account information (nested template) |
//! | 52-61 | Merchant category, currency, amount, tip, fee, country, name, city, postal code (57 excluded) |
//! | 62 | Additional data (nested template) |
//! | 63 | CRC |
//! | 64-98 | Merchant information / language template |
//! | 99, 57, anything else | Unresolved |
//!
//! Tags that are not two ASCII digits are always unresolved.

use std::fmt;

use crate::constants::{tag_number, tags};

/// Semantic class of a top-level tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    PayloadFormatIndicator,
    PointOfInitiationMethod,
    MerchantAccount,
    MerchantCategoryCode,
    TransactionCurrency,
    TransactionAmount,
    TipOrConvenienceIndicator,
    ValueOfConvenienceFee,
    CountryCode,
    MerchantName,
    MerchantCity,
    PostalCode,
    AdditionalData,
    Crc,
    MerchantInformation,
    Unresolved,
}

impl FieldClass {
    /// Classify a top-level tag
    pub fn of(tag: &str) -> Self {
        let Some(number) = tag_number(tag) else {
            return Self::Unresolved;
        };

        match number {
            0 => Self::PayloadFormatIndicator,
            1 => Self::PointOfInitiationMethod,
            n if tags::MERCHANT_ACCOUNT_RANGE.contains(&n) => Self::MerchantAccount,
            52 => Self::MerchantCategoryCode,
            53 => Self::TransactionCurrency,
            54 => Self::TransactionAmount,
            55 => Self::TipOrConvenienceIndicator,
            56 => Self::ValueOfConvenienceFee,
            58 => Self::CountryCode,
            59 => Self::MerchantName,
            60 => Self::MerchantCity,
            61 => Self::PostalCode,
            62 => Self::AdditionalData,
            63 => Self::Crc,
            n if tags::MERCHANT_INFORMATION_RANGE.contains(&n) => Self::MerchantInformation,
            _ => Self::Unresolved,
        }
    }

    /// Human-readable field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::PayloadFormatIndicator => "Payload Format Indicator",
            Self::PointOfInitiationMethod => "Point of Initiation Method",
            Self::MerchantAccount => "Merchant Account Information",
            Self::MerchantCategoryCode => "Merchant Category Code",
            Self::TransactionCurrency => "Transaction Currency",
            Self::TransactionAmount => "Transaction Amount",
            Self::TipOrConvenienceIndicator => "Tip or Convenience Indicator",
            Self::ValueOfConvenienceFee => "Value of Convenience Fee",
            Self::CountryCode => "Country Code",
            Self::MerchantName => "Merchant Name",
            Self::MerchantCity => "Merchant City",
            Self::PostalCode => "Postal Code",
            Self::AdditionalData => "Additional Data Field Template",
            Self::Crc => "CRC",
            Self::MerchantInformation => "Merchant Information Language Template",
            Self::Unresolved => "Unresolved",
        }
    }

    /// Whether the value is itself a TLV stream
    pub fn is_template(&self) -> bool {
        matches!(self, Self::MerchantAccount | Self::AdditionalData)
    }

    /// Whether a repeated tag overwrites a single scalar field
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Self::MerchantAccount
                | Self::AdditionalData
                | Self::MerchantInformation
                | Self::Unresolved
        )
    }
}

impl fmt::Display for FieldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_tags() {
        assert_eq!(FieldClass::of("00"), FieldClass::PayloadFormatIndicator);
        assert_eq!(FieldClass::of("01"), FieldClass::PointOfInitiationMethod);
        assert_eq!(FieldClass::of("52"), FieldClass::MerchantCategoryCode);
        assert_eq!(FieldClass::of("53"), FieldClass::TransactionCurrency);
        assert_eq!(FieldClass::of("54"), FieldClass::TransactionAmount);
        assert_eq!(FieldClass::of("55"), FieldClass::TipOrConvenienceIndicator);
        assert_eq!(FieldClass::of("56"), FieldClass::ValueOfConvenienceFee);
        assert_eq!(FieldClass::of("58"), FieldClass::CountryCode);
        assert_eq!(FieldClass::of("59"), FieldClass::MerchantName);
        assert_eq!(FieldClass::of("60"), FieldClass::MerchantCity);
        assert_eq!(FieldClass::of("61"), FieldClass::PostalCode);
        assert_eq!(FieldClass::of("63"), FieldClass::Crc);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(FieldClass::of("02"), FieldClass::MerchantAccount);
        assert_eq!(FieldClass::of("51"), FieldClass::MerchantAccount);
        assert_eq!(FieldClass::of("62"), FieldClass::AdditionalData);
        assert_eq!(FieldClass::of("64"), FieldClass::MerchantInformation);
        assert_eq!(FieldClass::of("98"), FieldClass::MerchantInformation);
        assert_eq!(FieldClass::of("99"), FieldClass::Unresolved);
        assert_eq!(FieldClass::of("57"), FieldClass::Unresolved);
    }

    #[test]
    fn test_non_numeric_tags_are_unresolved() {
        assert_eq!(FieldClass::of("2A"), FieldClass::Unresolved);
        assert_eq!(FieldClass::of("AB"), FieldClass::Unresolved);
        assert_eq!(FieldClass::of("ก0"), FieldClass::Unresolved);
    }

    #[test]
    fn test_templates() {
        assert!(FieldClass::MerchantAccount.is_template());
        assert!(FieldClass::AdditionalData.is_template());
        assert!(!FieldClass::MerchantInformation.is_template());
        assert!(FieldClass::Crc.is_scalar());
        assert!(!FieldClass::Unresolved.is_scalar());
    }
}
