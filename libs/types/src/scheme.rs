//! Payment network classifications derived from embedded identifiers
//!
//! Each classification is a closed enum backed by a fixed literal lookup
//! table. Anything outside the table maps to the `Unknown` variant.

use std::fmt;

/// Application / globally unique identifiers carried in sub-tag 00 of a
/// merchant account template
pub mod aids {
    // PromptPay (Thailand)
    pub const PROMPTPAY_C2C: &str = "A000000677010111";
    pub const PROMPTPAY_C2B: &str = "A000000677010112";
    pub const PROMPTPAY_BILL_PAYMENT: &str = "A000000677010113";
    pub const PROMPTPAY_CROSS_BORDER: &str = "A000000677010114";

    // QRIS (Indonesia)
    pub const QRIS: &str = "ID.CO.QRIS.WWW";
    pub const QRIS_INACASH: &str = "COM.INACASH.WWW";

    // Other national and wallet schemes
    pub const DUITNOW: &str = "COM.MY.DUITNOW";
    pub const UPI: &str = "COM.UPI.PAY";
    pub const NETS: &str = "COM.SG.NETS";
    pub const ALIPAY: &str = "COM.ALIPAY.WWW";
    pub const WECHAT_PAY: &str = "COM.WECHAT.WWW";
}

/// Payment type of a PromptPay AID
///
/// Other schemes do not encode the payment type in the AID and always
/// classify as [`AidType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AidType {
    /// Consumer-to-consumer transfer
    C2C,
    /// Consumer-to-business (merchant presented)
    C2B,
    BillPayment,
    CrossBorder,
    #[default]
    Unknown,
}

impl AidType {
    pub fn from_aid(aid: &str) -> Self {
        match aid {
            aids::PROMPTPAY_C2C => Self::C2C,
            aids::PROMPTPAY_C2B => Self::C2B,
            aids::PROMPTPAY_BILL_PAYMENT => Self::BillPayment,
            aids::PROMPTPAY_CROSS_BORDER => Self::CrossBorder,
            _ => Self::Unknown,
        }
    }

    /// Wire name used by existing consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C2C => "C2C",
            Self::C2B => "C2B",
            Self::BillPayment => "BillPayment",
            Self::CrossBorder => "CrossBorder",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment network identified by the AID/GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentScheme {
    /// Thailand national payment system
    PromptPay,
    /// Indonesia national QR standard
    #[cfg_attr(feature = "serde", serde(rename = "QRIS"))]
    Qris,
    /// Malaysia real-time payment
    DuitNow,
    /// India Unified Payments Interface
    #[cfg_attr(feature = "serde", serde(rename = "UPI"))]
    Upi,
    /// Singapore electronic payment
    #[cfg_attr(feature = "serde", serde(rename = "NETS"))]
    Nets,
    Alipay,
    WeChatPay,
    #[default]
    Unknown,
}

impl PaymentScheme {
    pub fn from_aid(aid: &str) -> Self {
        match aid {
            aids::PROMPTPAY_C2C
            | aids::PROMPTPAY_C2B
            | aids::PROMPTPAY_BILL_PAYMENT
            | aids::PROMPTPAY_CROSS_BORDER => Self::PromptPay,
            aids::QRIS | aids::QRIS_INACASH => Self::Qris,
            aids::DUITNOW => Self::DuitNow,
            aids::UPI => Self::Upi,
            aids::NETS => Self::Nets,
            aids::ALIPAY => Self::Alipay,
            aids::WECHAT_PAY => Self::WeChatPay,
            _ => Self::Unknown,
        }
    }

    /// Wire name used by existing consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PromptPay => "PromptPay",
            Self::Qris => "QRIS",
            Self::DuitNow => "DuitNow",
            Self::Upi => "UPI",
            Self::Nets => "NETS",
            Self::Alipay => "Alipay",
            Self::WeChatPay => "WeChatPay",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-of-initiation method derived from tag 01
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PoiMethodType {
    /// "11": reusable QR, amount fixed or entered by the payer
    Static,
    /// "12": single-use QR generated per transaction
    Dynamic,
    #[default]
    Unknown,
}

impl PoiMethodType {
    pub const STATIC_CODE: &'static str = "11";
    pub const DYNAMIC_CODE: &'static str = "12";

    pub fn from_code(code: &str) -> Self {
        match code {
            Self::STATIC_CODE => Self::Static,
            Self::DYNAMIC_CODE => Self::Dynamic,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PoiMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
