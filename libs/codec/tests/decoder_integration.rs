//! End-to-end decoding of real merchant-presented QR payloads
//!
//! Payloads below are production-shaped PromptPay codes; every one carries a
//! valid trailing CRC.

use codec::{decode, parse_flat, project, DecodeError, DecoderConfig, EmvDecoder, ErrorKind};
use types::{AidType, PaymentScheme, PoiMethodType};

const PROMPTPAY_C2C: &str =
    "00020101021229370016A000000677010111021302455640030965802TH530376454071000.886304713E";

const PROMPTPAY_STATIC_C2C: &str =
    "00020101021129370016A000000677010111021302455640030965802TH530376454071000.886304EFD4";

const PROMPTPAY_BILL_STATIC: &str = "00020101021130750016A00000067701011201150107537000882050219ZY010556UP8013305E80309MDMBEN38J53037645406900.045802TH622407200000yJMlWBD1ltXF6zJf6304858E";

const PROMPTPAY_BILL_DYNAMIC: &str = "00020101021230870016A00000067701011201150205565052805020220ZYZRM7LJKIHW852LI6BJ0320LV182T0VX97RFFYNH7LK530376454031005802TH62240720PQRMGGT5EFY77KDP2QDI6304DBCF";

#[test]
fn test_promptpay_transfer() {
    let payload = decode(PROMPTPAY_C2C).unwrap();

    assert_eq!(payload.payload_format_indicator, "01");
    assert_eq!(payload.point_of_initiation_method, "12");
    assert_eq!(payload.country_code, "TH");
    assert_eq!(payload.transaction_currency, "764");
    assert_eq!(payload.transaction_amount, "1000.88");
    assert_eq!(payload.crc, "713E");
    assert_eq!(payload.merchant_category_code, "");

    let account = payload.merchant_account("29").unwrap();
    assert_eq!(account.aid, "A000000677010111");
    assert_eq!(account.aid_type, AidType::C2C);
    assert_eq!(account.payment_scheme, PaymentScheme::PromptPay);
}

#[test]
fn test_static_variant_has_its_own_crc() {
    let payload = decode(PROMPTPAY_STATIC_C2C).unwrap();
    assert_eq!(payload.poi_method_type, PoiMethodType::Static);
    assert_eq!(payload.crc, "EFD4");
    assert_eq!(
        payload.merchant_account("29").unwrap().aid_type,
        AidType::C2C
    );

    let err = decode(&PROMPTPAY_STATIC_C2C.replace("EFD4", "713E")).unwrap_err();
    assert_eq!(err, DecodeError::crc_mismatch("EFD4", "713E"));
}

#[test]
fn test_bill_payment_with_references() {
    let payload = decode(PROMPTPAY_BILL_STATIC).unwrap();

    assert_eq!(payload.point_of_initiation_method, "11");
    assert_eq!(payload.transaction_amount, "900.04");
    assert_eq!(payload.crc, "858E");

    let account = payload.merchant_account("30").unwrap();
    assert_eq!(account.aid, "A000000677010112");
    assert_eq!(account.aid_type, AidType::C2B);
    assert_eq!(account.merchant_id, "010753700088205");
    assert_eq!(account.reference_1, "ZY010556UP8013305E8");
    assert_eq!(account.reference_2, "MDMBEN38J");
    assert_eq!(account.reference_3, "");

    assert_eq!(
        payload.additional_data.get("07").map(String::as_str),
        Some("0000yJMlWBD1ltXF6zJf")
    );
}

#[test]
fn test_bill_payment_dynamic() {
    let payload = decode(PROMPTPAY_BILL_DYNAMIC).unwrap();

    assert_eq!(payload.poi_method_type, PoiMethodType::Dynamic);
    assert_eq!(payload.transaction_amount, "100");
    assert_eq!(payload.crc, "DBCF");

    let account = payload.merchant_account("30").unwrap();
    assert_eq!(account.merchant_id, "020556505280502");
    assert_eq!(account.reference_1, "ZYZRM7LJKIHW852LI6BJ");
    assert_eq!(account.reference_2, "LV182T0VX97RFFYNH7LK");
    assert_eq!(
        payload.additional_data.get("07").map(String::as_str),
        Some("PQRMGGT5EFY77KDP2QDI")
    );
}

#[test]
fn test_consolidated_view_fills_missing_reference() {
    let view = project(&decode(PROMPTPAY_BILL_STATIC).unwrap());

    assert_eq!(view.aid, "A000000677010112");
    assert_eq!(view.payment_scheme, PaymentScheme::PromptPay);
    assert_eq!(view.poi_method_type, PoiMethodType::Static);
    assert_eq!(view.merchant_id, "010753700088205");
    assert_eq!(view.reference_1, "ZY010556UP8013305E8");
    assert_eq!(view.reference_2, "MDMBEN38J");
    assert_eq!(view.reference_3, "0000yJMlWBD1ltXF6zJf");
}

#[test]
fn test_error_cases() {
    assert_eq!(decode("").unwrap_err().kind(), ErrorKind::TooShort);
    assert_eq!(decode("00").unwrap_err().kind(), ErrorKind::TooShort);
    assert_eq!(decode("00XX01").unwrap_err().kind(), ErrorKind::MalformedLength);
    assert_eq!(decode("001001").unwrap_err().kind(), ErrorKind::TruncatedValue);

    let tampered = PROMPTPAY_C2C.replace("713E", "FFFF");
    assert_eq!(
        decode(&tampered).unwrap_err(),
        DecodeError::crc_mismatch("713E", "FFFF")
    );
}

#[test]
fn test_any_amount_change_breaks_crc() {
    let tampered = PROMPTPAY_BILL_STATIC.replace("900.04", "900.05");
    assert_eq!(
        decode(&tampered).unwrap_err().kind(),
        ErrorKind::CrcValidationFailed
    );
}

#[test]
fn test_trusted_input_skips_crc() {
    let decoder = EmvDecoder::new(DecoderConfig::without_crc());
    let tampered = PROMPTPAY_BILL_STATIC.replace("900.04", "900.05");

    let payload = decoder.decode(&tampered).unwrap();
    assert_eq!(payload.transaction_amount, "900.05");
}

#[test]
fn test_flat_listing() {
    let fields = parse_flat(PROMPTPAY_C2C).unwrap();
    let tags: Vec<_> = fields.iter().map(|field| field.tag.as_str()).collect();

    assert_eq!(tags, vec!["00", "01", "29", "58", "53", "54", "63"]);
    assert!(fields.iter().all(|field| field.value.chars().count() == field.length));
    assert_eq!(fields[2].length, 37);
}

#[test]
fn test_multibyte_merchant_name() {
    let qr = codec::QrPayloadBuilder::new()
        .add_field("00", "01")
        .add_field("01", "11")
        .add_field("59", "ร้านกาแฟ")
        .add_field("60", "กรุงเทพ")
        .build_with_crc()
        .unwrap();

    let payload = decode(&qr).unwrap();
    assert_eq!(payload.merchant_name, "ร้านกาแฟ");
    assert_eq!(payload.merchant_city, "กรุงเทพ");
}

#[test]
fn test_json_shape() {
    let payload = decode(PROMPTPAY_BILL_STATIC).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["merchant_account_info"]["30"]["aid_type"], "C2B");
    assert_eq!(json["merchant_account_info"]["30"]["payment_scheme"], "PromptPay");
    assert_eq!(json["poi_method_type"], "static");
}
