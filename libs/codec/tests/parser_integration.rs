//! Integration tests for TLV tokenizing
//!
//! These tests focus on end-to-end tokenizing workflows: building a payload,
//! walking it, and drilling into its templates.

use codec::{
    encode_tlv_fields, find_tlv_by_tag, parse_nested_fields, parse_tlv_fields, DecodeError,
    ErrorKind, FieldClass, QrPayloadBuilder, TlvReader,
};

fn sample_payload() -> String {
    let account = QrPayloadBuilder::new()
        .add_field("00", "COM.SG.NETS")
        .add_field("01", "MERCHANT-42")
        .add_field("09", "extra");

    let additional = QrPayloadBuilder::new()
        .add_field("01", "INV-001")
        .add_field("07", "T1");

    QrPayloadBuilder::new()
        .add_field("00", "01")
        .add_field("01", "12")
        .add_template("33", account)
        .add_field("53", "702")
        .add_field("54", "12.50")
        .add_field("58", "SG")
        .add_field("59", "Kopi Stall")
        .add_template("62", additional)
        .build_with_crc()
        .expect("sample payload builds")
}

#[test]
fn test_complete_tokenize_workflow() {
    let payload = sample_payload();

    let fields = parse_tlv_fields(&payload).unwrap();
    let tags: Vec<_> = fields.iter().map(|field| field.tag.as_str()).collect();
    assert_eq!(tags, vec!["00", "01", "33", "53", "54", "58", "59", "62", "63"]);

    let classes: Vec<_> = fields.iter().map(|field| FieldClass::of(&field.tag)).collect();
    assert_eq!(classes[2], FieldClass::MerchantAccount);
    assert_eq!(classes[7], FieldClass::AdditionalData);
    assert_eq!(classes[8], FieldClass::Crc);

    assert_eq!(encode_tlv_fields(&fields), payload);
}

#[test]
fn test_template_drill_down() {
    let payload = sample_payload();
    let account = find_tlv_by_tag(&payload, "33").unwrap();

    let sub_fields = parse_nested_fields("33", account, 2, 2).unwrap();
    let pairs: Vec<_> = sub_fields.iter().map(|field| (field.tag, field.value)).collect();
    assert_eq!(
        pairs,
        vec![("00", "COM.SG.NETS"), ("01", "MERCHANT-42"), ("09", "extra")]
    );
}

#[test]
fn test_reader_offsets_cover_payload() {
    let payload = sample_payload();
    let mut expected_offset = 0;

    for field in TlvReader::new(&payload) {
        let field = field.unwrap();
        assert_eq!(field.offset, expected_offset);
        assert_eq!(field.value.chars().count(), field.length);
        expected_offset += 4 + field.length;
    }

    assert_eq!(expected_offset, payload.chars().count());
}

#[test]
fn test_error_positions() {
    let err = parse_tlv_fields("00020101XXAB").unwrap_err();
    assert_eq!(err, DecodeError::malformed_length(8, "XX"));

    let err = parse_tlv_fields("0002010150AB").unwrap_err();
    assert_eq!(err, DecodeError::truncated_value("01", 10, 50, 2));
}

#[test]
fn test_find_stops_at_malformed_input() {
    assert_eq!(find_tlv_by_tag("0002010lXX5802TH", "58"), None);
    assert_eq!(find_tlv_by_tag("0002015802TH", "58"), Some("TH"));
}

#[test]
fn test_nesting_limit_exceeded() {
    let err = parse_nested_fields("62", "0102AB", 2, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
    assert!(err.to_string().contains("62"));
}
