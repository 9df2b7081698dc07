//! Property tests for the tokenizer and checksum

use codec::{
    calculate_crc16, calculate_crc16_table, decode, encode_tlv_fields, parse_tlv_fields,
    ChecksumStrategy, ErrorKind, QrPayloadBuilder,
};
use proptest::prelude::*;
use types::TlvField;

fn field_strategy() -> impl Strategy<Value = TlvField> {
    ("[0-9A-Z]{2}", "[ -~ก-ฮ]{0,99}").prop_map(|(tag, value)| TlvField::new(tag, value))
}

proptest! {
    #[test]
    fn tokenizer_round_trips_encoded_fields(fields in prop::collection::vec(field_strategy(), 0..12)) {
        let encoded = encode_tlv_fields(&fields);
        let parsed = parse_tlv_fields(&encoded).unwrap();
        prop_assert_eq!(parsed, fields);
    }

    #[test]
    fn trailing_fragment_is_ignored(
        fields in prop::collection::vec(field_strategy(), 1..6),
        fragment in "[0-9A-Z]{0,3}",
    ) {
        let encoded = encode_tlv_fields(&fields);
        let parsed = parse_tlv_fields(&format!("{}{}", encoded, fragment)).unwrap();
        prop_assert_eq!(encode_tlv_fields(&parsed), encoded);
    }

    #[test]
    fn tokenizer_never_panics(input in "\\PC{0,200}") {
        if let Ok(fields) = parse_tlv_fields(&input) {
            for field in fields {
                prop_assert_eq!(field.value.chars().count(), field.length);
            }
        }
    }

    #[test]
    fn crc_implementations_agree(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(calculate_crc16(&data), calculate_crc16_table(&data));
    }

    #[test]
    fn single_character_mutation_breaks_crc(
        amount in "[0-9]{1,6}\\.[0-9]{2}",
        name in "[A-Za-z ]{1,25}",
        index in any::<prop::sample::Index>(),
        replacement in "[0-9A-Za-z]",
    ) {
        let qr = QrPayloadBuilder::new()
            .add_field("00", "01")
            .add_field("01", "12")
            .add_field("54", &amount)
            .add_field("59", &name)
            .build_with_crc()
            .unwrap();
        prop_assert!(decode(&qr).is_ok());

        // Mutate anything before the CRC value itself
        let covered_len = qr.len() - 4;
        let position = index.index(covered_len);
        let original = &qr[position..position + 1];
        prop_assume!(original != replacement);

        let mut mutated = qr.clone();
        mutated.replace_range(position..position + 1, &replacement);

        let result = ChecksumStrategy::EmvTagged.verify(&mutated);
        prop_assert!(result.is_err());
        let kind = result.unwrap_err().kind();
        prop_assert!(kind == ErrorKind::CrcValidationFailed || kind == ErrorKind::MisplacedCrc);
    }
}
