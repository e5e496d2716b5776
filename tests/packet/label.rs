use super::*;

use std::str::FromStr;

use ipnetwork::Ipv4Network;

// Two prefix FEC elements with different wire widths: a /24 occupies three
// prefix bytes, a /32 all four.
static LABEL_MAPPING_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x07, 0x01, 0x00, 0x00,
            0x0f, 0x02, 0x00, 0x01, 0x18, 0x0a, 0x00, 0x00, 0x02, 0x00, 0x01,
            0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00,
            0x00, 0x64,
        ],
        LabelMappingMsg {
            msg_id: 7,
            prefixes: vec![
                Ipv4Network::from_str("10.0.0.0/24").unwrap(),
                Ipv4Network::from_str("1.1.1.1/32").unwrap(),
            ],
            label: 100,
            tlvs: TlvMap::new(),
        }
        .into(),
    )
});

#[test]
fn test_encode_label_mapping1() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping1() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG1;
    test_decode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping_bad_fec_type() {
    // FEC element type 1 (wildcard) is not supported.
    let bytes = [
        0x04, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x04, 0x01, 0x00, 0x01, 0x18, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00,
        0x00, 0x64,
    ];
    test_decode_msg_err(&bytes, DecodeError::UnsupportedFecType(1));
}

#[test]
fn test_decode_label_mapping_bad_prefix_length() {
    // Prefix length 33 exceeds an IPv4 address.
    let bytes = [
        0x04, 0x00, 0x00, 0x19, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x09, 0x02, 0x00, 0x01, 0x21, 0x0a, 0x00, 0x00, 0x00, 0x0a, 0x02,
        0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x64,
    ];
    test_decode_msg_err(&bytes, DecodeError::InvalidPrefixLength(33));
}

#[test]
fn test_decode_label_mapping_missing_label() {
    // FEC TLV present, label TLV absent.
    let bytes = [
        0x04, 0x00, 0x00, 0x0f, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x07, 0x02, 0x00, 0x01, 0x18, 0x0a, 0x00, 0x00,
    ];
    test_decode_msg_err(
        &bytes,
        DecodeError::MissingRequiredTlv(TLV_GENERIC_LABEL),
    );
}
