use super::*;

use std::net::Ipv4Addr;

// Observed wire sample: four IPv4 addresses in one Address List TLV.
static ADDRESS_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x03, 0x00, 0x00, 0x1a, 0x00, 0x00, 0x00, 0x03, 0x01, 0x01, 0x00,
            0x12, 0x00, 0x01, 0x0a, 0x01, 0x43, 0x06, 0x0a, 0x01, 0x38, 0x06,
            0x06, 0x06, 0x06, 0x06, 0x42, 0x06, 0x06, 0x06,
        ],
        AddressMsg {
            msg_id: 3,
            addresses: vec![
                Ipv4Addr::new(10, 1, 67, 6),
                Ipv4Addr::new(10, 1, 56, 6),
                Ipv4Addr::new(6, 6, 6, 6),
                Ipv4Addr::new(66, 6, 6, 6),
            ],
            tlvs: TlvMap::new(),
        }
        .into(),
    )
});

#[test]
fn test_encode_address1() {
    let (ref bytes, ref msg) = *ADDRESS_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_address1() {
    let (ref bytes, ref msg) = *ADDRESS_MSG1;
    test_decode_msg(bytes, msg);
}

#[test]
fn test_decode_address_bad_family() {
    // Address List TLV with address family 2.
    let bytes = [
        0x03, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x00,
        0x02, 0x00, 0x02,
    ];
    test_decode_msg_err(&bytes, DecodeError::UnsupportedAddressFamily(2));
}

#[test]
fn test_decode_address_missing_list() {
    let bytes = [0x03, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01];
    test_decode_msg_err(&bytes, DecodeError::MissingRequiredTlv(TLV_ADDR_LIST));
}
