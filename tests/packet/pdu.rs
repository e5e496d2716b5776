use super::*;

use std::net::Ipv4Addr;

static PDU1: Lazy<(Vec<u8>, Pdu)> = Lazy::new(|| {
    let mut pdu = Pdu::new(Identifier::new(Ipv4Addr::new(1, 1, 1, 1), 0));
    pdu.messages.push_back(
        KeepaliveMsg {
            msg_id: 1,
            tlvs: TlvMap::new(),
        }
        .into(),
    );
    (
        vec![
            0x00, 0x01, 0x00, 0x0e, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x02,
            0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01,
        ],
        pdu,
    )
});

// A PDU carrying no messages is legal.
static PDU2: Lazy<(Vec<u8>, Pdu)> = Lazy::new(|| {
    (
        vec![
            0x00, 0x01, 0x00, 0x06, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00,
        ],
        Pdu::new(Identifier::new(Ipv4Addr::new(2, 2, 2, 2), 0)),
    )
});

#[test]
fn test_encode_pdu1() {
    let (ref bytes, ref pdu) = *PDU1;
    test_encode_pdu(bytes, pdu);
}

#[test]
fn test_decode_pdu1() {
    let (ref bytes, ref pdu) = *PDU1;
    test_decode_pdu(bytes, pdu);
}

#[test]
fn test_encode_pdu2() {
    let (ref bytes, ref pdu) = *PDU2;
    test_encode_pdu(bytes, pdu);
}

#[test]
fn test_decode_pdu2() {
    let (ref bytes, ref pdu) = *PDU2;
    test_decode_pdu(bytes, pdu);
}

#[test]
fn test_decode_pdu_truncated() {
    // Declared PDU length extends past the end of the buffer.
    let (ref bytes, _) = *PDU1;
    let error =
        Pdu::decode(&bytes[..bytes.len() - 2], &DECODERS).unwrap_err();
    assert_eq!(
        DecodeError::TruncatedStream {
            expected: 18,
            available: 16,
        },
        error
    );
}

#[test]
fn test_decode_pdu_multiple_messages() {
    let bytes = [
        0x00, 0x01, 0x00, 0x16, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x02,
        0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x01, 0x00, 0x04,
        0x00, 0x00, 0x00, 0x02,
    ];
    let pdu = Pdu::decode(&bytes, &DECODERS).unwrap();
    assert_eq!(pdu.version, Pdu::VERSION);
    assert_eq!(pdu.messages.len(), 2);
    assert_eq!(pdu.messages[0].msg_id(), 1);
    assert_eq!(pdu.messages[1].msg_id(), 2);
}
