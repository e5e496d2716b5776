use super::*;

// Observed wire sample: keepalive time 180, receiver 172.26.1.106:0, three
// unrecognized optional TLVs.
static INIT_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x02, 0x00, 0x00, 0x25, 0x00, 0x00, 0x00, 0x30, 0x05, 0x00, 0x00,
            0x0e, 0x00, 0x01, 0x00, 0xb4, 0x00, 0x00, 0x00, 0x00, 0xac, 0x1a,
            0x01, 0x6a, 0x00, 0x00, 0x85, 0x06, 0x00, 0x01, 0x80, 0x85, 0x0b,
            0x00, 0x01, 0x80, 0x86, 0x03, 0x00, 0x01, 0x80,
        ],
        InitMsg {
            msg_id: 48,
            protocol_version: 1,
            keepalive_time: 180,
            flags: 0,
            path_vector_limit: 0,
            max_pdu_length: 0,
            receiver_id: Identifier::new(
                std::net::Ipv4Addr::new(172, 26, 1, 106),
                0,
            ),
            tlvs: TlvMap::from([
                (0x8506, Bytes::from_static(&[0x80])),
                (0x850b, Bytes::from_static(&[0x80])),
                (0x8603, Bytes::from_static(&[0x80])),
            ]),
        }
        .into(),
    )
});

#[test]
fn test_encode_init1() {
    let (ref bytes, ref msg) = *INIT_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_init1() {
    let (ref bytes, ref msg) = *INIT_MSG1;
    test_decode_msg(bytes, msg);
}

#[test]
fn test_decode_init_missing_params() {
    // No Common Session Parameters TLV.
    let bytes = [0x02, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x30];
    test_decode_msg_err(
        &bytes,
        DecodeError::MissingRequiredTlv(TLV_COMMON_SESS_PARAMS),
    );
}

#[test]
fn test_decode_init_bad_params_length() {
    // Common Session Parameters TLV truncated to 13 bytes.
    let bytes = [
        0x02, 0x00, 0x00, 0x15, 0x00, 0x00, 0x00, 0x30, 0x05, 0x00, 0x00,
        0x0d, 0x00, 0x01, 0x00, 0xb4, 0x00, 0x00, 0x00, 0x00, 0xac, 0x1a,
        0x01, 0x6a, 0x00,
    ];
    test_decode_msg_err(&bytes, DecodeError::InvalidTlvLength(13));
}
