use super::*;

#[test]
fn test_decode_tlv_length_mismatch() {
    // Declared length 6, actual value length 4.
    let record = Bytes::from_static(&[
        0x04, 0x00, 0x00, 0x06, 0x00, 0x2d, 0xc0, 0x00,
    ]);
    let error = Tlv::decode(record).unwrap_err();
    assert_eq!(
        DecodeError::LengthMismatch {
            declared: 6,
            actual: 4,
        },
        error
    );
}

#[test]
fn test_tlv_map_round_trip() {
    let bytes = [
        0x04, 0x01, 0x00, 0x04, 0xac, 0x1a, 0x01, 0x65, 0x04, 0x02, 0x00,
        0x04, 0x00, 0x00, 0x00, 0x01, 0x04, 0x04, 0x00, 0x00,
    ];
    let tlvs = TlvMap::decode(Bytes::copy_from_slice(&bytes)).unwrap();
    assert_eq!(tlvs.len(), 3);
    assert_eq!(
        tlvs.iter().map(|tlv| tlv.tlv_type).collect::<Vec<_>>(),
        vec![0x0401, 0x0402, 0x0404]
    );

    let mut encoded = BytesMut::new();
    tlvs.encode(&mut encoded);
    assert_eq!(&bytes[..], &encoded[..]);
}

#[test]
fn test_tlv_map_insert_preserves_position() {
    let mut tlvs = TlvMap::new();
    tlvs.insert(0x0401, Bytes::from_static(&[0x01]));
    tlvs.insert(0x0402, Bytes::from_static(&[0x02]));
    tlvs.insert(0x0401, Bytes::from_static(&[0x03]));

    assert_eq!(tlvs.len(), 2);
    assert_eq!(
        tlvs.iter().map(|tlv| tlv.tlv_type).collect::<Vec<_>>(),
        vec![0x0401, 0x0402]
    );
    assert_eq!(tlvs.get(0x0401).unwrap().as_ref(), &[0x03]);
}

#[test]
fn test_tlv_map_pop_missing() {
    let mut tlvs = TlvMap::new();
    assert_eq!(
        tlvs.pop(TLV_STATUS).unwrap_err(),
        DecodeError::MissingRequiredTlv(TLV_STATUS)
    );
}
