//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

mod address;
mod framer;
mod initialization;
mod keepalive;
mod label;
mod notification;
mod pdu;
mod tlv;

use std::sync::LazyLock as Lazy;

use bytes::{Bytes, BytesMut};
use ldpd::packet::*;

static DECODERS: Lazy<DecoderTable> = Lazy::new(DecoderTable::standard);

//
// Helper functions.
//

fn test_encode_msg(bytes_expected: &[u8], msg: &Message) {
    let mut bytes_actual = BytesMut::with_capacity(1500);
    msg.encode(&mut bytes_actual);
    assert_eq!(bytes_expected, &bytes_actual[..]);
}

fn test_decode_msg(bytes: &[u8], msg_expected: &Message) {
    let record = Bytes::copy_from_slice(bytes);
    let msg_actual = Message::decode(record, &DECODERS).unwrap();
    assert_eq!(*msg_expected, msg_actual);
}

fn test_decode_msg_err(bytes: &[u8], error_expected: DecodeError) {
    let record = Bytes::copy_from_slice(bytes);
    let error_actual = Message::decode(record, &DECODERS).unwrap_err();
    assert_eq!(error_expected, error_actual);
}

fn test_encode_pdu(bytes_expected: &[u8], pdu: &Pdu) {
    let bytes_actual = pdu.encode();
    assert_eq!(bytes_expected, &bytes_actual[..]);
}

fn test_decode_pdu(bytes: &[u8], pdu_expected: &Pdu) {
    let pdu_actual = Pdu::decode(bytes, &DECODERS).unwrap();
    assert_eq!(*pdu_expected, pdu_actual);
}
