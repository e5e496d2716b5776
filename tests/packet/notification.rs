use super::*;

use ldpd::packet::messages::notification::STATUS_SESSION_REJECTED;

// Fatal Session Rejected, naming the offending KeepAlive message.
static NOTIF_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x00, 0x01, 0x00, 0x12, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00,
            0x0a, 0x80, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x01, 0x02, 0x01,
        ],
        NotifMsg {
            msg_id: 2,
            fatal: true,
            forward: false,
            status_data: STATUS_SESSION_REJECTED,
            error_msg_id: 1,
            error_msg_type: 0x0201,
            tlvs: TlvMap::new(),
        }
        .into(),
    )
});

#[test]
fn test_encode_notification1() {
    let (ref bytes, ref msg) = *NOTIF_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_notification1() {
    let (ref bytes, ref msg) = *NOTIF_MSG1;
    test_decode_msg(bytes, msg);
}

#[test]
fn test_decode_notification_bad_status_length() {
    // Status TLV with a 4-byte value.
    let bytes = [
        0x00, 0x01, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00,
        0x04, 0x80, 0x00, 0x00, 0x10,
    ];
    test_decode_msg_err(&bytes, DecodeError::InvalidTlvLength(4));
}
