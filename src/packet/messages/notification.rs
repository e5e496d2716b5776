//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{Message, MessageKind, MessageType};
use crate::packet::tlv::{TLV_STATUS, TlvMap};

//
// Notification Message.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Notification (0x0001)     |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Status TLV                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Optional Parameters                       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The Status TLV (0x0300) is 10 bytes:
//
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |E|F|                 Status Data                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |      Message Type             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Debug, Default, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct NotifMsg {
    pub msg_id: u32,
    pub fatal: bool,
    pub forward: bool,
    pub status_data: u32,
    pub error_msg_id: u32,
    pub error_msg_type: u16,
    pub tlvs: TlvMap,
}

// Status codes.
//
// IANA registry:
// https://www.iana.org/assignments/ldp-namespaces/ldp-namespaces.xhtml#ldp-namespaces-7
pub const STATUS_SUCCESS: u32 = 0x0000_0000;
pub const STATUS_SHUTDOWN: u32 = 0x0000_000A;
pub const STATUS_SESSION_REJECTED: u32 = 0x0000_0010;

const STATUS_FATAL_BIT: u32 = 0x8000_0000;
const STATUS_FORWARD_BIT: u32 = 0x4000_0000;
const STATUS_DATA_MASK: u32 = 0x3FFF_FFFF;

// ===== impl NotifMsg =====

impl MessageKind for NotifMsg {
    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> u16 {
        MessageType::Notification as u16
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        // Encode common TLV(s).
        let mut status = self.status_data & STATUS_DATA_MASK;
        if self.fatal {
            status |= STATUS_FATAL_BIT;
        }
        if self.forward {
            status |= STATUS_FORWARD_BIT;
        }
        buf.put_u16(TLV_STATUS);
        buf.put_u16(10);
        buf.put_u32(status);
        buf.put_u32(self.error_msg_id);
        buf.put_u16(self.error_msg_type);

        // Encode retained TLV(s).
        self.tlvs.encode(buf);
    }

    fn decode_body(msg_id: u32, mut tlvs: TlvMap) -> DecodeResult<Message> {
        // Decode common TLV(s).
        let mut status = tlvs.pop(TLV_STATUS)?;
        if status.len() != 10 {
            return Err(DecodeError::InvalidTlvLength(status.len() as u16));
        }
        let status_word = status.try_get_u32()?;
        let error_msg_id = status.try_get_u32()?;
        let error_msg_type = status.try_get_u16()?;

        Ok(NotifMsg {
            msg_id,
            fatal: status_word & STATUS_FATAL_BIT != 0,
            forward: status_word & STATUS_FORWARD_BIT != 0,
            status_data: status_word & STATUS_DATA_MASK,
            error_msg_id,
            error_msg_type,
            tlvs,
        }
        .into())
    }
}
