//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::packet::Identifier;
use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{Message, MessageKind, MessageType};
use crate::packet::tlv::{TLV_COMMON_SESS_PARAMS, TlvMap};

//
// Initialization Message.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Initialization (0x0200)   |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Common Session Parameters TLV             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Optional Parameters                       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The Common Session Parameters TLV (0x0500) is 14 bytes:
//
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// | Protocol Version              |      KeepAlive Time           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Flags     |     PVLim     |      Max PDU Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                 Receiver LDP Identifier                       |
// +                               +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                               |
// -+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-++
//
#[derive(Clone, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct InitMsg {
    pub msg_id: u32,
    pub protocol_version: u16,
    pub keepalive_time: u16,
    pub flags: u8,
    pub path_vector_limit: u8,
    pub max_pdu_length: u16,
    pub receiver_id: Identifier,
    pub tlvs: TlvMap,
}

// ===== impl InitMsg =====

impl MessageKind for InitMsg {
    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> u16 {
        MessageType::Initialization as u16
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        // Encode common TLV(s).
        buf.put_u16(TLV_COMMON_SESS_PARAMS);
        buf.put_u16(14);
        buf.put_u16(self.protocol_version);
        buf.put_u16(self.keepalive_time);
        buf.put_u8(self.flags);
        buf.put_u8(self.path_vector_limit);
        buf.put_u16(self.max_pdu_length);
        self.receiver_id.encode(buf);

        // Encode retained TLV(s).
        self.tlvs.encode(buf);
    }

    fn decode_body(msg_id: u32, mut tlvs: TlvMap) -> DecodeResult<Message> {
        // Decode common TLV(s).
        let mut params = tlvs.pop(TLV_COMMON_SESS_PARAMS)?;
        if params.len() != 14 {
            return Err(DecodeError::InvalidTlvLength(params.len() as u16));
        }
        let protocol_version = params.try_get_u16()?;
        let keepalive_time = params.try_get_u16()?;
        let flags = params.try_get_u8()?;
        let path_vector_limit = params.try_get_u8()?;
        let max_pdu_length = params.try_get_u16()?;
        let receiver_id = Identifier::decode(&mut params)?;

        Ok(InitMsg {
            msg_id,
            protocol_version,
            keepalive_time,
            flags,
            path_vector_limit,
            max_pdu_length,
            receiver_id,
            tlvs,
        }
        .into())
    }
}
