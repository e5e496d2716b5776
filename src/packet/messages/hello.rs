//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bitflags::bitflags;
use bytes::{Buf, BufMut, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{Message, MessageKind, MessageType};
use crate::packet::tlv::{TLV_COMMON_HELLO_PARAMS, TlvMap};

//
// Hello Message.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Hello (0x0100)            |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Common Hello Parameters TLV               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Optional Parameters                       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The Common Hello Parameters TLV (0x0400) carries the hold time and the
// targeted/request-targeted flags:
//
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |      Hold Time                |T|R| Reserved                  |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Debug, Default, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct HelloMsg {
    pub msg_id: u32,
    pub holdtime: u16,
    pub flags: HelloFlags,
    pub tlvs: TlvMap,
}

bitflags! {
    // Reserved bits are retained so a parse/pack round trip is
    // byte-identical.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct HelloFlags: u16 {
        const TARGETED = 0x8000;
        const REQ_TARGETED = 0x4000;

        const _ = !0;
    }
}

// ===== impl HelloMsg =====

impl MessageKind for HelloMsg {
    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> u16 {
        MessageType::Hello as u16
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        // Encode common TLV(s).
        buf.put_u16(TLV_COMMON_HELLO_PARAMS);
        buf.put_u16(4);
        buf.put_u16(self.holdtime);
        buf.put_u16(self.flags.bits());

        // Encode retained TLV(s).
        self.tlvs.encode(buf);
    }

    fn decode_body(msg_id: u32, mut tlvs: TlvMap) -> DecodeResult<Message> {
        // Decode common TLV(s).
        let mut params = tlvs.pop(TLV_COMMON_HELLO_PARAMS)?;
        if params.len() != 4 {
            return Err(DecodeError::InvalidTlvLength(params.len() as u16));
        }
        let holdtime = params.try_get_u16()?;
        let flags = HelloFlags::from_bits_retain(params.try_get_u16()?);

        Ok(HelloMsg {
            msg_id,
            holdtime,
            flags,
            tlvs,
        }
        .into())
    }
}
