//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::BytesMut;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::packet::error::DecodeResult;
use crate::packet::message::{Message, MessageKind, MessageType};
use crate::packet::tlv::TlvMap;

// Keepalive Message.
//
// No common TLVs; any optional TLVs are carried verbatim.
#[derive(Clone, Debug, Default, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct KeepaliveMsg {
    pub msg_id: u32,
    pub tlvs: TlvMap,
}

// ===== impl KeepaliveMsg =====

impl MessageKind for KeepaliveMsg {
    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> u16 {
        MessageType::Keepalive as u16
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        self.tlvs.encode(buf);
    }

    fn decode_body(msg_id: u32, tlvs: TlvMap) -> DecodeResult<Message> {
        Ok(KeepaliveMsg { msg_id, tlvs }.into())
    }
}
