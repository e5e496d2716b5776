//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use enum_as_inner::EnumAsInner;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::messages::{
    AddressMsg, GenericMsg, HelloMsg, InitMsg, KeepaliveMsg, LabelMappingMsg,
    NotifMsg,
};
use crate::packet::tlv::TlvMap;

//
// LDP message.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Message Type              |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                                                               |
// +                     TLVs                                      +
// |                                                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Debug, EnumAsInner, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum Message {
    Notification(NotifMsg),
    Hello(HelloMsg),
    Initialization(InitMsg),
    Keepalive(KeepaliveMsg),
    Address(AddressMsg),
    LabelMapping(LabelMappingMsg),
    Generic(GenericMsg),
}

// LDP message types.
//
// IANA registry:
// https://www.iana.org/assignments/ldp-namespaces/ldp-namespaces.xhtml#ldp-namespaces-2
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum MessageType {
    Notification = 0x0001,
    Hello = 0x0100,
    Initialization = 0x0200,
    Keepalive = 0x0201,
    Address = 0x0300,
    LabelMapping = 0x0400,
}

// Message body decoder: message ID plus the already-framed TLV collection.
pub type DecodeFn = fn(u32, TlvMap) -> DecodeResult<Message>;

//
// Message decoder dispatch table.
//
// Built once at startup and passed by reference into the codecs; message
// types without a registered decoder fall back to `Generic`, which keeps
// every TLV uninterpreted.
//
#[derive(Debug)]
pub struct DecoderTable(Vec<(u16, DecodeFn)>);

pub trait MessageKind: std::fmt::Debug {
    fn msg_id(&self) -> u32;

    fn msg_type(&self) -> u16;

    // Encodes the message body TLVs: the common TLVs owned by the variant
    // are synthesized fresh from its typed fields, in canonical order,
    // before the retained TLVs.
    fn encode_tlvs(&self, buf: &mut BytesMut);

    fn decode_body(msg_id: u32, tlvs: TlvMap) -> DecodeResult<Message>
    where
        Self: Sized;
}

// ===== impl Message =====

impl Message {
    pub const HDR_SIZE: usize = 4;

    pub fn msg_id(&self) -> u32 {
        match self {
            Message::Notification(msg) => msg.msg_id(),
            Message::Hello(msg) => msg.msg_id(),
            Message::Initialization(msg) => msg.msg_id(),
            Message::Keepalive(msg) => msg.msg_id(),
            Message::Address(msg) => msg.msg_id(),
            Message::LabelMapping(msg) => msg.msg_id(),
            Message::Generic(msg) => msg.msg_id(),
        }
    }

    pub fn msg_type(&self) -> u16 {
        match self {
            Message::Notification(msg) => msg.msg_type(),
            Message::Hello(msg) => msg.msg_type(),
            Message::Initialization(msg) => msg.msg_type(),
            Message::Keepalive(msg) => msg.msg_type(),
            Message::Address(msg) => msg.msg_type(),
            Message::LabelMapping(msg) => msg.msg_type(),
            Message::Generic(msg) => msg.msg_type(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        let start_pos = buf.len();

        buf.put_u16(self.msg_type());
        // The message length will be rewritten later.
        buf.put_u16(0);
        buf.put_u32(self.msg_id());
        self.encode_tlvs(buf);

        // Rewrite message length.
        let msg_len = (buf.len() - start_pos - Message::HDR_SIZE) as u16;
        buf[start_pos + 2..start_pos + 4]
            .copy_from_slice(&msg_len.to_be_bytes());
    }

    // Decodes one complete message record produced by the framer.
    pub fn decode(
        record: Bytes,
        decoders: &DecoderTable,
    ) -> DecodeResult<Message> {
        let mut buf = record;

        // Parse message header.
        let msg_type = buf.try_get_u16()?;
        let msg_len = buf.try_get_u16()?;
        if msg_len as usize != buf.len() {
            return Err(DecodeError::LengthMismatch {
                declared: msg_len,
                actual: buf.len(),
            });
        }

        // Parse message ID and TLVs.
        let msg_id = buf.try_get_u32()?;
        let tlvs = TlvMap::decode(buf)?;

        // Dispatch on the message type.
        match decoders.get(msg_type) {
            Some(decode) => decode(msg_id, tlvs),
            None => Ok(GenericMsg::new(msg_type, msg_id, tlvs).into()),
        }
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        match self {
            Message::Notification(msg) => msg.encode_tlvs(buf),
            Message::Hello(msg) => msg.encode_tlvs(buf),
            Message::Initialization(msg) => msg.encode_tlvs(buf),
            Message::Keepalive(msg) => msg.encode_tlvs(buf),
            Message::Address(msg) => msg.encode_tlvs(buf),
            Message::LabelMapping(msg) => msg.encode_tlvs(buf),
            Message::Generic(msg) => msg.encode_tlvs(buf),
        }
    }
}

//
// Type conversion functions.
//

impl From<NotifMsg> for Message {
    fn from(msg: NotifMsg) -> Message {
        Message::Notification(msg)
    }
}

impl From<HelloMsg> for Message {
    fn from(msg: HelloMsg) -> Message {
        Message::Hello(msg)
    }
}

impl From<InitMsg> for Message {
    fn from(msg: InitMsg) -> Message {
        Message::Initialization(msg)
    }
}

impl From<KeepaliveMsg> for Message {
    fn from(msg: KeepaliveMsg) -> Message {
        Message::Keepalive(msg)
    }
}

impl From<AddressMsg> for Message {
    fn from(msg: AddressMsg) -> Message {
        Message::Address(msg)
    }
}

impl From<LabelMappingMsg> for Message {
    fn from(msg: LabelMappingMsg) -> Message {
        Message::LabelMapping(msg)
    }
}

impl From<GenericMsg> for Message {
    fn from(msg: GenericMsg) -> Message {
        Message::Generic(msg)
    }
}

// ===== impl MessageType =====

impl MessageType {
    pub fn decode(value: u16) -> Option<MessageType> {
        MessageType::from_u16(value)
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Notification => write!(f, "Notification"),
            MessageType::Hello => write!(f, "Hello"),
            MessageType::Initialization => write!(f, "Initialization"),
            MessageType::Keepalive => write!(f, "KeepAlive"),
            MessageType::Address => write!(f, "Address"),
            MessageType::LabelMapping => write!(f, "Label Mapping"),
        }
    }
}

// ===== impl DecoderTable =====

impl DecoderTable {
    // The standard decoder set: every typed message variant.
    pub fn standard() -> DecoderTable {
        DecoderTable(vec![
            (MessageType::Notification as u16, NotifMsg::decode_body),
            (MessageType::Hello as u16, HelloMsg::decode_body),
            (MessageType::Initialization as u16, InitMsg::decode_body),
            (MessageType::Keepalive as u16, KeepaliveMsg::decode_body),
            (MessageType::Address as u16, AddressMsg::decode_body),
            (MessageType::LabelMapping as u16, LabelMappingMsg::decode_body),
        ])
    }

    pub fn get(&self, msg_type: u16) -> Option<DecodeFn> {
        self.0
            .iter()
            .find(|(registered, _)| *registered == msg_type)
            .map(|(_, decode)| *decode)
    }
}
