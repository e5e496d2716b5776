//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;

use bytes::{Buf, BufMut, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{Message, MessageKind, MessageType};
use crate::packet::messages::AF_IPV4;
use crate::packet::tlv::{TLV_ADDR_LIST, TlvMap};

//
// Address Message.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Address (0x0300)          |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Address List TLV                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Optional Parameters                       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The Address List TLV (0x0101) is an address family word followed by the
// packed addresses of that family, repeating. Only IPv4 is supported.
//
#[derive(Clone, Debug, Default, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct AddressMsg {
    pub msg_id: u32,
    pub addresses: Vec<Ipv4Addr>,
    pub tlvs: TlvMap,
}

// ===== impl AddressMsg =====

impl MessageKind for AddressMsg {
    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> u16 {
        MessageType::Address as u16
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        // Encode common TLV(s).
        buf.put_u16(TLV_ADDR_LIST);
        buf.put_u16((2 + self.addresses.len() * 4) as u16);
        buf.put_u16(AF_IPV4);
        for addr in &self.addresses {
            buf.put_u32((*addr).into());
        }

        // Encode retained TLV(s).
        self.tlvs.encode(buf);
    }

    fn decode_body(msg_id: u32, mut tlvs: TlvMap) -> DecodeResult<Message> {
        // Decode common TLV(s).
        let mut addr_list = tlvs.pop(TLV_ADDR_LIST)?;
        let af = addr_list.try_get_u16()?;
        if af != AF_IPV4 {
            return Err(DecodeError::UnsupportedAddressFamily(af));
        }
        let mut addresses = Vec::with_capacity(addr_list.len() / 4);
        while !addr_list.is_empty() {
            addresses.push(Ipv4Addr::from(addr_list.try_get_u32()?));
        }

        Ok(AddressMsg {
            msg_id,
            addresses,
            tlvs,
        }
        .into())
    }
}
