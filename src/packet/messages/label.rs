//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;

use bytes::{Buf, BufMut, BytesMut};
use derive_new::new;
use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{Message, MessageKind, MessageType};
use crate::packet::messages::AF_IPV4;
use crate::packet::tlv::{TLV_FEC, TLV_GENERIC_LABEL, TlvMap};

//
// Label Mapping Message.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Label Mapping (0x0400)    |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     FEC TLV                                   |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Label TLV                                 |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Optional Parameters                       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// Each FEC element inside the FEC TLV (0x0100) is a prefix element:
//
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Prefix (2)   |     Address Family            |     PreLen    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Prefix                                    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The prefix occupies the minimum number of whole bytes needed to hold
// `PreLen` bits; the decoder zero-pads it back to a full address.
//
#[derive(Clone, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct LabelMappingMsg {
    pub msg_id: u32,
    pub prefixes: Vec<Ipv4Network>,
    pub label: u32,
    pub tlvs: TlvMap,
}

// Prefix FEC element type.
//
// IANA registry:
// https://www.iana.org/assignments/ldp-namespaces/ldp-namespaces.xhtml#fec-type
pub const FEC_ELEMENT_PREFIX: u8 = 2;

// ===== impl LabelMappingMsg =====

impl MessageKind for LabelMappingMsg {
    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> u16 {
        MessageType::LabelMapping as u16
    }

    fn encode_tlvs(&self, buf: &mut BytesMut) {
        // Encode common TLV(s), FEC first.
        let start_pos = buf.len();
        buf.put_u16(TLV_FEC);
        // The TLV length will be rewritten later.
        buf.put_u16(0);
        for prefix in &self.prefixes {
            buf.put_u8(FEC_ELEMENT_PREFIX);
            buf.put_u16(AF_IPV4);
            buf.put_u8(prefix.prefix());
            let octets = prefix.ip().octets();
            buf.put_slice(&octets[..prefix_wire_len(prefix.prefix())]);
        }
        let tlv_len = (buf.len() - start_pos - 4) as u16;
        buf[start_pos + 2..start_pos + 4]
            .copy_from_slice(&tlv_len.to_be_bytes());

        buf.put_u16(TLV_GENERIC_LABEL);
        buf.put_u16(4);
        buf.put_u32(self.label);

        // Encode retained TLV(s).
        self.tlvs.encode(buf);
    }

    fn decode_body(msg_id: u32, mut tlvs: TlvMap) -> DecodeResult<Message> {
        // Decode common TLV(s).
        let mut fec = tlvs.pop(TLV_FEC)?;
        let mut prefixes = Vec::new();
        while !fec.is_empty() {
            prefixes.push(decode_fec_element(&mut fec)?);
        }

        let mut label = tlvs.pop(TLV_GENERIC_LABEL)?;
        if label.len() != 4 {
            return Err(DecodeError::InvalidTlvLength(label.len() as u16));
        }
        let label = label.try_get_u32()?;

        Ok(LabelMappingMsg {
            msg_id,
            prefixes,
            label,
            tlvs,
        }
        .into())
    }
}

// ===== global functions =====

fn decode_fec_element(buf: &mut bytes::Bytes) -> DecodeResult<Ipv4Network> {
    let elem_type = buf.try_get_u8()?;
    if elem_type != FEC_ELEMENT_PREFIX {
        return Err(DecodeError::UnsupportedFecType(elem_type));
    }

    let af = buf.try_get_u16()?;
    if af != AF_IPV4 {
        return Err(DecodeError::UnsupportedAddressFamily(af));
    }

    let plen = buf.try_get_u8()?;
    let plen_wire = prefix_wire_len(plen);
    if plen > 32 || buf.len() < plen_wire {
        return Err(DecodeError::InvalidPrefixLength(plen));
    }

    // Zero-pad the truncated network address back to 4 bytes.
    let mut octets = [0; 4];
    buf.copy_to_slice(&mut octets[..plen_wire]);
    Ipv4Network::new(Ipv4Addr::from(octets), plen)
        .map_err(|_| DecodeError::InvalidPrefixLength(plen))
}

// Calculate the number of bytes required to encode a prefix.
fn prefix_wire_len(plen: u8) -> usize {
    (plen as usize).div_ceil(8)
}
