//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::framer::Framer;

//
// LDP Type-Length-Value.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |           Type                |            Length             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                                                               |
// |                             Value                             |
// ~                                                               ~
// |                               +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
pub const TLV_HDR_SIZE: usize = 4;

// TLV types interpreted by the typed message variants.
pub const TLV_FEC: u16 = 0x0100;
pub const TLV_ADDR_LIST: u16 = 0x0101;
pub const TLV_GENERIC_LABEL: u16 = 0x0200;
pub const TLV_STATUS: u16 = 0x0300;
pub const TLV_COMMON_HELLO_PARAMS: u16 = 0x0400;
pub const TLV_COMMON_SESS_PARAMS: u16 = 0x0500;

// Framing shape shared by messages within a PDU and TLVs within a message:
// 2-byte type, 2-byte length covering the body only.
pub const INNER_FRAMER: Framer = Framer::new(4, 2, 0);

// A single Type-Length-Value unit.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Tlv {
    pub tlv_type: u16,
    pub value: Bytes,
}

//
// Insertion-ordered TLV collection with unique keys.
//
// Messages carry their uninterpreted TLVs here so unrecognized attributes
// survive a parse/pack round trip verbatim. Re-inserting an existing type
// overwrites the value in place, preserving the original position.
//
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct TlvMap(Vec<Tlv>);

// ===== impl Tlv =====

impl Tlv {
    pub fn new(tlv_type: u16, value: impl Into<Bytes>) -> Tlv {
        Tlv {
            tlv_type,
            value: value.into(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u16(self.tlv_type);
        buf.put_u16(self.value.len() as u16);
        buf.put_slice(&self.value);
    }

    // Decodes one complete TLV record.
    //
    // The framer delivers exactly-sized records, so the declared-length
    // check here is a consistency guard rather than normal-path logic.
    pub fn decode(mut buf: Bytes) -> DecodeResult<Tlv> {
        let tlv_type = buf.try_get_u16()?;
        let tlv_len = buf.try_get_u16()?;
        if tlv_len as usize != buf.len() {
            return Err(DecodeError::LengthMismatch {
                declared: tlv_len,
                actual: buf.len(),
            });
        }

        Ok(Tlv {
            tlv_type,
            value: buf,
        })
    }
}

// ===== impl TlvMap =====

impl TlvMap {
    pub fn new() -> TlvMap {
        TlvMap::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, tlv_type: u16, value: impl Into<Bytes>) {
        let value = value.into();
        match self.0.iter_mut().find(|tlv| tlv.tlv_type == tlv_type) {
            Some(tlv) => tlv.value = value,
            None => self.0.push(Tlv::new(tlv_type, value)),
        }
    }

    pub fn get(&self, tlv_type: u16) -> Option<&Bytes> {
        self.0
            .iter()
            .find(|tlv| tlv.tlv_type == tlv_type)
            .map(|tlv| &tlv.value)
    }

    // Removes and returns a mandatory TLV.
    pub fn pop(&mut self, tlv_type: u16) -> DecodeResult<Bytes> {
        let pos = self
            .0
            .iter()
            .position(|tlv| tlv.tlv_type == tlv_type)
            .ok_or(DecodeError::MissingRequiredTlv(tlv_type))?;
        Ok(self.0.remove(pos).value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tlv> {
        self.0.iter()
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        for tlv in &self.0 {
            tlv.encode(buf);
        }
    }

    pub fn decode(buf: Bytes) -> DecodeResult<TlvMap> {
        let mut tlvs = TlvMap::new();
        for record in INNER_FRAMER.records(buf) {
            let tlv = Tlv::decode(record?)?;
            tlvs.insert(tlv.tlv_type, tlv.value);
        }
        Ok(tlvs)
    }
}

impl<const N: usize> From<[(u16, Bytes); N]> for TlvMap {
    fn from(entries: [(u16, Bytes); N]) -> TlvMap {
        let mut tlvs = TlvMap::new();
        for (tlv_type, value) in entries {
            tlvs.insert(tlv_type, value);
        }
        tlvs
    }
}
