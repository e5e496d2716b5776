//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod error;
pub mod framer;
pub mod message;
pub mod messages;
pub mod pdu;
pub mod tlv;

use std::net::Ipv4Addr;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
pub use error::*;
pub use framer::*;
pub use message::*;
pub use messages::*;
pub use pdu::*;
use serde::{Deserialize, Serialize};
pub use tlv::*;

//
// LDP identifier.
//
// Identifies an LDP speaker: a router ID plus the label space the speaker
// allocates labels from. Six bytes on the wire.
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                         Router ID                             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |      Label Space ID           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct Identifier {
    pub lsr_id: Ipv4Addr,
    pub lspace_id: u16,
}

// ===== impl Identifier =====

impl Identifier {
    pub const LENGTH: usize = 6;

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32(self.lsr_id.into());
        buf.put_u16(self.lspace_id);
    }

    pub fn decode(buf: &mut Bytes) -> DecodeResult<Identifier> {
        let lsr_id = Ipv4Addr::from(buf.try_get_u32()?);
        let lspace_id = buf.try_get_u16()?;
        Ok(Identifier { lsr_id, lspace_id })
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.lsr_id, self.lspace_id)
    }
}
