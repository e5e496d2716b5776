//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::VecDeque;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::packet::Identifier;
use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{DecoderTable, Message};
use crate::packet::tlv::INNER_FRAMER;

//
// LDP PDU.
//
// Each LDP PDU is an LDP header followed by zero or more LDP messages.
// The LDP header is:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Version                      |         PDU Length            |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                         LDP Identifier                        |
// +                               +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Pdu {
    pub version: u16,
    pub sender: Identifier,
    pub messages: VecDeque<Message>,
}

// ===== impl Pdu =====

impl Pdu {
    pub const VERSION: u16 = 1;
    pub const HDR_SIZE: usize = 10;

    pub fn new(sender: Identifier) -> Pdu {
        Pdu {
            version: Pdu::VERSION,
            sender,
            messages: VecDeque::new(),
        }
    }

    pub fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::new();

        // Encode PDU header.
        buf.put_u16(self.version);
        // The length will be rewritten later.
        buf.put_u16(0);
        self.sender.encode(&mut buf);

        // Encode messages.
        for msg in &self.messages {
            msg.encode(&mut buf);
        }

        // Rewrite PDU length.
        let pdu_len = (buf.len() - 4) as u16;
        buf[2..4].copy_from_slice(&pdu_len.to_be_bytes());

        buf
    }

    // Decodes a buffer holding one complete PDU.
    pub fn decode(
        data: &[u8],
        decoders: &DecoderTable,
    ) -> DecodeResult<Pdu> {
        // Decode PDU header.
        let mut buf = Bytes::copy_from_slice(data);
        let version = buf.try_get_u16()?;
        let pdu_len = buf.try_get_u16()?;
        let sender = Identifier::decode(&mut buf)?;
        let mut pdu = Pdu {
            version,
            sender,
            messages: VecDeque::new(),
        };

        // Decode messages from the PDU body.
        let body_len = (pdu_len as usize)
            .checked_sub(Identifier::LENGTH)
            .ok_or(DecodeError::ReadOutOfBounds)?;
        if buf.len() < body_len {
            return Err(DecodeError::TruncatedStream {
                expected: Pdu::HDR_SIZE + body_len,
                available: Pdu::HDR_SIZE + buf.len(),
            });
        }
        let body = buf.slice(0..body_len);
        for record in INNER_FRAMER.records(body) {
            pdu.messages.push_back(Message::decode(record?, decoders)?);
        }

        Ok(pdu)
    }
}
