//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::BytesMut;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::packet::tlv::TlvMap;

// Fallback for message types without a registered decoder.
//
// All TLVs are preserved uninterpreted, so unrecognized messages can be
// re-encoded and passed through without loss.
#[derive(Clone, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct GenericMsg {
    pub msg_type: u16,
    pub msg_id: u32,
    pub tlvs: TlvMap,
}

// ===== impl GenericMsg =====

impl GenericMsg {
    pub fn msg_id(&self) -> u32 {
        self.msg_id
    }

    pub fn msg_type(&self) -> u16 {
        self.msg_type
    }

    pub fn encode_tlvs(&self, buf: &mut BytesMut) {
        self.tlvs.encode(buf);
    }
}
