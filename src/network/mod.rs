//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod tcp;
pub mod udp;

pub const LDP_PORT: u16 = 646;
