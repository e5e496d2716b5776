//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod address;
pub mod generic;
pub mod hello;
pub mod initialization;
pub mod keepalive;
pub mod label;
pub mod notification;

pub use address::AddressMsg;
pub use generic::GenericMsg;
pub use hello::{HelloFlags, HelloMsg};
pub use initialization::InitMsg;
pub use keepalive::KeepaliveMsg;
pub use label::LabelMappingMsg;
pub use notification::NotifMsg;

// The only address family this prototype speaks.
pub const AF_IPV4: u16 = 1;
