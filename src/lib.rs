//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod config;
pub mod error;
pub mod network;
pub mod packet;
pub mod routedb;
pub mod server;
pub mod session;
