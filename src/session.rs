//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};

use crate::packet::messages::notification::STATUS_SESSION_REJECTED;
use crate::packet::{
    AddressMsg, Identifier, InitMsg, KeepaliveMsg, LabelMappingMsg, Message,
    NotifMsg, Pdu, TlvMap,
};

// Session states.
//
// A session is created per TCP connection and discarded when the connection
// closes; `Nonexistent` is terminal and `Operational` never returns to an
// earlier state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum State {
    Initialised,
    OpenRec,
    Operational,
    Nonexistent,
}

// Local parameters advertised during session establishment.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub keepalive_time: u16,
    // Contents of the Address and Label Mapping advertisements sent on the
    // first transition into Operational.
    pub addresses: Vec<Ipv4Addr>,
    pub mapping_prefixes: Vec<Ipv4Network>,
    pub mapping_label: u32,
}

//
// LDP session state machine.
//
// Pure with respect to the network: consumes one received message at a time
// and returns the ordered list of messages to send in response. All I/O is
// the connection driver's problem.
//
#[derive(Debug)]
pub struct Session {
    local_id: Identifier,
    remote_id: Identifier,
    state: State,
    sent_initial_routes: bool,
    next_msg_id: u32,
    config: SessionConfig,
}

// ===== impl State =====

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Initialised => write!(f, "initialised"),
            State::OpenRec => write!(f, "openrec"),
            State::Operational => write!(f, "operational"),
            State::Nonexistent => write!(f, "nonexistent"),
        }
    }
}

// ===== impl SessionConfig =====

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            keepalive_time: 180,
            addresses: vec![Ipv4Addr::new(10, 0, 0, 1)],
            mapping_prefixes: vec![
                Ipv4Network::from_str("10.0.0.0/24").unwrap(),
            ],
            mapping_label: 100,
        }
    }
}

// ===== impl Session =====

impl Session {
    pub fn new(
        local_id: Identifier,
        remote_id: Identifier,
        config: SessionConfig,
    ) -> Session {
        Session {
            local_id,
            remote_id,
            state: State::Initialised,
            sent_initial_routes: false,
            next_msg_id: 0,
            config,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn local_id(&self) -> Identifier {
        self.local_id
    }

    pub fn remote_id(&self) -> Identifier {
        self.remote_id
    }

    // Processes one received message, advancing the session state and
    // returning the messages to send back, in order.
    pub fn message_received(&mut self, msg: &Message) -> Vec<Message> {
        match (self.state, msg) {
            // Session establishment: answer the peer's Initialization with
            // our own session parameters.
            (State::Initialised, Message::Initialization(_)) => {
                self.state = State::OpenRec;
                let reply = InitMsg::new(
                    self.next_msg_id(),
                    Pdu::VERSION,
                    self.config.keepalive_time,
                    0,
                    0,
                    0,
                    self.remote_id,
                    TlvMap::new(),
                );
                vec![reply.into()]
            }
            // Anything else before the session is initialized is a protocol
            // violation: reject and refuse further transitions.
            (State::Initialised, _) => {
                self.state = State::Nonexistent;
                let notif = NotifMsg::new(
                    self.next_msg_id(),
                    true,
                    false,
                    STATUS_SESSION_REJECTED,
                    msg.msg_id(),
                    msg.msg_type(),
                    TlvMap::new(),
                );
                vec![notif.into()]
            }
            // The peer's first Keepalive completes establishment; advertise
            // our addresses and label bindings once.
            (State::OpenRec, Message::Keepalive(_)) => {
                self.state = State::Operational;
                let mut replies = vec![
                    KeepaliveMsg::new(self.next_msg_id(), TlvMap::new())
                        .into(),
                ];
                if !self.sent_initial_routes {
                    self.sent_initial_routes = true;
                    replies.push(
                        AddressMsg::new(
                            self.next_msg_id(),
                            self.config.addresses.clone(),
                            TlvMap::new(),
                        )
                        .into(),
                    );
                    replies.push(
                        LabelMappingMsg::new(
                            self.next_msg_id(),
                            self.config.mapping_prefixes.clone(),
                            self.config.mapping_label,
                            TlvMap::new(),
                        )
                        .into(),
                    );
                }
                replies
            }
            // Steady state: echo Keepalives.
            (State::Operational, Message::Keepalive(_)) => {
                vec![
                    KeepaliveMsg::new(self.next_msg_id(), TlvMap::new())
                        .into(),
                ]
            }
            // Messages the transition table leaves unspecified are ignored;
            // Nonexistent accepts nothing.
            _ => vec![],
        }
    }

    // Outbound message IDs are a monotonically increasing, session-scoped
    // counter.
    fn next_msg_id(&mut self) -> u32 {
        self.next_msg_id += 1;
        self.next_msg_id
    }
}
