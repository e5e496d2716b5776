//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tracing::{Instrument, debug, debug_span, info};

use crate::error::{Error, IoError};
use crate::network;
use crate::packet::{DecoderTable, Framer, Identifier, Pdu};
use crate::session::{Session, SessionConfig, State};

// PDUs on a TCP stream carry their body length at offset 2, measured from
// just past the length field.
const PDU_FRAMER: Framer = Framer::new(4, 2, 0);

// ===== global functions =====

pub(crate) fn listen_socket(
    addr: Ipv4Addr,
) -> Result<TcpListener, std::io::Error> {
    // Create and bind socket.
    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_nonblocking(true)?;
    socket.set_reuse_address(true)?;
    let sockaddr = SocketAddr::from((addr, network::LDP_PORT));
    socket.bind(&sockaddr.into())?;
    socket.listen(1024)?;

    // Set socket options.
    socket.set_tos_v4(libc::IPTOS_PREC_INTERNETCONTROL as u32)?;

    TcpListener::from_std(socket.into())
}

pub(crate) async fn listen_loop(
    listener: TcpListener,
    local_id: Identifier,
    config: SessionConfig,
    decoders: Arc<DecoderTable>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        let result = tokio::select! {
            result = listener.accept() => result,
            _ = shutdown_rx.changed() => return,
        };
        match result {
            Ok((stream, raddr)) => {
                info!(address = %raddr, "connection accepted");
                let span = debug_span!("neighbor", addr = %raddr);
                tokio::task::spawn(
                    session_loop(
                        stream,
                        raddr,
                        local_id,
                        config.clone(),
                        decoders.clone(),
                        shutdown_rx.clone(),
                    )
                    .instrument(span),
                );
            }
            Err(error) => {
                IoError::TcpAcceptError(error).log();
            }
        }
    }
}

// Runs one session over its TCP connection: reads PDUs, feeds their messages
// to the state machine and writes the replies back, until the peer closes
// the connection or the session is rejected.
async fn session_loop(
    stream: TcpStream,
    raddr: SocketAddr,
    local_id: Identifier,
    config: SessionConfig,
    decoders: Arc<DecoderTable>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let (mut read_half, mut write_half) = stream.into_split();
    let mut session: Option<Session> = None;

    loop {
        // Read the next PDU record from the stream.
        let record = tokio::select! {
            record = PDU_FRAMER.read_record(&mut read_half) => record,
            _ = shutdown_rx.changed() => return,
        };
        let record = match record {
            Ok(Some(record)) => record,
            // The peer closed the connection at a PDU boundary.
            Ok(None) => {
                debug!("connection closed");
                return;
            }
            Err(error) => {
                Error::NbrPduDecodeError(raddr, error).log();
                return;
            }
        };

        // Decode PDU.
        let pdu = match Pdu::decode(&record, &decoders) {
            Ok(pdu) => pdu,
            Err(error) => {
                Error::NbrPduDecodeError(raddr, error).log();
                return;
            }
        };

        // The session is identified by the first PDU's sender.
        let session = session.get_or_insert_with(|| {
            debug!(sender = %pdu.sender, "session created");
            Session::new(local_id, pdu.sender, config.clone())
        });

        // Run each received message through the state machine, grouping the
        // replies into a single PDU.
        let mut reply = Pdu::new(local_id);
        for msg in &pdu.messages {
            reply.messages.extend(session.message_received(msg));
        }
        if !reply.messages.is_empty() {
            let buf = reply.encode();
            if let Err(error) = write_half.write_all(&buf).await {
                IoError::TcpSendError(error).log();
                return;
            }
        }

        if session.state() == State::Nonexistent {
            Error::NbrSessionRejected(raddr).log();
            return;
        }
    }
}
