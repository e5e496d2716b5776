//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, LazyLock as Lazy};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::debug;

use crate::error::{Error, IoError};
use crate::network;
use crate::packet::{
    DecoderTable, HelloFlags, HelloMsg, Identifier, Message, Pdu, TlvMap,
};

// All routers on this subnet multicast address.
pub static LDP_MCAST_ADDR: Lazy<Ipv4Addr> =
    Lazy::new(|| Ipv4Addr::from_str("224.0.0.2").unwrap());
pub static LDP_MCAST_SOCKADDR: Lazy<SocketAddr> = Lazy::new(|| {
    SocketAddr::new(IpAddr::V4(*LDP_MCAST_ADDR), network::LDP_PORT)
});

// ===== global functions =====

pub(crate) fn discovery_socket(
    addr: Ipv4Addr,
) -> Result<UdpSocket, std::io::Error> {
    // Create and bind socket.
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_nonblocking(true)?;
    socket.set_reuse_address(true)?;
    let sockaddr =
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, network::LDP_PORT));
    socket.bind(&sockaddr.into())?;

    // Set socket options.
    socket.set_multicast_loop_v4(false)?;
    socket.set_multicast_ttl_v4(1)?;
    socket.set_tos_v4(libc::IPTOS_PREC_INTERNETCONTROL as u32)?;
    socket.join_multicast_v4(&LDP_MCAST_ADDR, &addr)?;

    UdpSocket::from_std(socket.into())
}

// Sends a multicast Hello at every tick until shutdown.
pub(crate) async fn hello_loop(
    socket: Arc<UdpSocket>,
    local_id: Identifier,
    holdtime: u16,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut msg_id = 0;
    let mut interval = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = shutdown_rx.changed() => return,
        }

        // Encode Hello PDU.
        msg_id += 1;
        let mut pdu = Pdu::new(local_id);
        pdu.messages.push_back(
            HelloMsg::new(msg_id, holdtime, HelloFlags::empty(), TlvMap::new())
                .into(),
        );
        let buf = pdu.encode();

        // Send packet.
        if let Err(error) = socket.send_to(&buf, *LDP_MCAST_SOCKADDR).await {
            IoError::UdpSendError(error).log();
        }
    }
}

// Receives multicast Hellos from neighbors and logs them.
pub(crate) async fn read_loop(
    socket: Arc<UdpSocket>,
    local_addr: Ipv4Addr,
    decoders: Arc<DecoderTable>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut buf = [0; 4096];

    loop {
        // Receive data from the network.
        let result = tokio::select! {
            result = socket.recv_from(&mut buf) => result,
            _ = shutdown_rx.changed() => return,
        };
        let (num_bytes, src) = match result {
            Ok((num_bytes, src)) => (num_bytes, src),
            Err(error) => {
                IoError::UdpRecvError(error).log();
                continue;
            }
        };

        // Ignore our own Hellos.
        if src.ip() == IpAddr::V4(local_addr) {
            continue;
        }

        // Decode packet.
        match Pdu::decode(&buf[0..num_bytes], &decoders) {
            Ok(pdu) => {
                for msg in &pdu.messages {
                    if let Message::Hello(hello) = msg {
                        debug!(
                            source = %src.ip(),
                            sender = %pdu.sender,
                            holdtime = %hello.holdtime,
                            "hello received"
                        );
                    }
                }
            }
            Err(error) => {
                Error::UdpPduDecodeError(src.ip(), error).log();
            }
        }
    }
}
