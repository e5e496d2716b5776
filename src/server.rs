//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::config::Config;
use crate::error::{Error, IoError};
use crate::network::{tcp, udp};
use crate::packet::DecoderTable;

// Runs the LDP speaker until a shutdown signal arrives: multicast Hello
// discovery over UDP and one session task per accepted TCP connection.
pub async fn run(
    config: Config,
    mut signal_rx: mpsc::Receiver<()>,
) -> Result<(), Error> {
    let local_id = config.identifier();
    let decoders = Arc::new(DecoderTable::standard());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut tasks = Vec::new();

    // Start neighbor discovery.
    let socket = Arc::new(
        udp::discovery_socket(config.address)
            .map_err(IoError::UdpSocketError)?,
    );
    tasks.push(tokio::task::spawn(udp::hello_loop(
        socket.clone(),
        local_id,
        config.hello_holdtime,
        Duration::from_secs(config.hello_interval),
        shutdown_rx.clone(),
    )));
    tasks.push(tokio::task::spawn(udp::read_loop(
        socket,
        config.address,
        decoders.clone(),
        shutdown_rx.clone(),
    )));

    // Start accepting sessions.
    let listener = tcp::listen_socket(config.address)
        .map_err(IoError::TcpSocketError)?;
    tasks.push(tokio::task::spawn(tcp::listen_loop(
        listener,
        local_id,
        config.session_config(),
        decoders,
        shutdown_rx,
    )));
    info!(lsr_id = %local_id, "speaker running");

    // Wait for a shutdown request, then stop all tasks.
    signal_rx.recv().await;
    let _ = shutdown_tx.send(true);
    for task in tasks {
        let _ = task.await;
    }

    Ok(())
}
