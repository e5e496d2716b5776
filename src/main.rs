//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::path::Path;

use clap::{App, Arg};
use ldpd::config::Config;
use ldpd::server;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("ldpd=debug".parse().unwrap())
        .from_env_lossy();
    let stdout = tracing_subscriber::fmt::layer().with_target(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout)
        .init();
}

fn signal_listener() -> mpsc::Receiver<()> {
    let (signal_tx, signal_rx) = mpsc::channel(1);

    tokio::task::spawn(async move {
        let mut sigint = signal(SignalKind::interrupt()).unwrap();
        let mut sigterm = signal(SignalKind::terminate()).unwrap();

        tokio::select! {
            _ = sigint.recv() => {
                info!("received SIGINT");
                let _ = signal_tx.send(()).await;
            },
            _ = sigterm.recv() => {
                info!("received SIGTERM");
                let _ = signal_tx.send(()).await;
            }
        }
    });

    signal_rx
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("LDP speaker")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Specify an alternative configuration file."),
        )
        .get_matches();

    // Read configuration file.
    let config = match matches.value_of("config") {
        Some(path) => match Config::load(Path::new(path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    // Initialize tracing.
    init_tracing();

    // We're ready to go!
    info!("starting up");

    // Main loop.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create async runtime")
        .block_on(async {
            // Spawn signal listener.
            let signal_rx = signal_listener();

            if let Err(error) = server::run(config, signal_rx).await {
                error.log();
                std::process::exit(1);
            }
        });

    info!("exiting");
}
