//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::{IpAddr, SocketAddr};

use tracing::{error, warn, warn_span};

use crate::packet::error::DecodeError;

// Runtime errors.
#[derive(Debug)]
pub enum Error {
    IoError(IoError),
    UdpPduDecodeError(IpAddr, DecodeError),
    NbrPduDecodeError(SocketAddr, DecodeError),
    NbrSessionRejected(SocketAddr),
}

// I/O errors.
#[derive(Debug)]
pub enum IoError {
    UdpSocketError(std::io::Error),
    UdpRecvError(std::io::Error),
    UdpSendError(std::io::Error),
    TcpSocketError(std::io::Error),
    TcpAcceptError(std::io::Error),
    TcpSendError(std::io::Error),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::IoError(error) => {
                error.log();
            }
            Error::UdpPduDecodeError(addr, error) => {
                warn!(address = %addr, %error, "{}", self);
            }
            Error::NbrPduDecodeError(addr, error) => {
                warn_span!("neighbor", %addr).in_scope(|| {
                    warn!(%error, "{}", self);
                });
            }
            Error::NbrSessionRejected(addr) => {
                warn_span!("neighbor", %addr).in_scope(|| {
                    warn!("{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IoError(error) => error.fmt(f),
            Error::UdpPduDecodeError(..) => {
                write!(f, "failed to decode hello PDU")
            }
            Error::NbrPduDecodeError(..) => {
                write!(f, "failed to decode PDU")
            }
            Error::NbrSessionRejected(..) => {
                write!(f, "session rejected, closing connection")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

// ===== impl IoError =====

impl IoError {
    pub fn log(&self) {
        match self {
            IoError::UdpSocketError(error)
            | IoError::TcpSocketError(error) => {
                error!(error = %error, "{}", self);
            }
            IoError::UdpRecvError(error)
            | IoError::UdpSendError(error)
            | IoError::TcpAcceptError(error)
            | IoError::TcpSendError(error) => {
                warn!(error = %error, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::UdpSocketError(..) => {
                write!(f, "failed to create UDP socket")
            }
            IoError::UdpRecvError(..) => {
                write!(f, "failed to receive UDP packet")
            }
            IoError::UdpSendError(..) => {
                write!(f, "failed to send UDP packet")
            }
            IoError::TcpSocketError(..) => {
                write!(f, "failed to create TCP socket")
            }
            IoError::TcpAcceptError(..) => {
                write!(f, "failed to accept connection request")
            }
            IoError::TcpSendError(..) => {
                write!(f, "failed to send TCP data")
            }
        }
    }
}

impl std::error::Error for IoError {}
