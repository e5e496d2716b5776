//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::TryGetError;
use serde::{Deserialize, Serialize};

// Type aliases.
pub type DecodeResult<T> = Result<T, DecodeError>;

// LDP decode errors.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DecodeError {
    ReadOutOfBounds,
    // Record framing
    TruncatedStream { expected: usize, available: usize },
    // TLV
    LengthMismatch { declared: u16, actual: usize },
    InvalidTlvLength(u16),
    MissingRequiredTlv(u16),
    // Message-specific errors
    UnsupportedAddressFamily(u16),
    UnsupportedFecType(u8),
    InvalidPrefixLength(u8),
}

// ===== impl DecodeError =====

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::ReadOutOfBounds => {
                write!(f, "attempt to read out of bounds")
            }
            DecodeError::TruncatedStream {
                expected,
                available,
            } => {
                write!(
                    f,
                    "stream ended mid-record: expected {expected} bytes, got {available}"
                )
            }
            DecodeError::LengthMismatch { declared, actual } => {
                write!(
                    f,
                    "TLV length mismatch: declared {declared}, actual {actual}"
                )
            }
            DecodeError::InvalidTlvLength(len) => {
                write!(f, "invalid TLV length: {len}")
            }
            DecodeError::MissingRequiredTlv(tlv_type) => {
                write!(f, "missing required TLV: 0x{tlv_type:04x}")
            }
            DecodeError::UnsupportedAddressFamily(af) => {
                write!(f, "unsupported address family: {af}")
            }
            DecodeError::UnsupportedFecType(fec) => {
                write!(f, "unsupported FEC element type: {fec}")
            }
            DecodeError::InvalidPrefixLength(plen) => {
                write!(f, "invalid prefix length: {plen}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<TryGetError> for DecodeError {
    fn from(_error: TryGetError) -> DecodeError {
        DecodeError::ReadOutOfBounds
    }
}
