//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::packet::error::{DecodeError, DecodeResult};

//
// Record framer.
//
// Splits a byte stream into discrete length-prefixed records. A record is a
// fixed-size header followed by a variable-size body whose length is declared
// by an unsigned big-endian integer embedded in the header:
//
//   |<------- header_len ------->|
//   +----------------+-----------+------------------------------+
//   |                | length    |            body              |
//   +----------------+-----------+------------------------------+
//   ^                ^
//   0                length_offset
//
// The body length is the declared length minus `length_adjustment`. Each
// produced record contains the header bytes followed by the body bytes.
//
// The same `(4, 2, 0)` shape frames PDUs on a TCP stream, messages inside a
// PDU body and TLVs inside a message body.
//
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Framer {
    header_len: usize,
    length_offset: usize,
    length_adjustment: usize,
}

// Iterator over the records of an in-memory buffer.
#[derive(Debug)]
pub struct Records {
    framer: Framer,
    buf: Bytes,
    failed: bool,
}

// ===== impl Framer =====

impl Framer {
    pub const fn new(
        header_len: usize,
        length_offset: usize,
        length_adjustment: usize,
    ) -> Framer {
        Framer {
            header_len,
            length_offset,
            length_adjustment,
        }
    }

    // Splits the next record off the front of `buf`.
    //
    // An empty buffer is clean exhaustion (`Ok(None)`). A buffer holding a
    // partial header or a partial body fails with `TruncatedStream`,
    // distinguishing "ended between records" from "ended mid-record".
    pub fn next_record(&self, buf: &mut Bytes) -> DecodeResult<Option<Bytes>> {
        if buf.is_empty() {
            return Ok(None);
        }
        if buf.len() < self.header_len {
            return Err(DecodeError::TruncatedStream {
                expected: self.header_len,
                available: buf.len(),
            });
        }

        let record_len = self.header_len
            + self.body_len(&buf[self.length_offset..self.header_len]);
        if buf.len() < record_len {
            return Err(DecodeError::TruncatedStream {
                expected: record_len,
                available: buf.len(),
            });
        }

        Ok(Some(buf.split_to(record_len)))
    }

    // Consumes `buf` into a lazy, non-restartable sequence of records.
    pub fn records(&self, buf: Bytes) -> Records {
        Records {
            framer: *self,
            buf,
            failed: false,
        }
    }

    // Reads the next record from an asynchronous byte stream.
    //
    // EOF at a record boundary is clean exhaustion (`Ok(None)`); EOF or an
    // I/O failure mid-record surfaces as `TruncatedStream`.
    pub async fn read_record<S>(
        &self,
        stream: &mut S,
    ) -> DecodeResult<Option<Bytes>>
    where
        S: AsyncRead + Unpin,
    {
        let mut record = BytesMut::zeroed(self.header_len);

        // Read the record header, treating EOF before the first byte as a
        // clean end of stream.
        let mut read = 0;
        while read < self.header_len {
            match stream.read(&mut record[read..]).await {
                Ok(0) if read == 0 => return Ok(None),
                Ok(0) | Err(_) => {
                    return Err(DecodeError::TruncatedStream {
                        expected: self.header_len,
                        available: read,
                    });
                }
                Ok(n) => read += n,
            }
        }

        // Read the record body.
        let body_len =
            self.body_len(&record[self.length_offset..self.header_len]);
        let record_len = self.header_len + body_len;
        record.resize(record_len, 0);
        while read < record_len {
            match stream.read(&mut record[read..]).await {
                Ok(0) | Err(_) => {
                    return Err(DecodeError::TruncatedStream {
                        expected: record_len,
                        available: read,
                    });
                }
                Ok(n) => read += n,
            }
        }

        Ok(Some(record.freeze()))
    }

    fn body_len(&self, length_field: &[u8]) -> usize {
        let declared = length_field
            .iter()
            .fold(0usize, |acc, &byte| (acc << 8) | byte as usize);
        declared.saturating_sub(self.length_adjustment)
    }
}

// ===== impl Records =====

impl Iterator for Records {
    type Item = DecodeResult<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.framer.next_record(&mut self.buf) {
            Ok(record) => record.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}
