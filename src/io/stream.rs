// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A [`ByteSource`] backed by a one-shot [`std::io::Read`]. Bytes are pulled from the inner reader
//! on demand and held in a small lookahead buffer so that `peek` can observe data before it is
//! logically consumed by `read`. The lookahead buffer is strictly FIFO with respect to the
//! underlying reader's emission order: whatever was peeked is exactly what a subsequent `read`
//! will return.

use std::io::Read;

use crate::errors::{end_of_stream, invalid_position, Result};
use crate::io::source::ByteSource;

/// The largest single pull performed against the inner reader per call; larger requests loop.
const MAX_PULL: usize = 1024 * 1024;

/// A forward-only byte source over any [`std::io::Read`].
///
/// Callers must not overlap concurrent reads on the same source (there is no internal
/// synchronization); this mirrors the single-logical-task contract in the tokenizer above it.
pub struct StreamSource<R: Read> {
    reader: R,
    /// Bytes already pulled from `reader` but not yet consumed by `read`. `lookahead[0]`
    /// corresponds to absolute stream offset `consumed`.
    lookahead: Vec<u8>,
    /// Number of bytes returned to callers via `read` so far.
    consumed: u64,
    /// Set once the inner reader has reported end-of-stream.
    exhausted: bool,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        StreamSource { reader, lookahead: Vec::new(), consumed: 0, exhausted: false }
    }

    /// Pulls from the inner reader until the lookahead buffer holds at least `total` bytes, or
    /// the reader is exhausted.
    fn ensure(&mut self, total: usize) -> Result<()> {
        while self.lookahead.len() < total && !self.exhausted {
            let want = (total - self.lookahead.len()).min(MAX_PULL);
            let start = self.lookahead.len();
            self.lookahead.resize(start + want, 0);

            let n = self.reader.read(&mut self.lookahead[start..])?;

            self.lookahead.truncate(start + n);

            if n == 0 {
                self.exhausted = true;
            }
        }
        Ok(())
    }

    /// Discards `count` bytes from the front of the logical stream, pulling more data if the
    /// lookahead buffer does not already contain enough.
    fn discard(&mut self, count: u64) -> Result<u64> {
        self.ensure(count as usize)?;
        let actual = (count as usize).min(self.lookahead.len()) as u64;
        self.lookahead.drain(0..actual as usize);
        self.consumed += actual;
        Ok(actual)
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read(&mut self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize> {
        if offset < self.consumed {
            return invalid_position();
        }
        if offset > self.consumed {
            self.discard(offset - self.consumed)?;
        }

        self.ensure(dst.len())?;

        let len = dst.len().min(self.lookahead.len());
        dst[..len].copy_from_slice(&self.lookahead[..len]);
        self.lookahead.drain(0..len);
        self.consumed += len as u64;

        if len < dst.len() && !may_be_less {
            return end_of_stream();
        }

        Ok(len)
    }

    fn peek(&mut self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize> {
        if offset < self.consumed {
            return invalid_position();
        }

        let delta = (offset - self.consumed) as usize;
        self.ensure(delta + dst.len())?;

        let available = self.lookahead.len().saturating_sub(delta);
        let len = dst.len().min(available);
        dst[..len].copy_from_slice(&self.lookahead[delta..delta + len]);

        if len < dst.len() && !may_be_less {
            return end_of_stream();
        }

        Ok(len)
    }

    fn size(&self) -> Option<u64> {
        None
    }
}
