// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The [`Tokenizer`] sits atop a [`ByteSource`] and adds a logical position cursor,
//! position-normalized read options, and token-typed reads.

use crate::errors::{end_of_stream, invalid_position, Result};
use crate::io::memory::MemorySource;
use crate::io::source::ByteSource;
use crate::io::stream::StreamSource;
use crate::io::token::Token;
use std::io::Read;

/// Position-normalized options for [`Tokenizer::read_buffer`] / [`Tokenizer::peek_buffer`].
///
/// `position`, when set, must be greater than or equal to the tokenizer's current position; a
/// lower value is a programmer error (`DetectError::InvalidPosition`).
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadOptions {
    pub offset: usize,
    pub length: Option<usize>,
    pub position: Option<u64>,
    pub may_be_less: bool,
}

impl ReadOptions {
    pub fn may_be_less() -> Self {
        ReadOptions { may_be_less: true, ..Default::default() }
    }

    pub fn at_position(position: u64) -> Self {
        ReadOptions { position: Some(position), ..Default::default() }
    }
}

/// A position-tracked cursor over a [`ByteSource`].
pub struct Tokenizer<S: ByteSource> {
    source: S,
    position: u64,
    /// Reused 8-byte scratch buffer backing `read_number`/`peek_number`, avoiding a fresh heap
    /// allocation for every numeric token read.
    scratch: [u8; 8],
}

impl<S: ByteSource> Tokenizer<S> {
    pub fn new(source: S) -> Self {
        Tokenizer { source, position: 0, scratch: [0u8; 8] }
    }

    /// The tokenizer's current logical position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The source's known total size, if any.
    pub fn size(&self) -> Option<u64> {
        self.source.size()
    }

    fn normalize(&self, opts: ReadOptions, dst_len: usize) -> Result<(u64, usize, usize)> {
        let position = opts.position.unwrap_or(self.position);

        if position < self.position {
            return invalid_position();
        }

        let length = opts.length.unwrap_or(dst_len.saturating_sub(opts.offset));
        Ok((position, opts.offset, length))
    }

    /// Reads into `dst[opts.offset..opts.offset+length]` at `opts.position` (defaulting to the
    /// current position), advancing the cursor by the number of bytes actually read.
    pub fn read_buffer(&mut self, dst: &mut [u8], opts: ReadOptions) -> Result<usize> {
        let (position, offset, length) = self.normalize(opts, dst.len())?;

        if position > self.position {
            self.ignore(position - self.position)?;
        }

        let n = self.source.read(&mut dst[offset..offset + length], self.position, opts.may_be_less)?;
        self.position += n as u64;
        Ok(n)
    }

    /// Peeks into `dst[opts.offset..opts.offset+length]` at `opts.position` (defaulting to the
    /// current position) without advancing the cursor.
    pub fn peek_buffer(&mut self, dst: &mut [u8], opts: ReadOptions) -> Result<usize> {
        let (position, offset, length) = self.normalize(opts, dst.len())?;
        self.source.peek(&mut dst[offset..offset + length], position, opts.may_be_less)
    }

    /// Reads a fixed-width token, advancing the cursor by `T::LEN` bytes.
    pub fn read_token<T: Token>(&mut self) -> Result<T::Value> {
        let mut buf = vec![0u8; T::LEN];
        let n = self.read_buffer(&mut buf, ReadOptions::default())?;
        if n < T::LEN {
            return end_of_stream();
        }
        Ok(T::decode(&buf))
    }

    /// Peeks a fixed-width token without advancing the cursor.
    pub fn peek_token<T: Token>(&mut self) -> Result<T::Value> {
        let mut buf = vec![0u8; T::LEN];
        let n = self.peek_buffer(&mut buf, ReadOptions::default())?;
        if n < T::LEN {
            return end_of_stream();
        }
        Ok(T::decode(&buf))
    }

    /// Peeks a fixed-width token at an explicit absolute position without advancing the cursor.
    pub fn peek_token_at<T: Token>(&mut self, position: u64) -> Result<T::Value> {
        let mut buf = vec![0u8; T::LEN];
        let n = self.peek_buffer(&mut buf, ReadOptions::at_position(position))?;
        if n < T::LEN {
            return end_of_stream();
        }
        Ok(T::decode(&buf))
    }

    /// Reads a numeric token using the embedded scratch buffer rather than a fresh allocation.
    pub fn read_number<T: Token>(&mut self) -> Result<T::Value> {
        let len = T::LEN;
        let mut local = self.scratch;
        let n = self.read_buffer(&mut local[..len], ReadOptions::default())?;
        self.scratch = local;
        if n < len {
            return end_of_stream();
        }
        Ok(T::decode(&local[..len]))
    }

    /// Peeks a numeric token using the embedded scratch buffer.
    pub fn peek_number<T: Token>(&mut self) -> Result<T::Value> {
        let len = T::LEN;
        let mut local = self.scratch;
        let n = self.peek_buffer(&mut local[..len], ReadOptions::default())?;
        self.scratch = local;
        if n < len {
            return end_of_stream();
        }
        Ok(T::decode(&local[..len]))
    }

    /// Advances the cursor by up to `length` bytes, clamping to the known remaining size.
    /// Returns the number of bytes actually skipped.
    ///
    /// This crate's `ByteSource::read`/`peek` take an explicit absolute offset (a generalization
    /// beyond the original spec's offset-less push stream), so the 256 KiB discard-scratch loop
    /// described there is unnecessary here: `StreamSource` already reconciles a forward jump in
    /// `offset` against its internal lookahead buffer the next time it is actually read from.
    /// `ignore` therefore only needs to move the logical cursor; the source catches up lazily.
    pub fn ignore(&mut self, length: u64) -> Result<u64> {
        let actual = match self.size() {
            Some(size) => length.min(size.saturating_sub(self.position)),
            None => length,
        };
        self.position += actual;
        Ok(actual)
    }

    /// Releases the underlying source. A no-op beyond normal `Drop` semantics, provided so callers
    /// can express the intent explicitly (mirroring the spec's `close()`).
    pub fn close(self) {}
}

/// A tokenizer over an in-memory byte slice.
pub type MemoryTokenizer<'a> = Tokenizer<MemorySource<'a>>;

/// A tokenizer over a one-shot `std::io::Read` stream.
pub type StreamTokenizer<R> = Tokenizer<StreamSource<R>>;

/// Constructs a tokenizer over an in-memory byte slice.
pub fn from_buffer(bytes: &[u8]) -> MemoryTokenizer<'_> {
    Tokenizer::new(MemorySource::new(bytes))
}

/// Constructs a tokenizer over a one-shot readable stream.
pub fn from_stream<R: Read>(reader: R) -> StreamTokenizer<R> {
    Tokenizer::new(StreamSource::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::token::{U16Be, U32Le};
    use std::io::Cursor;

    #[test]
    fn position_is_monotonic_across_reads() {
        let mut tok = from_buffer(&[0u8; 32]);
        let mut buf = [0u8; 8];
        assert_eq!(tok.position(), 0);
        tok.read_buffer(&mut buf, ReadOptions::default()).unwrap();
        assert_eq!(tok.position(), 8);
        tok.read_buffer(&mut buf, ReadOptions::default()).unwrap();
        assert_eq!(tok.position(), 16);
    }

    #[test]
    fn rejects_position_before_current() {
        let mut tok = from_buffer(&[0u8; 32]);
        let mut buf = [0u8; 8];
        tok.read_buffer(&mut buf, ReadOptions::default()).unwrap();
        let err = tok.read_buffer(&mut buf, ReadOptions::at_position(0));
        assert!(err.is_err());
    }

    #[test]
    fn read_token_advances_by_len() {
        let mut tok = from_buffer(&[0x12, 0x34, 0x56, 0x78]);
        let v = tok.read_token::<U16Be>().unwrap();
        assert_eq!(v, 0x1234);
        assert_eq!(tok.position(), 2);
        let v2 = tok.read_token::<U16Be>().unwrap();
        assert_eq!(v2, 0x5678);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut tok = from_buffer(&[0x78, 0x56, 0x34, 0x12]);
        let peeked = tok.peek_token::<U32Le>().unwrap();
        assert_eq!(tok.position(), 0);
        let read = tok.read_token::<U32Le>().unwrap();
        assert_eq!(peeked, read);
    }

    #[test]
    fn ignore_clamps_to_known_size() {
        let mut tok = from_buffer(&[0u8; 10]);
        let skipped = tok.ignore(100).unwrap();
        assert_eq!(skipped, 10);
        assert_eq!(tok.position(), 10);
    }

    #[test]
    fn stream_tokenizer_read_matches_memory_tokenizer() {
        let data: Vec<u8> = (0u8..=200).collect();
        let mut mem = from_buffer(&data);
        let mut stream = from_stream(Cursor::new(data.clone()));

        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        mem.read_buffer(&mut a, ReadOptions::default()).unwrap();
        stream.read_buffer(&mut b, ReadOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
