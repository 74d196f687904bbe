// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A [`ByteSource`] backed by an in-memory byte slice. Reads and peeks share a common path since
//! random access is free; there is no distinction between the two beyond the fact that neither
//! ever mutates the underlying slice.

use crate::errors::{end_of_stream, Result};
use crate::io::source::ByteSource;

/// An in-memory, random-access byte source.
pub struct MemorySource<'a> {
    buf: &'a [u8],
}

impl<'a> MemorySource<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        MemorySource { buf }
    }

    fn copy_from(&self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize> {
        let offset = offset as usize;

        if offset >= self.buf.len() {
            return if may_be_less || dst.is_empty() { Ok(0) } else { end_of_stream() };
        }

        let available = self.buf.len() - offset;
        let len = dst.len().min(available);

        dst[..len].copy_from_slice(&self.buf[offset..offset + len]);

        if len < dst.len() && !may_be_less {
            return end_of_stream();
        }

        Ok(len)
    }
}

impl ByteSource for MemorySource<'_> {
    fn read(&mut self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize> {
        self.copy_from(dst, offset, may_be_less)
    }

    fn peek(&mut self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize> {
        self.copy_from(dst, offset, may_be_less)
    }

    fn size(&self) -> Option<u64> {
        Some(self.buf.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_peek_agree() {
        let data = (0u8..200).collect::<Vec<_>>();
        let mut src = MemorySource::new(&data);

        let mut peeked = [0u8; 16];
        let mut read = [0u8; 16];

        assert_eq!(src.peek(&mut peeked, 10, false).unwrap(), 16);
        assert_eq!(src.read(&mut read, 10, false).unwrap(), 16);
        assert_eq!(peeked, read);
    }

    #[test]
    fn short_read_at_eof_with_may_be_less() {
        let data = [1u8, 2, 3];
        let mut src = MemorySource::new(&data);
        let mut dst = [0u8; 8];

        assert_eq!(src.read(&mut dst, 0, true).unwrap(), 3);
        assert_eq!(&dst[..3], &data[..]);
    }

    #[test]
    fn short_read_at_eof_without_may_be_less_fails() {
        let data = [1u8, 2, 3];
        let mut src = MemorySource::new(&data);
        let mut dst = [0u8; 8];

        assert!(src.read(&mut dst, 0, false).is_err());
    }

    #[test]
    fn read_past_end_returns_zero() {
        let data = [1u8, 2, 3];
        let mut src = MemorySource::new(&data);
        let mut dst = [0u8; 4];

        assert_eq!(src.read(&mut dst, 10, true).unwrap(), 0);
    }
}
