// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `source` module defines [`ByteSource`], the uniform read/peek interface shared by a
//! memory-backed source and a one-shot stream-backed source.

use crate::errors::Result;

/// A logical, finite (or unbounded) sequence of octets.
///
/// Once end-of-stream is reached, further reads either fail with [`crate::errors::DetectError::EndOfStream`]
/// (when `may_be_less` is false) or return fewer bytes than requested (when it is true).
pub trait ByteSource {
    /// Fills up to `dst.len()` bytes starting at absolute `offset`, returning the number of bytes
    /// actually read. `n < dst.len()` is only permitted at end-of-stream, and only when
    /// `may_be_less` is true; otherwise a short read raises `EndOfStream`.
    fn read(&mut self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize>;

    /// Identical to `read`, but the bytes remain observable by subsequent reads/peeks at the same
    /// or lower absolute offsets (for sources that support it).
    fn peek(&mut self, dst: &mut [u8], offset: u64, may_be_less: bool) -> Result<usize>;

    /// The total size of the source in bytes, if known in advance.
    fn size(&self) -> Option<u64>;
}
