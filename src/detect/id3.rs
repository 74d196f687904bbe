// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ID3v2 tags precede the actual audio frame sync in most MP3 files. This module only answers
//! "how far past the tag does the real content start", leaving the signature match itself to
//! [`crate::detect::mpeg_audio`].

use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, SyncSafeU32, Token, Tokenizer};

const HEADER_LEN: u64 = 10;

/// The outcome of checking for an ID3v2 tag at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipResult {
    /// No `"ID3"` magic at this position.
    NoTag,
    /// A tag was found and fits within the source; detection should resume at this position.
    SkipTo(u64),
    /// A tag was found but its declared size runs past the end of the source. There is no
    /// trustworthy position to resume the cascade at, so the caller reports `mp3` directly.
    ExceedsSize,
}

/// Inspects `base` for an ID3v2 header and reports how the caller should proceed.
pub fn skip<S: ByteSource>(tok: &mut Tokenizer<S>, base: u64) -> Result<SkipResult> {
    let mut hdr = [0u8; HEADER_LEN as usize];
    let opts = ReadOptions { position: Some(base), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut hdr, opts)?;
    if n < HEADER_LEN as usize || &hdr[0..3] != b"ID3" {
        return Ok(SkipResult::NoTag);
    }

    let tag_size = SyncSafeU32::decode(&hdr[6..10]) as u64;
    let after = base + HEADER_LEN + tag_size;

    if let Some(total) = tok.size() {
        if after > total {
            return Ok(SkipResult::ExceedsSize);
        }
    }

    Ok(SkipResult::SkipTo(after))
}
