// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ogg page header parsing, telling the codec family apart by the first packet's own magic: Opus,
//! Vorbis/FLAC audio, Theora/OGM video, or Speex.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const PAGE_HEADER_LEN: usize = 27;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 4 || &sample[..4] != b"OggS" {
        return Ok(None);
    }

    let mut hdr = [0u8; PAGE_HEADER_LEN];
    tok.peek_buffer(&mut hdr, at(base))?;
    let num_segments = hdr[26] as u64;

    let payload_start = base + PAGE_HEADER_LEN as u64 + num_segments;

    let mut codec = [0u8; 8];
    let n = tok.peek_buffer(&mut codec, at(payload_start))?;

    Ok(Some(FileType::new(classify_codec(&codec[..n]))))
}

fn at(position: u64) -> ReadOptions {
    ReadOptions { position: Some(position), may_be_less: true, ..Default::default() }
}

fn classify_codec(codec: &[u8]) -> Extension {
    if codec.starts_with(b"OpusHead") {
        Extension::Opus
    } else if codec.starts_with(b"\x80theora") {
        Extension::Ogv
    } else if codec.starts_with(b"\x01video") {
        Extension::Ogm
    } else if codec.starts_with(b"Speex") {
        Extension::Spx
    } else if codec.starts_with(b"\x7fFLAC") {
        Extension::Oga
    } else if codec.starts_with(b"\x01vorbis") {
        Extension::Ogg
    } else {
        Extension::Ogx
    }
}
