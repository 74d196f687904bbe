// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TIFF and the raw photo formats built on it. BigTIFF is told apart by its version field alone;
//! CR2 and NEF by fixed markers gated on the IFD0 offset being large enough to hold them; ARW and
//! DNG by walking IFD0 for their defining tag.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const LITTLE_MARK: [u8; 2] = [0x49, 0x49];
const BIG_MARK: [u8; 2] = [0x4D, 0x4D];
const BIGTIFF_VERSION: u16 = 43;
const CLASSIC_VERSION: u16 = 42;
const TAG_ARW: u16 = 50341;
const TAG_DNG_VERSION: u16 = 50706;
const NEF_MARKERS: [[u8; 4]; 2] = [[0x1C, 0x00, 0xFE, 0x00], [0x1F, 0x00, 0x0B, 0x00]];
const MAX_IFD_ENTRIES: u64 = 64;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 4 {
        return Ok(None);
    }

    let little = sample[..2] == LITTLE_MARK;
    let big = sample[..2] == BIG_MARK;
    if !little && !big {
        return Ok(None);
    }

    let mut hdr = [0u8; 12];
    let n = tok.peek_buffer(&mut hdr, at(base))?;
    if n < 8 {
        return Ok(None);
    }

    let version = read_u16(&hdr[2..4], little);
    if version == BIGTIFF_VERSION {
        return Ok(Some(FileType::new(Extension::Tif)));
    }
    if version != CLASSIC_VERSION {
        return Ok(None);
    }

    let ifd_offset = read_u32(&hdr[4..8], little) as u64;

    if ifd_offset >= 6 && n >= 10 && &hdr[8..10] == b"CR" {
        return Ok(Some(FileType::new(Extension::Cr2)));
    }
    if ifd_offset >= 8 && n >= 12 && NEF_MARKERS.iter().any(|m| hdr[8..12] == *m) {
        return Ok(Some(FileType::new(Extension::Nef)));
    }

    let mut count_buf = [0u8; 2];
    tok.peek_buffer(&mut count_buf, at(base + ifd_offset))?;
    let count = (read_u16(&count_buf, little) as u64).min(MAX_IFD_ENTRIES);

    let mut entries = vec![0u8; (count * 12) as usize];
    tok.peek_buffer(&mut entries, at(base + ifd_offset + 2))?;

    for entry in entries.chunks_exact(12) {
        let tag = read_u16(&entry[0..2], little);
        if tag == TAG_ARW {
            return Ok(Some(FileType::new(Extension::Arw)));
        }
        if tag == TAG_DNG_VERSION {
            return Ok(Some(FileType::new(Extension::Dng)));
        }
    }

    Ok(Some(FileType::new(Extension::Tif)))
}

fn at(position: u64) -> ReadOptions {
    ReadOptions { position: Some(position), may_be_less: true, ..Default::default() }
}

fn read_u16(buf: &[u8], little: bool) -> u16 {
    let bytes = [buf[0], buf[1]];
    if little {
        u16::from_le_bytes(bytes)
    } else {
        u16::from_be_bytes(bytes)
    }
}

fn read_u32(buf: &[u8], little: bool) -> u32 {
    let bytes = [buf[0], buf[1], buf[2], buf[3]];
    if little {
        u32::from_le_bytes(bytes)
    } else {
        u32::from_be_bytes(bytes)
    }
}
