// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! EBML/Matroska detection: walks the EBML header element looking for the `DocType` string that
//! tells `matroska` and `webm` apart.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];
const DOCTYPE_ID: u32 = 0x4282;
const WINDOW: usize = 512;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 4 || sample[..4] != EBML_MAGIC {
        return Ok(None);
    }

    let mut window = vec![0u8; WINDOW];
    let opts = ReadOptions { position: Some(base), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut window, opts)?;
    window.truncate(n);

    Ok(parse_doctype(&window))
}

fn parse_doctype(window: &[u8]) -> Option<FileType> {
    let mut pos = 4usize;
    let header_size = read_vint(window, &mut pos)?;
    let end = (pos + header_size as usize).min(window.len());

    while pos < end {
        let tag = read_tag(window, &mut pos)?;
        let size = read_vint(window, &mut pos)?;

        if tag == DOCTYPE_ID {
            let stop = (pos + size as usize).min(window.len());
            let doctype = window.get(pos..stop)?;
            return Some(FileType::new(match doctype {
                b"webm" => Extension::Webm,
                _ => Extension::Mkv,
            }));
        }

        pos += size as usize;
    }

    Some(FileType::new(Extension::Mkv))
}

/// Reads a single EBML element ID (RFC 8794); unlike a size vint, the marker bit is kept as part
/// of the ID's value.
fn read_tag(buf: &[u8], pos: &mut usize) -> Option<u32> {
    let byte = read_u8(buf, pos)?;
    let width = byte.leading_zeros();
    if width > 3 {
        return None;
    }
    let mut tag = byte as u32;
    for _ in 0..width {
        tag = (tag << 8) | read_u8(buf, pos)? as u32;
    }
    Some(tag)
}

/// Reads a single unsigned variable-size integer (RFC 8794), clearing the marker bit.
fn read_vint(buf: &[u8], pos: &mut usize) -> Option<u64> {
    let byte = read_u8(buf, pos)?;
    if byte == 0xFF {
        return Some(u64::MAX);
    }
    let width = byte.leading_zeros();
    if width > 7 {
        return None;
    }
    let mut vint = (byte as u64) ^ (1 << (7 - width));
    for _ in 0..width {
        vint = (vint << 8) | read_u8(buf, pos)? as u64;
    }
    Some(vint)
}

fn read_u8(buf: &[u8], pos: &mut usize) -> Option<u8> {
    let byte = *buf.get(*pos)?;
    *pos += 1;
    Some(byte)
}
