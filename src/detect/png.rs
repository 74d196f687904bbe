// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PNG chunk-chain walk. A PNG carrying an `acTL` chunk before its first `IDAT` is an animated PNG
//! (APNG); the rest of the chunk format is identical.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const MAX_CHUNKS: usize = 128;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 8 || sample[..8] != SIGNATURE {
        return Ok(None);
    }

    let mut pos = base + 8;
    let mut saw_actl = false;

    for _ in 0..MAX_CHUNKS {
        let mut hdr = [0u8; 8];
        let opts = ReadOptions { position: Some(pos), may_be_less: true, ..Default::default() };
        let n = tok.peek_buffer(&mut hdr, opts)?;
        if n < 8 {
            break;
        }

        // The chunk length is read with sign: a high-bit-set value is corrupt, not an enormous
        // chunk, and aborts detection rather than driving a runaway skip.
        let len = i32::from_be_bytes([hdr[0], hdr[1], hdr[2], hdr[3]]);
        if len < 0 {
            return Ok(None);
        }
        let len = len as u64;

        match &hdr[4..8] {
            b"acTL" => saw_actl = true,
            b"IDAT" => {
                let ext = if saw_actl { Extension::Apng } else { Extension::Png };
                return Ok(Some(FileType::new(ext)));
            }
            b"IEND" => break,
            _ => {}
        }

        pos += 8 + len + 4; // length + type/data + crc
    }

    Ok(Some(FileType::new(Extension::Png)))
}
