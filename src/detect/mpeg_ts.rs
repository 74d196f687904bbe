// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MPEG transport stream detection: a `0x47` sync byte recurring every 188 bytes (or, for BDAV
//! streams carrying a 4-byte timestamp prefix per packet, every 192 bytes starting at offset 4).
//! A single matching byte is not enough signal on its own, so this checks a run of four packets.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const SYNC_BYTE: u8 = 0x47;
const PACKET_LEN: usize = 188;
const BDAV_PREFIX: usize = 4;
const RUN_LENGTH: usize = 4;

pub fn detect<S: ByteSource>(
    _sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    let window_len = (BDAV_PREFIX + PACKET_LEN) * RUN_LENGTH;
    let mut buf = vec![0u8; window_len];
    let opts = ReadOptions { position: Some(base), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut buf, opts)?;
    buf.truncate(n);

    if has_sync_cadence(&buf, 0, PACKET_LEN) || has_sync_cadence(&buf, BDAV_PREFIX, PACKET_LEN + BDAV_PREFIX)
    {
        return Ok(Some(FileType::new(Extension::Mts)));
    }

    Ok(None)
}

fn has_sync_cadence(buf: &[u8], start: usize, stride: usize) -> bool {
    let last = start + stride * (RUN_LENGTH - 1);
    if buf.len() <= last {
        return false;
    }
    (0..RUN_LENGTH).all(|i| buf[start + stride * i] == SYNC_BYTE)
}
