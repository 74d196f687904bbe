// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PDF and Adobe Illustrator. Both start with a PDF or PostScript header; AI is told apart by a
//! substring planted further into the file by the exporter.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const SCAN_WINDOW: usize = 2048;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.starts_with(b"%PDF-") {
        let window = scan_window(tok, base)?;
        let ext = if contains(&window, b"AIPrivateData") { Extension::Ai } else { Extension::Pdf };
        return Ok(Some(FileType::new(ext)));
    }

    if sample.starts_with(b"%!PS-Adobe") {
        let window = scan_window(tok, base)?;
        let ext = if contains(&window, b"Adobe Illustrator") { Extension::Ai } else { Extension::Ps };
        return Ok(Some(FileType::new(ext)));
    }

    Ok(None)
}

fn scan_window<S: ByteSource>(tok: &mut Tokenizer<S>, base: u64) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; SCAN_WINDOW];
    let opts = ReadOptions { position: Some(base), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut buf, opts)?;
    buf.truncate(n);
    Ok(buf)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
