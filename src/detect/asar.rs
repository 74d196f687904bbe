// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Electron's ASAR archive format: a Pickle-framed header (a fixed `04 00 00 00` magic followed by
//! two nested 4-byte little-endian length prefixes) followed by a JSON object whose top-level
//! `files` key is the only structural promise worth checking. Any parse failure here just means
//! "not ASAR", never a hard error.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const HEADER_LEN: usize = 16;
const PICKLE_MAGIC: [u8; 4] = [0x04, 0x00, 0x00, 0x00];
const MAX_JSON_PEEK: u64 = 4096;
const MAX_JSON_LEN: u64 = 1_000_000;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < HEADER_LEN || sample[..4] != PICKLE_MAGIC {
        return Ok(None);
    }

    let mut hdr = [0u8; HEADER_LEN];
    let opts = ReadOptions { position: Some(base), may_be_less: true, ..Default::default() };
    tok.peek_buffer(&mut hdr, opts)?;

    let json_len = u32::from_le_bytes(hdr[12..16].try_into().unwrap()) as u64;
    if json_len <= 12 || json_len > MAX_JSON_LEN {
        return Ok(None);
    }

    let mut json = vec![0u8; json_len.min(MAX_JSON_PEEK) as usize];
    let opts = ReadOptions {
        position: Some(base + HEADER_LEN as u64),
        may_be_less: true,
        ..Default::default()
    };
    tok.peek_buffer(&mut json, opts)?;

    let text = match std::str::from_utf8(&json) {
        Ok(text) => text,
        Err(_) => return Ok(None),
    };
    if text.trim_start().starts_with('{') && text.contains("\"files\"") {
        Ok(Some(FileType::new(Extension::Asar)))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::from_buffer;

    fn asar_blob(json: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&PICKLE_MAGIC);
        bytes.extend_from_slice(&(json.len() as u32 + 4).to_le_bytes());
        bytes.extend_from_slice(&(json.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&(json.len() as u32).to_le_bytes());
        bytes.extend_from_slice(json.as_bytes());
        bytes
    }

    #[test]
    fn json_with_files_key_is_detected() {
        let bytes = asar_blob(r#"{"files":{"a.txt":{"size":1}}}"#);
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..HEADER_LEN].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext, Extension::Asar);
    }

    #[test]
    fn json_without_files_key_is_rejected() {
        let bytes = asar_blob(r#"{"other":1}"#);
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..HEADER_LEN].to_vec();
        assert!(detect(&sample, &mut tok, 0).unwrap().is_none());
    }

    #[test]
    fn missing_pickle_magic_is_rejected_even_with_plausible_json_len() {
        let mut bytes = asar_blob(r#"{"files":{}}"#);
        bytes[0..4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..HEADER_LEN].to_vec();
        assert!(detect(&sample, &mut tok, 0).unwrap().is_none());
    }

    #[test]
    fn garbage_header_is_rejected_without_panicking() {
        let bytes = vec![0xFFu8; 32];
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..HEADER_LEN].to_vec();
        assert!(detect(&sample, &mut tok, 0).unwrap().is_none());
    }
}
