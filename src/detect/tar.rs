// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! POSIX tar detection by header checksum: there is no fixed magic at offset 0, so the only
//! reliable signal is that the recorded checksum (an octal ASCII field) actually matches the sum
//! of the header bytes, with the checksum field itself treated as eight spaces while summing.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const HEADER_LEN: usize = 512;
const CHECKSUM_OFFSET: usize = 148;
const CHECKSUM_LEN: usize = 8;

pub fn detect<S: ByteSource>(
    _sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    let mut hdr = vec![0u8; HEADER_LEN];
    let opts = ReadOptions { position: Some(base), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut hdr, opts)?;
    if n < HEADER_LEN {
        return Ok(None);
    }

    let recorded = match parse_octal(&hdr[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN]) {
        Some(recorded) => recorded,
        None => return Ok(None),
    };

    let sum: u32 = hdr
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if (CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN).contains(&i) {
                0x20
            } else {
                b as u32
            }
        })
        .sum();

    if sum == recorded {
        Ok(Some(FileType::new(Extension::Tar)))
    } else {
        Ok(None)
    }
}

fn parse_octal(field: &[u8]) -> Option<u32> {
    let text = std::str::from_utf8(field).ok()?;
    let text = text.trim_matches(|c: char| c == '\0' || c == ' ');
    if text.is_empty() {
        return Some(0);
    }
    u32::from_str_radix(text, 8).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::from_buffer;

    fn valid_header() -> Vec<u8> {
        let mut hdr = vec![0u8; HEADER_LEN];
        hdr[0..8].copy_from_slice(b"file.txt");
        for b in hdr[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN].iter_mut() {
            *b = b' ';
        }
        let sum: u32 = hdr.iter().map(|&b| b as u32).sum();
        let octal = format!("{:06o}\0 ", sum);
        hdr[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN].copy_from_slice(octal.as_bytes());
        hdr
    }

    #[test]
    fn valid_checksum_is_detected_as_tar() {
        let bytes = valid_header();
        let mut tok = from_buffer(&bytes);
        assert_eq!(detect(&[], &mut tok, 0).unwrap().unwrap().ext, Extension::Tar);
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let mut bytes = valid_header();
        bytes[0] ^= 0xFF;
        let mut tok = from_buffer(&bytes);
        assert!(detect(&[], &mut tok, 0).unwrap().is_none());
    }
}
