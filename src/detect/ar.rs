// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unix `ar` archives, and Debian packages (an `ar` archive whose first member is
//! `debian-binary`).

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const MAGIC: &[u8; 8] = b"!<arch>\n";
const FIRST_MEMBER_NAME_LEN: usize = 16;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 8 || &sample[..8] != MAGIC {
        return Ok(None);
    }

    let mut name = [0u8; FIRST_MEMBER_NAME_LEN];
    let opts =
        ReadOptions { position: Some(base + 8), may_be_less: true, ..Default::default() };
    if tok.peek_buffer(&mut name, opts).is_ok() {
        let name = String::from_utf8_lossy(&name);
        if name.trim_end().starts_with("debian-binary") {
            return Ok(Some(FileType::new(Extension::Deb)));
        }
    }

    Ok(Some(FileType::new(Extension::Ar)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::from_buffer;

    fn with_member(name: &str) -> Vec<u8> {
        let mut bytes = MAGIC.to_vec();
        let mut padded = name.as_bytes().to_vec();
        padded.resize(FIRST_MEMBER_NAME_LEN, b' ');
        bytes.extend_from_slice(&padded);
        bytes
    }

    #[test]
    fn debian_binary_member_is_deb() {
        let bytes = with_member("debian-binary");
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..8].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext,Extension::Deb);
    }

    #[test]
    fn plain_ar_archive() {
        let bytes = with_member("object.o");
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..8].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext,Extension::Ar);
    }
}
