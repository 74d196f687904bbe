// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JPEG 2000 family detection via the signature box followed by the file type box's brand.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const SIGNATURE_BOX: [u8; 12] =
    [0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A];

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 12 || sample[..12] != SIGNATURE_BOX {
        return Ok(None);
    }

    let mut buf = [0u8; 12];
    let opts =
        ReadOptions { position: Some(base + 12), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut buf, opts)?;
    if n < 12 || &buf[4..8] != b"ftyp" {
        return Ok(Some(FileType::new(Extension::Jp2)));
    }

    let ext = match &buf[8..12] {
        b"jpx " => Extension::Jpx,
        b"jpm " => Extension::Jpm,
        b"mjp2" => Extension::Mj2,
        _ => Extension::Jp2,
    };
    Ok(Some(FileType::new(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::from_buffer;

    fn jp2_with_brand(brand: &[u8; 4]) -> Vec<u8> {
        let mut bytes = SIGNATURE_BOX.to_vec();
        bytes.extend_from_slice(&20u32.to_be_bytes());
        bytes.extend_from_slice(b"ftyp");
        bytes.extend_from_slice(brand);
        bytes.extend_from_slice(&[0u8; 8]);
        bytes
    }

    #[test]
    fn jpx_brand_is_detected() {
        let bytes = jp2_with_brand(b"jpx ");
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..12].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext,Extension::Jpx);
    }

    #[test]
    fn plain_jp2_brand() {
        let bytes = jp2_with_brand(b"jp2 ");
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..12].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext,Extension::Jp2);
    }
}
