// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ISO base media file format (`ftyp` box) brand detection: the MP4/QuickTime family, HEIF/HEIC,
//! AVIF, 3GPP, and Canon's CR3.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const MAX_BOX_PEEK: usize = 128;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 8 || &sample[4..8] != b"ftyp" {
        return Ok(None);
    }

    let mut buf = vec![0u8; MAX_BOX_PEEK];
    let n = tok.peek_buffer(&mut buf, at(base))?;
    buf.truncate(n);
    if buf.len() < 16 {
        return Ok(None);
    }

    let major = &buf[8..12];
    let mut i = 16;
    let mut brands = vec![major];
    while i + 4 <= buf.len() {
        brands.push(&buf[i..i + 4]);
        i += 4;
    }

    for brand in brands {
        if let Some(ext) = brand_to_ext(brand) {
            return Ok(Some(FileType::new(ext)));
        }
    }

    Ok(Some(FileType::new(Extension::Mp4)))
}

fn at(position: u64) -> ReadOptions {
    ReadOptions { position: Some(position), may_be_less: true, ..Default::default() }
}

fn brand_to_ext(brand: &[u8]) -> Option<Extension> {
    Some(match brand {
        b"avif" => Extension::Avif,
        b"avis" => Extension::Avis,
        b"mif1" | b"msf1" | b"heic" | b"heix" | b"hevc" | b"hevx" => Extension::Heic,
        b"qt  " => Extension::Mov,
        b"crx " => Extension::Cr3,
        b"3g2a" | b"3g2b" | b"3g2c" | b"KDDI" => Extension::ThreeG2,
        b"3gp1" | b"3gp2" | b"3gp3" | b"3gp4" | b"3gp5" | b"3gp6" | b"3ge6" | b"3ge7" | b"3gg6" => {
            Extension::ThreeGp
        }
        b"M4V " | b"M4VH" | b"M4VP" => Extension::M4v,
        b"M4P " => Extension::M4p,
        b"M4B " => Extension::M4b,
        b"M4A " => Extension::M4a,
        b"F4V " => Extension::F4v,
        b"F4P " => Extension::F4p,
        b"F4A " => Extension::F4a,
        b"F4B " => Extension::F4b,
        b"mp41" | b"mp42" | b"isom" | b"iso2" | b"iso4" | b"iso5" | b"iso6" | b"avc1" | b"mmp4"
        | b"MSNV" | b"dash" | b"NDAS" => Extension::Mp4,
        _ => return None,
    })
}
