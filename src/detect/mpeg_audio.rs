// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MPEG audio frame sync detection: ADTS AAC, and the MPEG-1 Layer I/II/III family. Both share
//! the same 12-bit `0xFFF` sync pattern; the following bits distinguish ADTS framing from a
//! classic MPEG audio frame header, and the layer bits pick MP1 vs MP2 vs MP3.

use crate::catalog::{Extension, FileType};

pub fn detect(sample: &[u8]) -> Option<FileType> {
    if sample.len() < 2 || sample[0] != 0xFF {
        return None;
    }

    let b1 = sample[1];

    // ADTS: sync (12 bits) + MPEG version (1) + layer (2, always 00) + protection_absent (1).
    if b1 & 0xF6 == 0xF0 {
        return Some(FileType::new(Extension::Aac));
    }

    // Classic MPEG audio frame header: sync (11 bits) + version (2) + layer (2) + protection (1).
    if b1 & 0xE0 != 0xE0 {
        return None;
    }

    let layer = (b1 >> 1) & 0x03;
    let ext = match layer {
        0b11 => Extension::Mp1,
        0b10 => Extension::Mp2,
        0b01 => Extension::Mp3,
        _ => return None,
    };

    Some(FileType::new(ext))
}
