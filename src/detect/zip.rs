// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ZIP and the ZIP-based container family: OOXML (docx/xlsx/pptx), ODF (odt/ods/odp), EPUB, XPI,
//! and 3MF. All share the same local-file-header framing; they're told apart by the entry names
//! (and, for ODF/EPUB, the content of the first `mimetype` entry) found while walking it.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const LOCAL_FILE_HEADER: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
const EMPTY_ARCHIVE: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];
const MAX_ENTRIES: usize = 24;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 4 {
        return Ok(None);
    }
    if sample[..4] == EMPTY_ARCHIVE {
        return Ok(Some(FileType::new(Extension::Zip)));
    }
    if sample[..4] != LOCAL_FILE_HEADER {
        return Ok(None);
    }

    let mut pos = base;

    for _ in 0..MAX_ENTRIES {
        let mut hdr = [0u8; 30];
        let opts = at(pos);
        if tok.peek_buffer(&mut hdr, opts)? < 30 || hdr[..4] != LOCAL_FILE_HEADER {
            break;
        }

        let compressed_size = u32::from_le_bytes([hdr[18], hdr[19], hdr[20], hdr[21]]) as u64;
        let name_len = u16::from_le_bytes([hdr[26], hdr[27]]) as u64;
        let extra_len = u16::from_le_bytes([hdr[28], hdr[29]]) as u64;
        let data_pos = pos + 30 + name_len + extra_len;

        let mut name = vec![0u8; name_len as usize];
        tok.peek_buffer(&mut name, at(pos + 30))?;
        let name = String::from_utf8_lossy(&name).into_owned();

        if let Some(ft) = classify_name(&name) {
            return Ok(Some(ft));
        }

        if name == "mimetype" && compressed_size > 0 && compressed_size <= 64 {
            let mut mime = vec![0u8; compressed_size as usize];
            if tok.peek_buffer(&mut mime, at(data_pos)).is_ok() {
                if let Some(ft) = classify_mimetype(&mime) {
                    return Ok(Some(ft));
                }
            }
        }

        // A zero compressed size legitimately occurs for directory entries and entries using a
        // trailing data descriptor; either way the next local-file-header signature is the only
        // reliable resync point, so just keep walking from the nominal end of this entry's data.
        pos = data_pos + compressed_size;
    }

    Ok(Some(FileType::new(Extension::Zip)))
}

fn at(position: u64) -> ReadOptions {
    ReadOptions { position: Some(position), may_be_less: true, ..Default::default() }
}

fn classify_name(name: &str) -> Option<FileType> {
    match () {
        _ if name.starts_with("word/") => Some(FileType::new(Extension::Docx)),
        _ if name.starts_with("ppt/") => Some(FileType::new(Extension::Pptx)),
        _ if name.starts_with("xl/") => Some(FileType::new(Extension::Xlsx)),
        _ if name.starts_with("3D/3dmodel.model") => Some(FileType::new(Extension::ThreeMf)),
        _ if name == "install.rdf" || name == "manifest.json" => Some(FileType::new(Extension::Xpi)),
        _ => None,
    }
}

fn classify_mimetype(mime: &[u8]) -> Option<FileType> {
    match mime {
        b"application/epub+zip" => Some(FileType::new(Extension::Epub)),
        b"application/vnd.oasis.opendocument.text" => Some(FileType::new(Extension::Odt)),
        b"application/vnd.oasis.opendocument.spreadsheet" => Some(FileType::new(Extension::Ods)),
        b"application/vnd.oasis.opendocument.presentation" => Some(FileType::new(Extension::Odp)),
        _ => None,
    }
}
