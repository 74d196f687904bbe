// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ASF (Advanced Systems Format) header-object walk: a Stream Properties object's stream-type GUID
//! tells video (WMV) apart from audio (WMA); a header with neither is reported as plain ASF.

use crate::catalog::{Extension, FileType};
use crate::errors::Result;
use crate::io::{ByteSource, ReadOptions, Tokenizer};

const ASF_HEADER_GUID: [u8; 16] = [
    0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];
const STREAM_PROPERTIES_GUID: [u8; 16] = [
    0x91, 0x07, 0xDC, 0xB7, 0xB7, 0xA9, 0xCF, 0x11, 0x8E, 0xE6, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
];
const VIDEO_MEDIA_GUID: [u8; 16] = [
    0xC0, 0xEF, 0x19, 0xBC, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44, 0x2B,
];
const AUDIO_MEDIA_GUID: [u8; 16] = [
    0x40, 0x9E, 0x69, 0xF8, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44, 0x2B,
];

/// Header objects never declare more than this much data; larger declared sizes are clamped to
/// the window actually sampled rather than trusted outright.
const MAX_HEADER_PEEK: usize = 4096;
const OBJECT_HEADER_LEN: usize = 24;

pub fn detect<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if sample.len() < 16 || sample[..16] != ASF_HEADER_GUID {
        return Ok(None);
    }

    let mut buf = vec![0u8; MAX_HEADER_PEEK];
    let n = tok.peek_buffer(&mut buf, at(base))?;
    buf.truncate(n);
    if buf.len() < 30 {
        return Ok(Some(FileType::new(Extension::Asf)));
    }

    let declared_size = u64::from_le_bytes(buf[16..24].try_into().unwrap());
    let end = (declared_size.min(buf.len() as u64)) as usize;

    // Header: 16-byte GUID + 8-byte size + 4-byte object count + 2-byte reserved.
    let mut pos = 30usize;
    let mut found_audio = false;

    while pos + OBJECT_HEADER_LEN <= end {
        let guid = &buf[pos..pos + 16];
        let object_size = u64::from_le_bytes(buf[pos + 16..pos + 24].try_into().unwrap());

        if guid == STREAM_PROPERTIES_GUID {
            if let Some(stream_type) = buf.get(pos + OBJECT_HEADER_LEN..pos + OBJECT_HEADER_LEN + 16)
            {
                if stream_type == VIDEO_MEDIA_GUID {
                    return Ok(Some(FileType::new(Extension::Wmv)));
                }
                if stream_type == AUDIO_MEDIA_GUID {
                    found_audio = true;
                }
            }
        }

        if object_size < OBJECT_HEADER_LEN as u64 {
            break;
        }
        pos += object_size as usize;
    }

    if found_audio {
        return Ok(Some(FileType::new(Extension::Wma)));
    }

    Ok(Some(FileType::new(Extension::Asf)))
}

fn at(position: u64) -> ReadOptions {
    ReadOptions { position: Some(position), may_be_less: true, ..Default::default() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::from_buffer;

    fn header_with_object(guid: &[u8; 16], object_body: &[u8]) -> Vec<u8> {
        let mut buf = ASF_HEADER_GUID.to_vec();
        let object_count = 1u32;
        let object_size = (OBJECT_HEADER_LEN + object_body.len()) as u64;
        let total_size = 16 + 8 + 4 + 2 + object_size;

        buf.extend_from_slice(&total_size.to_le_bytes());
        buf.extend_from_slice(&object_count.to_le_bytes());
        buf.extend_from_slice(&[0u8; 2]);

        buf.extend_from_slice(guid);
        buf.extend_from_slice(&object_size.to_le_bytes());
        buf.extend_from_slice(object_body);
        buf
    }

    #[test]
    fn video_stream_properties_is_wmv() {
        let bytes = header_with_object(&STREAM_PROPERTIES_GUID, &VIDEO_MEDIA_GUID);
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..16].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext, Extension::Wmv);
    }

    #[test]
    fn audio_stream_properties_is_wma() {
        let bytes = header_with_object(&STREAM_PROPERTIES_GUID, &AUDIO_MEDIA_GUID);
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..16].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext, Extension::Wma);
    }

    #[test]
    fn no_video_or_audio_stream_falls_back_to_asf() {
        let bytes = header_with_object(&[0u8; 16], &[0u8; 16]);
        let mut tok = from_buffer(&bytes);
        let sample = bytes[..16].to_vec();
        assert_eq!(detect(&sample, &mut tok, 0).unwrap().unwrap().ext, Extension::Asf);
    }
}
