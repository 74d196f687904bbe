// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The cascading signature dispatcher. [`detect`] peels off a BOM and an ID3v2 tag if present,
//! then runs every format's detector in priority order against a progressively larger sample,
//! escalating the sample size only when the cheaper, smaller window wasn't enough to decide.

mod ar;
mod asar;
mod asf;
mod ebml;
mod id3;
mod iso_bmff;
mod jp2;
mod misc;
mod mpeg_audio;
mod mpeg_ts;
mod ogg;
mod pdf;
mod png;
mod riff;
mod tar;
mod tiff;
mod zip;

use log::trace;

use crate::catalog::{Extension, FileType};
use crate::errors::{is_end_of_stream, Result};
use crate::io::{ByteSource, ReadOptions, Tokenizer};
use misc::BomKind;

/// The initial, cheapest sample size: enough for every fixed-offset magic-number check.
const INITIAL_SAMPLE: usize = 12;

/// Sample sizes tried, in order, after the initial one — each only reached if everything at the
/// smaller size came up empty.
const ESCALATION_TIERS: &[usize] = &[24, 256, 512];

/// Runs the full cascade over `tok`, starting at its current position. Returns `Ok(None)` if
/// nothing in the catalog matches. `EndOfStream` anywhere in the cascade is caught here and
/// reported as `Ok(None)`; every other error (a genuine I/O failure, or a request for a position
/// behind the tokenizer's cursor) propagates to the caller.
pub fn detect<S: ByteSource>(tok: &mut Tokenizer<S>) -> Result<Option<FileType>> {
    match detect_inner(tok) {
        Ok(found) => Ok(found),
        Err(err) if is_end_of_stream(&err) => Ok(None),
        Err(err) => Err(err),
    }
}

fn detect_inner<S: ByteSource>(tok: &mut Tokenizer<S>) -> Result<Option<FileType>> {
    let origin = tok.position();

    let mut sample = peek_at(tok, origin, INITIAL_SAMPLE)?;
    if sample.len() < 2 {
        return Ok(None);
    }

    let mut start = origin;

    if let Some((skip, kind)) = misc::detect_bom(&sample) {
        start += skip as u64;

        // A UTF-8 BOM re-enters the whole cascade from the new position. UTF-16/32 BOMs only ever
        // precede an XML declaration or a SketchUp model header in this catalog, so they run a
        // narrow probe instead of the full dispatch table.
        if kind == BomKind::Utf16OrUtf32 {
            let probe_sample = peek_at(tok, start, ESCALATION_TIERS[1])?;
            return Ok(misc::probe_utf16_xml_or_sketchup(&probe_sample));
        }

        sample = peek_at(tok, start, INITIAL_SAMPLE)?;
    }

    match id3::skip(tok, start)? {
        id3::SkipResult::NoTag => {}
        id3::SkipResult::SkipTo(after) => {
            start = after;
            sample = peek_at(tok, start, INITIAL_SAMPLE)?;
        }
        id3::SkipResult::ExceedsSize => return Ok(Some(FileType::new(Extension::Mp3))),
    }

    for &tier in std::iter::once(&INITIAL_SAMPLE).chain(ESCALATION_TIERS) {
        if sample.len() < tier {
            sample = peek_at(tok, start, tier)?;
        }

        if let Some(ft) = dispatch(&sample, tok, start)? {
            trace!("matched {:?} at offset {} with a {}-byte sample", ft.ext, start, sample.len());
            return Ok(Some(ft));
        }
    }

    Ok(None)
}

fn dispatch<S: ByteSource>(
    sample: &[u8],
    tok: &mut Tokenizer<S>,
    base: u64,
) -> Result<Option<FileType>> {
    if let Some(ft) = png::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = zip::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = iso_bmff::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = ebml::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = ogg::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = riff::detect(sample) {
        return Ok(Some(ft));
    }
    if let Some(ft) = tiff::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = asf::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = jp2::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = pdf::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = tar::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = ar::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = mpeg_audio::detect(sample) {
        return Ok(Some(ft));
    }
    if let Some(ft) = mpeg_ts::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    if let Some(ft) = asar::detect(sample, tok, base)? {
        return Ok(Some(ft));
    }
    Ok(misc::detect(sample))
}

fn peek_at<S: ByteSource>(tok: &mut Tokenizer<S>, position: u64, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    let opts = ReadOptions { position: Some(position), may_be_less: true, ..Default::default() };
    let n = tok.peek_buffer(&mut buf, opts)?;
    buf.truncate(n);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Extension;
    use crate::io::from_buffer;

    #[test]
    fn empty_and_single_byte_buffers_never_match() {
        assert!(detect(&mut from_buffer(&[])).unwrap().is_none());
        assert!(detect(&mut from_buffer(&[0x89])).unwrap().is_none());
    }

    #[test]
    fn png_signature_is_detected_end_to_end() {
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&[0u8; 13]);
        bytes.extend_from_slice(&[0u8; 4]);
        bytes.extend_from_slice(&1u32.to_be_bytes());
        bytes.extend_from_slice(b"IDAT");
        bytes.push(b'x');
        bytes.extend_from_slice(&[0u8; 4]);

        let mut tok = from_buffer(&bytes);
        assert_eq!(detect(&mut tok).unwrap().unwrap().ext, Extension::Png);
    }

    #[test]
    fn utf8_bom_is_peeled_before_dispatch() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"plain text content that matches nothing");
        let mut tok = from_buffer(&bytes);
        assert!(detect(&mut tok).unwrap().is_none());
    }

    #[test]
    fn utf16_le_bom_runs_only_the_xml_probe() {
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend_from_slice(&[0x3C, 0x00, 0x3F, 0x00, 0x78, 0x00, 0x6D, 0x00, 0x6C, 0x00]);
        let mut tok = from_buffer(&bytes);
        assert_eq!(detect(&mut tok).unwrap().unwrap().ext, Extension::Xml);
    }

    #[test]
    fn utf16_bom_with_no_xml_or_sketchup_marker_is_unknown() {
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend_from_slice(b"plain text content that matches nothing at all");
        let mut tok = from_buffer(&bytes);
        assert!(detect(&mut tok).unwrap().is_none());
    }

    #[test]
    fn oversized_id3_tag_falls_back_to_mp3() {
        use crate::io::{SyncSafeU32, Token};
        let mut bytes = b"ID3".to_vec();
        bytes.extend_from_slice(&[0x04, 0x00, 0x00]);
        bytes.extend_from_slice(&SyncSafeU32::encode(u32::MAX >> 4));
        bytes.extend_from_slice(&[0u8; 16]);

        let mut tok = from_buffer(&bytes);
        assert_eq!(detect(&mut tok).unwrap().unwrap().ext, Extension::Mp3);
    }
}
