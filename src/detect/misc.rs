// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Byte-order-mark peeling and the catch-all formats that are identified by a fixed marker at a
//! fixed (sometimes deep) offset rather than by a structural walk: embedded OpenType fonts,
//! InDesign documents, DICOM, Windows shortcuts, macOS aliases, MOBI ebooks, Scream Tracker
//! modules, and ESRI shapefiles.

use crate::catalog::{Extension, FileType};

/// Which family of byte-order mark was found at the start of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    /// UTF-8: the entire cascade re-enters from the position just past the mark.
    Utf8,
    /// UTF-16 or UTF-32: only the narrow XML/SketchUp probe below runs from here.
    Utf16OrUtf32,
}

/// Returns the length and kind of a recognized byte-order mark at the start of `sample`, if any.
/// Longer marks are checked first since UTF-32LE's mark is a byte-for-byte prefix of UTF-16LE's.
pub fn detect_bom(sample: &[u8]) -> Option<(usize, BomKind)> {
    if sample.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some((3, BomKind::Utf8));
    }
    if sample.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) || sample.starts_with(&[0xFF, 0xFE, 0x00, 0x00])
    {
        return Some((4, BomKind::Utf16OrUtf32));
    }
    if sample.starts_with(&[0xFE, 0xFF]) || sample.starts_with(&[0xFF, 0xFE]) {
        return Some((2, BomKind::Utf16OrUtf32));
    }
    None
}

/// A UTF-16LE-encoded `<?xml` declaration opener.
const XML_DECL_UTF16_LE: [u8; 10] = [0x3C, 0x00, 0x3F, 0x00, 0x78, 0x00, 0x6D, 0x00, 0x6C, 0x00];
/// A UTF-16BE-encoded `<?xml` declaration opener.
const XML_DECL_UTF16_BE: [u8; 10] = [0x00, 0x3C, 0x00, 0x3F, 0x00, 0x78, 0x00, 0x6D, 0x00, 0x6C];
const SKETCHUP_MARKER: &[u8] = b"SketchUp Model";

/// Runs once a UTF-16/32 BOM has been peeled: the only two formats worth naming are a
/// UTF-16-encoded XML declaration and a SketchUp model's ASCII marker planted in its header.
/// Anything else is reported as unrecognized rather than falling through to the main cascade.
pub fn probe_utf16_xml_or_sketchup(sample: &[u8]) -> Option<FileType> {
    if sample.starts_with(&XML_DECL_UTF16_LE) || sample.starts_with(&XML_DECL_UTF16_BE) {
        return Some(FileType::new(Extension::Xml));
    }
    if sample.len() >= SKETCHUP_MARKER.len() && sample.windows(SKETCHUP_MARKER.len()).any(|w| w == SKETCHUP_MARKER)
    {
        return Some(FileType::new(Extension::Skp));
    }
    None
}

const INDD_MAGIC: [u8; 16] = [
    0x06, 0x06, 0xED, 0xF5, 0xD8, 0x1D, 0x46, 0xE5, 0xBD, 0x31, 0xEF, 0xE7, 0xFE, 0x74, 0xB7, 0x1D,
];
const LNK_HEADER_SIZE: [u8; 4] = [0x4C, 0x00, 0x00, 0x00];
const LNK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

pub fn detect(sample: &[u8]) -> Option<FileType> {
    detect_indd(sample)
        .or_else(|| detect_dicom(sample))
        .or_else(|| detect_lnk(sample))
        .or_else(|| detect_alias(sample))
        .or_else(|| detect_mobi(sample))
        .or_else(|| detect_s3m(sample))
        .or_else(|| detect_shapefile(sample))
        .or_else(|| detect_eot(sample))
}

fn detect_indd(sample: &[u8]) -> Option<FileType> {
    (sample.len() >= 16 && sample[..16] == INDD_MAGIC).then(|| FileType::new(Extension::Indd))
}

fn detect_dicom(sample: &[u8]) -> Option<FileType> {
    (sample.len() >= 132 && &sample[128..132] == b"DICM").then(|| FileType::new(Extension::Dcm))
}

fn detect_lnk(sample: &[u8]) -> Option<FileType> {
    let matches = sample.len() >= 20 && sample[..4] == LNK_HEADER_SIZE && sample[4..20] == LNK_CLSID;
    matches.then(|| FileType::new(Extension::Lnk))
}

fn detect_alias(sample: &[u8]) -> Option<FileType> {
    (sample.len() >= 4 && &sample[..4] == b"book").then(|| FileType::new(Extension::Alias))
}

fn detect_mobi(sample: &[u8]) -> Option<FileType> {
    (sample.len() >= 68 && &sample[60..68] == b"BOOKMOBI").then(|| FileType::new(Extension::Mobi))
}

fn detect_s3m(sample: &[u8]) -> Option<FileType> {
    (sample.len() >= 48 && &sample[44..48] == b"SCRM").then(|| FileType::new(Extension::S3m))
}

fn detect_shapefile(sample: &[u8]) -> Option<FileType> {
    (sample.len() >= 4 && sample[..4] == [0x00, 0x00, 0x27, 0x0A]).then(|| FileType::new(Extension::Shp))
}

fn detect_eot(sample: &[u8]) -> Option<FileType> {
    if sample.len() < 36 {
        return None;
    }
    let version_ok = matches!(
        &sample[8..12],
        [0x01, 0x00, 0x00, 0x00] | [0x02, 0x00, 0x00, 0x00] | [0x03, 0x00, 0x00, 0x00]
    );
    (version_ok && &sample[34..36] == b"LP").then(|| FileType::new(Extension::Eot))
}
