// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File type detection from a bounded prefix of raw bytes.
//!
//! Given an in-memory slice, a seekable blob, or a one-shot stream, this crate inspects a small
//! leading sample (at most a few kilobytes, more for a handful of container formats that need to
//! walk further to distinguish sibling formats) and returns the single best match from a closed
//! catalog of extensions and MIME types, or `None` if nothing in the catalog matches.
//!
//! ```
//! let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
//! assert!(filetype::detect_from_buffer(&png).is_none()); // too short to hold a chunk
//! ```

mod catalog;
mod detect;
mod errors;
pub mod io;
mod passthrough;

use std::io::Read;

pub use catalog::{supported_extensions, supported_mime_types, Extension, FileType};
pub use errors::{DetectError, Result};
pub use passthrough::DetectionPassthrough;

/// A source whose total size is known ahead of time, e.g. an opened file. Left unimplemented by
/// this crate: callers own how they open and size their own files (`std::fs::File::metadata`,
/// memory-mapping, a VFS abstraction, ...); this trait only names the contract a future
/// filesystem-opening helper would need to satisfy.
pub trait SizedSource: io::ByteSource {
    /// The source's size, always known (unlike `ByteSource::size`, which may return `None`).
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Detects the file type of an in-memory byte slice.
///
/// Returns `None` for inputs of length 0 or 1, since no signature in the catalog is shorter than
/// two bytes.
pub fn detect_from_buffer(bytes: &[u8]) -> Option<FileType> {
    if bytes.len() <= 1 {
        return None;
    }
    let mut tok = io::from_buffer(bytes);
    detect_from_tokenizer(&mut tok).unwrap_or(None)
}

/// Detects the file type of a one-shot, non-seekable stream. Only the bytes the detector actually
/// needs are pulled from `reader`; it is not read to completion.
pub fn detect_from_stream<R: Read>(reader: R) -> Result<Option<FileType>> {
    let mut tok = io::from_stream(reader);
    detect_from_tokenizer(&mut tok)
}

/// Detects the file type starting at a tokenizer's current position, without otherwise consuming
/// it (every read performed internally is a peek).
pub fn detect_from_tokenizer<S: io::ByteSource>(tok: &mut io::Tokenizer<S>) -> Result<Option<FileType>> {
    detect::detect(tok)
}
