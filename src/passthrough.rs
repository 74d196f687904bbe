// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A passive wrapper that buffers just enough of a stream to run detection once, then forwards
//! everything — the buffered sample first, then the rest of the inner reader — transparently.
//! Unlike [`crate::io::StreamSource`], which only ever looks forward, this is meant to sit in
//! front of a consumer that wants to both know the file type and read the full content exactly
//! once.

use std::io::{self, Read};

use crate::catalog::FileType;

/// The default sample size: enough for every format this crate recognizes without a deep
/// container walk, matching the size most detectors settle on by their last escalation tier.
const DEFAULT_SAMPLE_SIZE: usize = 4100;

pub struct DetectionPassthrough<R> {
    inner: R,
    sample_size: usize,
    buffer: Vec<u8>,
    buffer_pos: usize,
    detected: Option<FileType>,
    primed: bool,
}

impl<R: Read> DetectionPassthrough<R> {
    pub fn new(inner: R) -> Self {
        Self::with_sample_size(inner, DEFAULT_SAMPLE_SIZE)
    }

    pub fn with_sample_size(inner: R, sample_size: usize) -> Self {
        DetectionPassthrough {
            inner,
            sample_size,
            buffer: Vec::new(),
            buffer_pos: 0,
            detected: None,
            primed: false,
        }
    }

    /// Runs detection on the first `sample_size` bytes, buffering them for the subsequent `read`
    /// calls to replay. A no-op on every call after the first.
    fn prime(&mut self) -> io::Result<()> {
        if self.primed {
            return Ok(());
        }

        let mut sample = vec![0u8; self.sample_size];
        let mut filled = 0;
        while filled < sample.len() {
            let n = self.inner.read(&mut sample[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        sample.truncate(filled);

        self.detected = crate::detect_from_buffer(&sample);
        self.buffer = sample;
        self.primed = true;
        Ok(())
    }

    /// Runs detection if it hasn't already, and returns the result.
    pub fn detected_type(&mut self) -> io::Result<Option<FileType>> {
        self.prime()?;
        Ok(self.detected)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for DetectionPassthrough<R> {
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        self.prime()?;

        if self.buffer_pos < self.buffer.len() {
            let remaining = &self.buffer[self.buffer_pos..];
            let n = remaining.len().min(dst.len());
            dst[..n].copy_from_slice(&remaining[..n]);
            self.buffer_pos += n;
            return Ok(n);
        }

        self.inner.read(dst)
    }
}
