// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type used across the tokenizer and dispatcher.

use std::fmt;
use std::io;

/// `DetectError` enumerates all possible errors reported while tokenizing or detecting a format.
#[derive(Debug)]
pub enum DetectError {
    /// A read or peek ran past the available bytes of the source.
    EndOfStream,
    /// A requested absolute position was less than the tokenizer's current position.
    InvalidPosition,
    /// An I/O error occurred while reading the underlying stream.
    Io(io::Error),
    /// A sub-walker encountered malformed data it could not interpret (e.g. a negative PNG chunk
    /// length, unparsable ASAR JSON header). Always handled locally; never escapes the dispatcher.
    Decode(&'static str),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::EndOfStream => write!(f, "end of stream"),
            DetectError::InvalidPosition => {
                write!(f, "requested position precedes the tokenizer's current position")
            }
            DetectError::Io(err) => write!(f, "io error: {}", err),
            DetectError::Decode(msg) => write!(f, "malformed data: {}", msg),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DetectError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => DetectError::EndOfStream,
            _ => DetectError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;

/// Convenience function to create an end-of-stream error.
#[inline]
pub fn end_of_stream<T>() -> Result<T> {
    Err(DetectError::EndOfStream)
}

/// Convenience function to create a decode error.
#[inline]
pub fn decode_error<T>(desc: &'static str) -> Result<T> {
    Err(DetectError::Decode(desc))
}

/// Convenience function to create an invalid-position error.
#[inline]
pub fn invalid_position<T>() -> Result<T> {
    Err(DetectError::InvalidPosition)
}

/// Returns `true` if `err` is an end-of-stream condition rather than a genuine I/O or programmer
/// error. Used at the dispatcher boundary to swallow expected short-read failures.
pub fn is_end_of_stream(err: &DetectError) -> bool {
    matches!(err, DetectError::EndOfStream)
}
