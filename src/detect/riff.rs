// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RIFF container form dispatch: the four-byte form type immediately following the chunk size
//! tells `WAVE`, `AVI ` and Qualcomm's `QLCM` apart.

use crate::catalog::{Extension, FileType};

pub fn detect(sample: &[u8]) -> Option<FileType> {
    if sample.len() < 12 || &sample[..4] != b"RIFF" {
        return None;
    }

    let ext = match &sample[8..12] {
        b"WAVE" => Extension::Wav,
        b"AVI " => Extension::Avi,
        b"QLCM" => Extension::Qcp,
        _ => return None,
    };

    Some(FileType::new(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riff(form: &[u8; 4]) -> Vec<u8> {
        let mut bytes = b"RIFF".to_vec();
        bytes.extend_from_slice(&[0u8; 4]);
        bytes.extend_from_slice(form);
        bytes
    }

    #[test]
    fn wave_form_is_detected() {
        assert_eq!(detect(&riff(b"WAVE")).unwrap().ext, Extension::Wav);
    }

    #[test]
    fn avi_form_is_detected() {
        assert_eq!(detect(&riff(b"AVI ")).unwrap().ext, Extension::Avi);
    }

    #[test]
    fn unknown_form_is_not_detected() {
        assert!(detect(&riff(b"JUNK")).is_none());
    }
}
