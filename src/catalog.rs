// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The static catalog: two ordered, closed enumerations of recognized extensions and MIME
//! strings, exposed as O(1) set views. Order is preserved by contract so callers can iterate the
//! catalog deterministically.

use once_cell::sync::Lazy;
use std::collections::HashSet;

macro_rules! catalog {
    ($(($variant:ident, $ext:literal, $mime:literal)),* $(,)?) => {
        /// A closed enumeration of every file extension this crate can report.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum Extension {
            $($variant,)*
        }

        impl Extension {
            /// The lower-case extension string, without a leading dot (e.g. `"png"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Extension::$variant => $ext,)*
                }
            }

            /// The canonical MIME type associated with this extension.
            pub const fn mime_type(self) -> &'static str {
                match self {
                    $(Extension::$variant => $mime,)*
                }
            }

            /// All catalog entries, in declaration order.
            pub const ALL: &'static [Extension] = &[$(Extension::$variant),*];
        }

        /// `{ext, mime}` pairs, in declaration order, backing the set views below.
        const ENTRIES: &[(Extension, &str, &str)] = &[
            $((Extension::$variant, $ext, $mime)),*
        ];
    };
}

catalog! {
    (Jpg, "jpg", "image/jpeg"),
    (Png, "png", "image/png"),
    (Apng, "apng", "image/apng"),
    (Gif, "gif", "image/gif"),
    (Webp, "webp", "image/webp"),
    (Flif, "flif", "image/flif"),
    (Xcf, "xcf", "image/x-xcf"),
    (Cr2, "cr2", "image/x-canon-cr2"),
    (Cr3, "cr3", "image/x-canon-cr3"),
    (Orf, "orf", "image/x-olympus-orf"),
    (Arw, "arw", "image/x-sony-arw"),
    (Dng, "dng", "image/x-adobe-dng"),
    (Nef, "nef", "image/x-nikon-nef"),
    (Rw2, "rw2", "image/x-panasonic-rw2"),
    (Raf, "raf", "image/x-fujifilm-raf"),
    (Tif, "tif", "image/tiff"),
    (Bmp, "bmp", "image/bmp"),
    (Icns, "icns", "image/icns"),
    (Ico, "ico", "image/x-icon"),
    (Psd, "psd", "image/vnd.adobe.photoshop"),
    (Heic, "heic", "image/heic"),
    (Heix, "heix", "image/heic-sequence"),
    (Avif, "avif", "image/avif"),
    (Avis, "avis", "image/avif-sequence"),
    (Jxl, "jxl", "image/jxl"),
    (Jp2, "jp2", "image/jp2"),
    (Jpx, "jpx", "image/jpx"),
    (Jpm, "jpm", "image/jpm"),
    (Mj2, "mj2", "image/mj2"),
    (Cur, "cur", "image/x-icon"),
    (Dcm, "dcm", "application/dicom"),
    (Qoi, "qoi", "image/qoi"),

    (Mp4, "mp4", "video/mp4"),
    (M4v, "m4v", "video/x-m4v"),
    (M4p, "m4p", "video/mp4"),
    (M4b, "m4b", "audio/mp4"),
    (M4a, "m4a", "audio/x-m4a"),
    (F4v, "f4v", "video/mp4"),
    (F4p, "f4p", "video/mp4"),
    (F4a, "f4a", "audio/mp4"),
    (F4b, "f4b", "audio/mp4"),
    (Mov, "mov", "video/quicktime"),
    (Avi, "avi", "video/vnd.avi"),
    (Mkv, "mkv", "video/x-matroska"),
    (Webm, "webm", "video/webm"),
    (Ogv, "ogv", "video/ogg"),
    (Ogm, "ogm", "video/ogg"),
    (Mts, "mts", "video/mp2t"),
    (ThreeGp, "3gp", "video/3gpp"),
    (ThreeG2, "3g2", "video/3gpp2"),
    (Flv, "flv", "video/x-flv"),
    (Wmv, "wmv", "video/x-ms-wmv"),
    (Asf, "asf", "application/vnd.ms-asf"),
    (Heif, "heif", "image/heif"),
    (Bpg, "bpg", "image/bpg"),
    (Jxr, "jxr", "image/vnd.ms-photo"),
    (Exr, "exr", "image/x-exr"),
    (Tga, "tga", "image/x-tga"),
    (M2ts, "m2ts", "video/mp2t"),
    (Rm, "rm", "application/vnd.rn-realmedia"),
    (Mpg, "mpg", "video/mpeg"),

    (Mp3, "mp3", "audio/mpeg"),
    (Mp2, "mp2", "audio/mpeg"),
    (Mp1, "mp1", "audio/mpeg"),
    (Aac, "aac", "audio/aac"),
    (Flac, "flac", "audio/x-flac"),
    (Wav, "wav", "audio/vnd.wave"),
    (Qcp, "qcp", "audio/qcelp"),
    (Ogg, "ogg", "audio/ogg"),
    (Oga, "oga", "audio/ogg"),
    (Opus, "opus", "audio/ogg"),
    (Ogx, "ogx", "application/ogg"),
    (Spx, "spx", "audio/ogg"),
    (Amr, "amr", "audio/amr"),
    (Aiff, "aiff", "audio/aiff"),
    (Mid, "mid", "audio/midi"),
    (Ape, "ape", "audio/x-monkeys-audio"),
    (Wv, "wv", "audio/wavpack"),
    (Dsf, "dsf", "audio/x-dsf"),
    (Caf, "caf", "audio/x-caf"),
    (Wma, "wma", "audio/x-ms-wma"),
    (Au, "au", "audio/basic"),
    (Voc, "voc", "audio/x-voc"),
    (It, "it", "audio/x-it"),
    (Xm, "xm", "audio/x-xm"),

    (Pdf, "pdf", "application/pdf"),
    (Ai, "ai", "application/postscript"),
    (Ps, "ps", "application/postscript"),
    (Eps, "eps", "application/eps"),
    (Rtf, "rtf", "application/rtf"),
    (Epub, "epub", "application/epub+zip"),
    (Mobi, "mobi", "application/x-mobipocket-ebook"),

    (Zip, "zip", "application/zip"),
    (Docx, "docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    (Pptx, "pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    (Xlsx, "xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    (Odt, "odt", "application/vnd.oasis.opendocument.text"),
    (Ods, "ods", "application/vnd.oasis.opendocument.spreadsheet"),
    (Odp, "odp", "application/vnd.oasis.opendocument.presentation"),
    (Xpi, "xpi", "application/x-xpinstall"),
    (ThreeMf, "3mf", "model/3mf"),
    (Jar, "jar", "application/java-archive"),
    (Apk, "apk", "application/vnd.android.package-archive"),
    (Doc, "doc", "application/msword"),
    (Xls, "xls", "application/vnd.ms-excel"),
    (Ppt, "ppt", "application/vnd.ms-powerpoint"),
    (Pst, "pst", "application/vnd.ms-outlook"),
    (Chm, "chm", "application/vnd.ms-htmlhelp"),

    (Tar, "tar", "application/x-tar"),
    (Rar, "rar", "application/x-rar-compressed"),
    (Gz, "gz", "application/gzip"),
    (Bz2, "bz2", "application/x-bzip2"),
    (SevenZ, "7z", "application/x-7z-compressed"),
    (Xz, "xz", "application/x-xz"),
    (Zstd, "zst", "application/zstd"),
    (Lz, "lz", "application/x-lzip"),
    (Z, "Z", "application/x-compress"),
    (Cab, "cab", "application/vnd.ms-cab-compressed"),
    (Deb, "deb", "application/x-deb"),
    (Ar, "ar", "application/x-unix-archive"),
    (Rpm, "rpm", "application/x-rpm"),
    (Lzh, "lzh", "application/x-lzh-compressed"),
    (Cpio, "cpio", "application/x-cpio"),
    (Lz4, "lz4", "application/x-lz4"),
    (Arj, "arj", "application/x-arj"),
    (Xar, "xar", "application/x-xar"),

    (Exe, "exe", "application/x-msdownload"),
    (Dll, "dll", "application/x-msdownload"),
    (Msi, "msi", "application/x-msi"),
    (Lnk, "lnk", "application/x-ms-shortcut"),
    (Alias, "alias", "application/x.apple.alias"),
    (Swf, "swf", "application/x-shockwave-flash"),
    (Crx, "crx", "application/x-google-chrome-extension"),
    (Nes, "nes", "application/x-nintendo-nes-rom"),
    (Sqlite, "sqlite", "application/vnd.sqlite3"),
    (Eot, "eot", "application/vnd.ms-fontobject"),
    (Ttf, "ttf", "font/ttf"),
    (Otf, "otf", "font/otf"),
    (Woff, "woff", "font/woff"),
    (Woff2, "woff2", "font/woff2"),
    (Asar, "asar", "application/x-asar"),
    (Indd, "indd", "application/x-indesign"),
    (S3m, "s3m", "audio/x-s3m"),
    (Shp, "shp", "application/x-esri-shape"),
    (Elf, "elf", "application/x-elf"),
    (Wasm, "wasm", "application/wasm"),
    (Class, "class", "application/java-vm"),
    (Mxf, "mxf", "application/mxf"),
    (Ics, "ics", "text/calendar"),
    (Vcf, "vcf", "text/vcard"),
    (Xml, "xml", "application/xml"),
    (Skp, "skp", "application/vnd.sketchup.skp"),
    (Pcap, "pcap", "application/vnd.tcpdump.pcap"),
    (Parquet, "parquet", "application/vnd.apache.parquet"),
}

static EXTENSIONS: Lazy<HashSet<Extension>> =
    Lazy::new(|| ENTRIES.iter().map(|(ext, _, _)| *ext).collect());

static MIME_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENTRIES.iter().map(|(_, _, mime)| *mime).collect());

/// A detected file format: a catalog extension paired with its canonical MIME type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FileType {
    pub ext: Extension,
    pub mime: &'static str,
}

impl FileType {
    pub const fn new(ext: Extension) -> Self {
        FileType { ext, mime: ext.mime_type() }
    }

    pub fn with_mime(ext: Extension, mime: &'static str) -> Self {
        FileType { ext, mime }
    }
}

/// The closed set of extensions this crate can ever report.
pub fn supported_extensions() -> &'static HashSet<Extension> {
    &EXTENSIONS
}

/// The closed set of MIME type strings this crate can ever report.
pub fn supported_mime_types() -> &'static HashSet<&'static str> {
    &MIME_TYPES
}
