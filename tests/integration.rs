//! End-to-end scenarios exercising the public buffer/stream entry points together, rather than a
//! single format module in isolation.

use filetype::{detect_from_buffer, detect_from_stream, Extension};

fn png_with_idat() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&[0u8; 13]);
    bytes.extend_from_slice(&[0u8; 4]); // IHDR crc
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(b"IDAT");
    bytes.push(b'x');
    bytes.extend_from_slice(&[0u8; 4]);
    bytes
}

#[test]
fn png_signature_followed_by_idat() {
    let bytes = png_with_idat();
    let ft = detect_from_buffer(&bytes).expect("png should be detected");
    assert_eq!(ft.ext, Extension::Png);
    assert_eq!(ft.mime, "image/png");
}

#[test]
fn png_with_actl_before_idat_is_apng() {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&[0u8; 13]);
    bytes.extend_from_slice(&[0u8; 4]);
    bytes.extend_from_slice(&8u32.to_be_bytes());
    bytes.extend_from_slice(b"acTL");
    bytes.extend_from_slice(&[0u8; 8]);
    bytes.extend_from_slice(&[0u8; 4]);
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(b"IDAT");
    bytes.push(b'x');
    bytes.extend_from_slice(&[0u8; 4]);

    let ft = detect_from_buffer(&bytes).expect("apng should be detected");
    assert_eq!(ft.ext, Extension::Apng);
    assert_eq!(ft.mime, "image/apng");
}

fn zip_local_entry(name: &str, content: &[u8]) -> Vec<u8> {
    let mut entry = vec![0x50, 0x4B, 0x03, 0x04];
    entry.extend_from_slice(&[0, 0]); // version
    entry.extend_from_slice(&[0, 0]); // flags
    entry.extend_from_slice(&[0, 0]); // compression
    entry.extend_from_slice(&[0, 0]); // mod time
    entry.extend_from_slice(&[0, 0]); // mod date
    entry.extend_from_slice(&[0, 0, 0, 0]); // crc32
    entry.extend_from_slice(&(content.len() as u32).to_le_bytes());
    entry.extend_from_slice(&(content.len() as u32).to_le_bytes());
    entry.extend_from_slice(&(name.len() as u16).to_le_bytes());
    entry.extend_from_slice(&0u16.to_le_bytes());
    entry.extend_from_slice(name.as_bytes());
    entry.extend_from_slice(content);
    entry
}

#[test]
fn zip_with_word_document_entry_is_docx() {
    let bytes = zip_local_entry("word/document.xml", b"<xml/>");
    let ft = detect_from_buffer(&bytes).expect("docx should be detected");
    assert_eq!(ft.ext, Extension::Docx);
    assert_eq!(
        ft.mime,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}

#[test]
fn buffer_containing_a_valid_tar_header_at_the_front_is_detected() {
    const HEADER_LEN: usize = 512;
    const CHECKSUM_OFFSET: usize = 148;
    const CHECKSUM_LEN: usize = 8;

    let mut buf = vec![0u8; 1024];
    let mut hdr = vec![0u8; HEADER_LEN];
    hdr[0..8].copy_from_slice(b"file.txt");
    for b in hdr[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN].iter_mut() {
        *b = b' ';
    }
    let sum: u32 = hdr.iter().map(|&b| b as u32).sum();
    let octal = format!("{:06o}\0 ", sum);
    hdr[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN].copy_from_slice(octal.as_bytes());
    buf[0..HEADER_LEN].copy_from_slice(&hdr);

    let ft = detect_from_buffer(&buf).expect("tar should be detected");
    assert_eq!(ft.ext, Extension::Tar);
    assert_eq!(ft.mime, "application/x-tar");
}

#[test]
fn id3v2_tag_followed_by_mp3_frame_sync() {
    let mut bytes = vec![b'I', b'D', b'3', 0x04, 0x00, 0x00];
    // sync-safe size 00 00 02 01 -> tag payload of (2 << 7) | 1 = 257 bytes
    bytes.extend_from_slice(&[0x00, 0x00, 0x02, 0x01]);
    bytes.extend_from_slice(&[0u8; 257]);
    bytes.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
    bytes.extend_from_slice(&[0u8; 16]);

    let ft = detect_from_buffer(&bytes).expect("mp3 should be detected");
    assert_eq!(ft.ext, Extension::Mp3);
    assert_eq!(ft.mime, "audio/mpeg");
}

#[test]
fn ftyp_avif_brand_is_recognized() {
    let mut bytes = vec![0x00, 0x00, 0x00, 0x18];
    bytes.extend_from_slice(b"ftyp");
    bytes.extend_from_slice(b"avif");
    bytes.extend_from_slice(&[0u8; 16]);

    let ft = detect_from_buffer(&bytes).expect("avif should be detected");
    assert_eq!(ft.ext, Extension::Avif);
    assert_eq!(ft.mime, "image/avif");
}

#[test]
fn buffer_and_stream_paths_agree_on_every_scenario() {
    let cases: Vec<Vec<u8>> = vec![
        png_with_idat(),
        zip_local_entry("word/document.xml", b"<xml/>"),
    ];

    for bytes in cases {
        let from_buf = detect_from_buffer(&bytes);
        let from_stream = detect_from_stream(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(from_buf.map(|f| f.ext), from_stream.map(|f| f.ext));
    }
}

#[test]
fn appending_trailing_bytes_does_not_change_a_signature_only_result() {
    let mut bytes = vec![0x00, 0x00, 0x00, 0x18];
    bytes.extend_from_slice(b"ftyp");
    bytes.extend_from_slice(b"avif");
    bytes.extend_from_slice(&[0u8; 16]);

    let base = detect_from_buffer(&bytes).unwrap();

    bytes.extend_from_slice(&[0xAA; 4096]);
    let extended = detect_from_buffer(&bytes).unwrap();

    assert_eq!(base.ext, extended.ext);
}

#[test]
fn unrecognized_bytes_yield_none() {
    let garbage = vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    assert!(detect_from_buffer(&garbage).is_none());
}
