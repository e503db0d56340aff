//! Tolerant note file reading.
//!
//! Notes are usually UTF-8, but the occasional legacy file should still
//! have its links extracted rather than be rejected outright.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::io;
use std::path::Path;

/// Read a note file as text.
///
/// Strict UTF-8 is the fast path. Anything else goes through encoding
/// detection and a lossy decode, so only genuine I/O failures surface as
/// errors.
pub fn read_note_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let bytes = err.into_bytes();
            let (text, _, _) = detect_encoding(&bytes).decode(&bytes);
            Ok(text.into_owned())
        }
    }
}

/// Guess the encoding of non-UTF-8 content.
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_utf8_content() {
        let tmp = TempDir::new().expect("tmp dir");
        let path = tmp.path().join("note.md");
        fs::write(&path, "plain text with [[Link]]\n").expect("write");

        let text = read_note_text(&path).expect("read");
        assert_eq!(text, "plain text with [[Link]]\n");
    }

    #[test]
    fn test_decodes_legacy_encoding_without_losing_links() {
        let tmp = TempDir::new().expect("tmp dir");
        let path = tmp.path().join("legacy.md");
        // "café [[Target]]" in Windows-1252: é is a lone 0xE9 byte.
        let mut bytes = b"caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b" [[Target]]");
        fs::write(&path, &bytes).expect("write");

        let text = read_note_text(&path).expect("read");
        assert!(text.contains("[[Target]]"), "links survive the decode: {text:?}");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let tmp = TempDir::new().expect("tmp dir");
        assert!(read_note_text(&tmp.path().join("absent.md")).is_err());
    }
}
