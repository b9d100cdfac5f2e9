//! Input encoding detection.
//!
//! A byte order mark wins; otherwise the whole file is fed to `chardetng`.
//! The guess is a hint: decoding errors under it are reported, not papered
//! over with replacement characters.

use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::error::{IngestError, Result};

/// Guesses the encoding of a complete file.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Text decoded from a file, plus the encoding that was used.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Decodes `bytes` with the detected encoding, stripping any BOM.
///
/// # Errors
///
/// Returns [`IngestError::Decode`] if the bytes contain sequences that are
/// malformed in the detected encoding.
pub fn decode(bytes: &[u8], path: &Path) -> Result<DecodedText> {
    let encoding = detect_encoding(bytes);
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(IngestError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding,
    })
}
