//! File reading and text decoding.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

/// Resolves an encoding label, sniffing a BOM when the label is unknown.
pub fn resolve_encoding(codec: &str, bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = Encoding::for_label(codec.trim().as_bytes()) {
        return encoding;
    }

    log::debug!("Unknown codec '{}', detecting from content", codec);
    Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .unwrap_or(UTF_8)
}

/// Decoded text plus what is needed to write it back in its own encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
    /// The input started with a byte order mark, which decoding strips.
    pub bom: bool,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

impl DecodedText {
    /// Encodes `text` with the encoding (and BOM) this text was read with.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len() + 3);

        if self.encoding == UTF_16LE || self.encoding == UTF_16BE {
            // encoding_rs only encodes to UTF-16 through its output encoding, UTF-8
            let little = self.encoding == UTF_16LE;
            if self.bom {
                out.extend_from_slice(if little { &[0xFF, 0xFE] } else { &[0xFE, 0xFF] });
            }
            for unit in text.encode_utf16() {
                let bytes = if little {
                    unit.to_le_bytes()
                } else {
                    unit.to_be_bytes()
                };
                out.extend_from_slice(&bytes);
            }
            return Ok(out);
        }

        let (bytes, actual, unmappable) = self.encoding.encode(text);
        if unmappable {
            return Err(Error::Encode(actual.name().to_string()));
        }
        if self.bom && actual == UTF_8 {
            out.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
        }
        out.extend_from_slice(&bytes);
        Ok(out)
    }
}

/// Decodes raw bytes, keeping the encoding and BOM that were used.
pub fn decode_with_encoding(bytes: &[u8], codec: &str) -> DecodedText {
    let encoding = resolve_encoding(codec, bytes);
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::debug!(
            "Malformed {} sequences replaced while decoding",
            actual.name()
        );
    }
    let bom = Encoding::for_bom(bytes).is_some_and(|(sniffed, _)| sniffed == actual);

    DecodedText {
        text: text.into_owned(),
        encoding: actual,
        bom,
        had_errors,
    }
}

/// Decodes raw bytes into text. Malformed sequences become U+FFFD.
pub fn decode(bytes: &[u8], codec: &str) -> String {
    decode_with_encoding(bytes, codec).text
}

/// Reads and decodes a whole file, remembering its encoding.
pub fn read_decoded(path: &Path, codec: &str) -> Result<DecodedText> {
    let bytes = fs::read(path)
        .map_err(|e| Error::file_system_io("Failed to read file", path, e))?;
    Ok(decode_with_encoding(&bytes, codec))
}

/// Reads and decodes a whole file.
pub fn read_text(path: &Path, codec: &str) -> Result<String> {
    read_decoded(path, codec).map(|decoded| decoded.text)
}
