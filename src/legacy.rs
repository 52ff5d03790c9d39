//! Backend adapter over the `encoding` crate (rust-encoding).
//!
//! Second in the default chain. Its label table largely overlaps with the
//! WHATWG backend's, but it can encode to UTF-16, which the WHATWG backend
//! refuses, so it earns its place as a fallback rather than a duplicate.

use encoding::label::encoding_from_whatwg_label;
use encoding::{DecoderTrap, EncoderTrap, Encoding, EncodingRef};

use crate::{Error, Result, Transcoder};

/// Transcoder backed by rust-encoding
#[derive(Debug)]
pub struct LegacyTranscoder {
    default_encoding: String,
}

impl LegacyTranscoder {
    /// Create a transcoder bound to `default_encoding`.
    ///
    /// Fails with [`Error::UnsupportedEncoding`] when the default is not a
    /// label rust-encoding knows.
    pub fn new(default_encoding: &str) -> Result<Self> {
        resolve(default_encoding)?;
        Ok(Self {
            default_encoding: default_encoding.to_string(),
        })
    }
}

fn resolve(label: &str) -> Result<EncodingRef> {
    encoding_from_whatwg_label(label).ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))
}

impl Transcoder for LegacyTranscoder {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
        let from_encoding = resolve(from)?;
        let to_encoding = resolve(to)?;

        let text = from_encoding
            .decode(input, DecoderTrap::Strict)
            .map_err(|_| Error::Malformed {
                encoding: from_encoding.name().to_string(),
            })?;

        to_encoding
            .encode(&text, EncoderTrap::Strict)
            .map_err(|_| Error::Unmappable {
                encoding: to_encoding.name().to_string(),
            })
    }

    fn default_encoding(&self) -> &str {
        &self.default_encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcodes_between_labels() {
        let transcoder = LegacyTranscoder::new("UTF-8").unwrap();

        let out = transcoder
            .transcode("café".as_bytes(), "UTF-8", "ISO-8859-1")
            .unwrap();
        assert_eq!(out, b"caf\xe9");
    }

    #[test]
    fn test_encodes_utf16() {
        // The capability the WHATWG backend lacks.
        let transcoder = LegacyTranscoder::new("UTF-8").unwrap();

        let le = transcoder.transcode(b"hi", "UTF-8", "UTF-16LE").unwrap();
        assert_eq!(le, &[b'h', 0x00, b'i', 0x00]);

        let be = transcoder.transcode(b"hi", "UTF-8", "UTF-16BE").unwrap();
        assert_eq!(be, &[0x00, b'h', 0x00, b'i']);
    }

    #[test]
    fn test_unknown_label_is_unsupported() {
        let transcoder = LegacyTranscoder::new("UTF-8").unwrap();

        let err = transcoder.transcode(b"x", "ansi-1251", "UTF-8").unwrap_err();
        assert_eq!(err, Error::UnsupportedEncoding("ansi-1251".to_string()));
    }

    #[test]
    fn test_construction_validates_default() {
        assert!(LegacyTranscoder::new("euc-kr").is_ok());
        assert_eq!(
            LegacyTranscoder::new("bogus").unwrap_err(),
            Error::UnsupportedEncoding("bogus".to_string())
        );
    }

    #[test]
    fn test_malformed_input_is_strict() {
        let transcoder = LegacyTranscoder::new("UTF-8").unwrap();

        let err = transcoder
            .transcode(b"\xff\xfe\xff", "UTF-8", "ISO-8859-1")
            .unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }
}
