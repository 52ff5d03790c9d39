//! Backend adapter over `encoding_rs` (the WHATWG Encoding Standard).
//!
//! The most capable backend and the first one in the default chain. It
//! resolves names through the WHATWG label table, decodes strictly (no
//! replacement characters) and encodes strictly (unmappable characters are
//! an error, not a numeric character reference).
//!
//! One deliberate restriction: the WHATWG standard defines the *output*
//! encoding of UTF-16 and replacement as UTF-8, so asking `encoding_rs` to
//! encode to UTF-16 would silently produce UTF-8. Such targets are reported
//! as [`Error::UnsupportedEncoding`] instead, which lets the next backend in
//! the chain take them.

use encoding_rs::Encoding;

use crate::{Error, Result, Transcoder};

/// Transcoder backed by `encoding_rs`
#[derive(Debug)]
pub struct WhatwgTranscoder {
    default_encoding: String,
}

impl WhatwgTranscoder {
    /// Create a transcoder bound to `default_encoding`.
    ///
    /// Fails with [`Error::UnsupportedEncoding`] when the default is not a
    /// WHATWG label.
    pub fn new(default_encoding: &str) -> Result<Self> {
        resolve(default_encoding)?;
        Ok(Self {
            default_encoding: default_encoding.to_string(),
        })
    }
}

fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))
}

impl Transcoder for WhatwgTranscoder {
    fn name(&self) -> &'static str {
        "whatwg"
    }

    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
        let from_encoding = resolve(from)?;
        let to_encoding = resolve(to)?;

        // Targets the standard cannot actually emit (UTF-16, replacement).
        if to_encoding.output_encoding() != to_encoding {
            return Err(Error::UnsupportedEncoding(to.to_string()));
        }

        let text = from_encoding
            .decode_without_bom_handling_and_without_replacement(input)
            .ok_or_else(|| Error::Malformed {
                encoding: from_encoding.name().to_string(),
            })?;

        let (bytes, _, had_errors) = to_encoding.encode(&text);
        if had_errors {
            return Err(Error::Unmappable {
                encoding: to_encoding.name().to_string(),
            });
        }

        Ok(bytes.into_owned())
    }

    fn default_encoding(&self) -> &str {
        &self.default_encoding
    }
}
