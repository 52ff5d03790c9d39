//! # Transcoder - Charset Transcoding Facade
//!
//! Converts text between named character encodings, resolving historical and
//! platform-specific charset aliases before delegating to whichever
//! conversion backend recognizes the names.
//!
//! ## Features
//!
//! - **Alias resolution** for ~160 legacy charset names ("latin1",
//!   "ansi-1251", "ms_kanji", ...) mapped to canonical IANA names
//! - **Backend fallback chain**: the WHATWG backend (`encoding_rs`) is tried
//!   first, then the rust-encoding backend, retrying with the canonical
//!   alias whenever a backend rejects a name
//! - **Memoized chain construction** keyed by default output encoding
//! - **Typed errors** that distinguish unknown names from malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use transcoder::{create, Transcoder};
//!
//! let chain = create("UTF-8").unwrap();
//!
//! // "ansi-1251" is not a label either backend knows; the alias table
//! // resolves it to windows-1251 and the retry succeeds.
//! let cyrillic = &[0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]; // "Привет"
//! let utf8 = chain.transcode(cyrillic, "ansi-1251", "UTF-8").unwrap();
//! assert_eq!(std::str::from_utf8(&utf8).unwrap(), "Привет");
//! ```

#![deny(missing_docs)]

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

pub mod aliases;
#[cfg(feature = "legacy")]
pub mod legacy;
#[cfg(feature = "whatwg")]
pub mod whatwg;

/// Result type for transcoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during transcoding operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A charset name was not recognized. When returned from a chain, this
    /// carries the last name tried (the resolved alias when an alias retry
    /// was the final attempt, the requested name otherwise).
    UnsupportedEncoding(String),
    /// No transcoding backend is compiled into the crate
    CapabilityMissing,
    /// The chain holds no backends at call time
    NoTranscoder,
    /// Input bytes are not valid for the source encoding
    Malformed {
        /// Name of the encoding the input failed to decode as
        encoding: String,
    },
    /// Text contains characters the target encoding cannot represent
    Unmappable {
        /// Name of the target encoding
        encoding: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedEncoding(name) => {
                write!(f, "Unsupported encoding: {}", name)
            }
            Error::CapabilityMissing => {
                write!(
                    f,
                    "No transcoding backend available; enable the `whatwg` or `legacy` feature"
                )
            }
            Error::NoTranscoder => write!(f, "Transcoder chain contains no backends"),
            Error::Malformed { encoding } => {
                write!(f, "Malformed input for encoding {}", encoding)
            }
            Error::Unmappable { encoding } => {
                write!(f, "Input cannot be represented in encoding {}", encoding)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A transcoding capability: converts bytes between two named charsets.
///
/// Implementations are bound to a default output encoding at construction
/// and report [`Error::UnsupportedEncoding`] for any name they do not
/// recognize. Any other error kind means the names were understood but the
/// data could not be converted.
pub trait Transcoder: Send + Sync {
    /// Short identifier for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Convert `input` from the `from` encoding to the `to` encoding
    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>>;

    /// The output encoding this transcoder was constructed with
    fn default_encoding(&self) -> &str;

    /// Convert `input` from the `from` encoding to the default encoding
    fn decode(&self, input: &[u8], from: &str) -> Result<Vec<u8>> {
        self.transcode(input, from, self.default_encoding())
    }
}

/// An ordered chain of transcoding backends with alias-resolution fallback.
///
/// Backends are tried in construction order (most capable first). When a
/// backend rejects the source encoding name, the chain looks the name up in
/// the [`aliases`] table and retries the same backend with the canonical
/// name before moving on. Alias resolution applies to the source name only:
/// the target is caller-controlled, while source names routinely arrive from
/// untrusted external metadata using legacy spellings.
pub struct TranscoderChain {
    transcoders: Vec<Arc<dyn Transcoder>>,
    default_encoding: String,
}

impl TranscoderChain {
    /// Create a chain from an explicit backend list.
    ///
    /// The list order is the preference order. An empty list is accepted;
    /// calling [`Transcoder::transcode`] on such a chain fails with
    /// [`Error::NoTranscoder`].
    pub fn new(
        transcoders: Vec<Arc<dyn Transcoder>>,
        default_encoding: impl Into<String>,
    ) -> Self {
        Self {
            transcoders,
            default_encoding: default_encoding.into(),
        }
    }

    /// Build a chain from every backend compiled into the crate, in fixed
    /// preference order, each bound to `default_encoding`.
    fn with_available_backends(default_encoding: &str) -> Result<Self> {
        #[allow(unused_mut)]
        let mut transcoders: Vec<Arc<dyn Transcoder>> = Vec::new();

        #[cfg(feature = "whatwg")]
        transcoders.push(Arc::new(whatwg::WhatwgTranscoder::new(default_encoding)?));

        #[cfg(feature = "legacy")]
        transcoders.push(Arc::new(legacy::LegacyTranscoder::new(default_encoding)?));

        if transcoders.is_empty() {
            return Err(Error::CapabilityMissing);
        }

        Ok(Self::new(transcoders, default_encoding))
    }

    /// Number of backends in the chain
    pub fn len(&self) -> usize {
        self.transcoders.len()
    }

    /// Whether the chain holds no backends
    pub fn is_empty(&self) -> bool {
        self.transcoders.is_empty()
    }

    /// Backend identifiers in preference order
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.transcoders.iter().map(|t| t.name()).collect()
    }
}

impl std::fmt::Debug for TranscoderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscoderChain")
            .field("transcoders", &self.backend_names())
            .field("default_encoding", &self.default_encoding)
            .finish()
    }
}

impl Transcoder for TranscoderChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
        if self.transcoders.is_empty() {
            return Err(Error::NoTranscoder);
        }

        let mut last_rejected = None;

        for transcoder in &self.transcoders {
            match transcoder.transcode(input, from, to) {
                Ok(output) => return Ok(output),
                Err(Error::UnsupportedEncoding(name)) => {
                    log::debug!(
                        "backend {} rejected encoding {}; trying alias",
                        transcoder.name(),
                        name
                    );
                    last_rejected = Some(name);

                    // Second chance: retry the same backend with the
                    // canonical name as the source encoding.
                    if let Some(canonical) = aliases::lookup(from) {
                        match transcoder.transcode(input, canonical, to) {
                            Ok(output) => return Ok(output),
                            Err(Error::UnsupportedEncoding(name)) => {
                                log::debug!(
                                    "backend {} rejected alias {} for {}",
                                    transcoder.name(),
                                    name,
                                    from
                                );
                                last_rejected = Some(name);
                            }
                            Err(err) => return Err(err),
                        }
                    }
                }
                // Names were understood but the data is bad; fallback is a
                // workaround for name disagreements, not a retry mechanism.
                Err(err) => return Err(err),
            }
        }

        Err(Error::UnsupportedEncoding(
            last_rejected.unwrap_or_else(|| from.to_string()),
        ))
    }

    fn default_encoding(&self) -> &str {
        &self.default_encoding
    }
}

/// Process-wide chain cache, one instance per default output encoding
static CHAINS: OnceLock<Mutex<HashMap<String, Arc<TranscoderChain>>>> = OnceLock::new();

/// Create (or fetch the cached) transcoder chain for a default output
/// encoding.
///
/// The first call for a given `default_encoding` probes the compiled-in
/// backends in preference order and caches the resulting chain for the
/// lifetime of the process; later calls return the identical instance. The
/// insert is compute-if-absent under a lock, so concurrent first calls for
/// one key still yield a single chain.
///
/// Fails with [`Error::CapabilityMissing`] when no backend feature is
/// enabled, and with [`Error::UnsupportedEncoding`] when a backend does not
/// recognize `default_encoding` itself.
pub fn create(default_encoding: &str) -> Result<Arc<TranscoderChain>> {
    let cache = CHAINS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut chains = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(chain) = chains.get(default_encoding) {
        return Ok(Arc::clone(chain));
    }

    let chain = Arc::new(TranscoderChain::with_available_backends(default_encoding)?);
    chains.insert(default_encoding.to_string(), Arc::clone(&chain));
    Ok(chain)
}

/// Create (or fetch the cached) chain with UTF-8 as the default output
/// encoding
pub fn create_default() -> Result<Arc<TranscoderChain>> {
    create("UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// What a scripted backend does once it recognizes both names
    enum Verdict {
        /// Echo the input back unchanged
        Echo,
        /// Fail with this error
        Fail(Error),
    }

    /// Mock backend recognizing a fixed set of labels, counting calls
    struct ScriptedTranscoder {
        supported: Vec<String>,
        verdict: Verdict,
        calls: AtomicUsize,
    }

    impl ScriptedTranscoder {
        fn recognizing(supported: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                supported: supported.iter().map(|s| s.to_string()).collect(),
                verdict: Verdict::Echo,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(supported: &[&str], error: Error) -> Arc<Self> {
            Arc::new(Self {
                supported: supported.iter().map(|s| s.to_string()).collect(),
                verdict: Verdict::Fail(error),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transcoder for ScriptedTranscoder {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn transcode(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.supported.iter().any(|s| s == from) {
                return Err(Error::UnsupportedEncoding(from.to_string()));
            }
            if !self.supported.iter().any(|s| s == to) {
                return Err(Error::UnsupportedEncoding(to.to_string()));
            }
            match &self.verdict {
                Verdict::Echo => Ok(input.to_vec()),
                Verdict::Fail(err) => Err(err.clone()),
            }
        }

        fn default_encoding(&self) -> &str {
            "UTF-8"
        }
    }

    fn chain_of(backends: Vec<Arc<ScriptedTranscoder>>) -> TranscoderChain {
        let transcoders = backends
            .into_iter()
            .map(|b| b as Arc<dyn Transcoder>)
            .collect();
        TranscoderChain::new(transcoders, "UTF-8")
    }

    #[test]
    fn test_first_backend_success_skips_rest() {
        let first = ScriptedTranscoder::recognizing(&["UTF-8", "ISO-8859-1"]);
        let second = ScriptedTranscoder::recognizing(&["UTF-8", "ISO-8859-1"]);
        let chain = chain_of(vec![Arc::clone(&first), Arc::clone(&second)]);

        let out = chain.transcode(b"abc", "ISO-8859-1", "UTF-8").unwrap();
        assert_eq!(out, b"abc");
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_alias_retry_recovers_on_same_backend() {
        // Recognizes the canonical name only; "latin1" must go through the
        // alias table to succeed, without ever touching the second backend.
        let first = ScriptedTranscoder::recognizing(&["UTF-8", "ISO-8859-1"]);
        let second = ScriptedTranscoder::recognizing(&["UTF-8", "ISO-8859-1"]);
        let chain = chain_of(vec![Arc::clone(&first), Arc::clone(&second)]);

        let via_alias = chain.transcode(b"caf\xe9", "latin1", "UTF-8").unwrap();
        assert_eq!(first.calls(), 2); // direct attempt + alias retry
        assert_eq!(second.calls(), 0);

        let via_canonical = chain.transcode(b"caf\xe9", "ISO-8859-1", "UTF-8").unwrap();
        assert_eq!(via_alias, via_canonical);
    }

    #[test]
    fn test_every_alias_resolves_through_retry() {
        // Each table entry must reach a backend that knows only the
        // canonical name, via the alias retry.
        for (alias, canonical) in aliases::entries().iter().copied() {
            let backend = ScriptedTranscoder::recognizing(&[canonical, "output"]);
            let chain = chain_of(vec![Arc::clone(&backend)]);

            let out = chain.transcode(b"payload", alias, "output").unwrap();
            assert_eq!(out, b"payload", "alias {} failed to resolve", alias);
        }
    }

    #[test]
    fn test_exhaustion_without_alias_keeps_requested_name() {
        let first = ScriptedTranscoder::recognizing(&["UTF-8"]);
        let second = ScriptedTranscoder::recognizing(&["UTF-8"]);
        let chain = chain_of(vec![first, second]);

        let err = chain
            .transcode(b"x", "no-such-charset", "UTF-8")
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedEncoding("no-such-charset".to_string())
        );
    }

    #[test]
    fn test_exhaustion_with_alias_reports_last_tried_name() {
        // Both backends reject "latin1" and its alias; the surfaced error
        // carries the alias, the name tried last.
        let first = ScriptedTranscoder::recognizing(&["UTF-8"]);
        let second = ScriptedTranscoder::recognizing(&["UTF-8"]);
        let chain = chain_of(vec![Arc::clone(&first), Arc::clone(&second)]);

        let err = chain.transcode(b"x", "latin1", "UTF-8").unwrap_err();
        assert_eq!(err, Error::UnsupportedEncoding("ISO-8859-1".to_string()));
        assert_eq!(first.calls(), 2);
        assert_eq!(second.calls(), 2);
    }

    #[test]
    fn test_malformed_input_aborts_chain() {
        let malformed = Error::Malformed {
            encoding: "UTF-8".to_string(),
        };
        let first = ScriptedTranscoder::failing(&["UTF-8", "ISO-8859-1"], malformed.clone());
        let second = ScriptedTranscoder::recognizing(&["UTF-8", "ISO-8859-1"]);
        let chain = chain_of(vec![Arc::clone(&first), Arc::clone(&second)]);

        let err = chain
            .transcode(b"\xff\xfe", "UTF-8", "ISO-8859-1")
            .unwrap_err();
        assert_eq!(err, malformed);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_error_from_alias_retry_aborts_chain() {
        // The backend rejects "latin1" but chokes on the data under the
        // canonical name; that error propagates instead of falling through.
        let unmappable = Error::Unmappable {
            encoding: "us-ascii".to_string(),
        };
        let first = ScriptedTranscoder::failing(&["ISO-8859-1", "us-ascii"], unmappable.clone());
        let second = ScriptedTranscoder::recognizing(&["ISO-8859-1", "us-ascii"]);
        let chain = chain_of(vec![first, Arc::clone(&second)]);

        let err = chain
            .transcode(b"caf\xe9", "latin1", "us-ascii")
            .unwrap_err();
        assert_eq!(err, unmappable);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_empty_chain_is_typed_error() {
        let chain = TranscoderChain::new(Vec::new(), "UTF-8");
        assert!(chain.is_empty());
        let err = chain.transcode(b"x", "UTF-8", "UTF-8").unwrap_err();
        assert_eq!(err, Error::NoTranscoder);
    }

    #[test]
    fn test_decode_targets_default_encoding() {
        let backend = ScriptedTranscoder::recognizing(&["UTF-8", "ISO-8859-1"]);
        let chain = chain_of(vec![Arc::clone(&backend)]);

        chain.decode(b"abc", "ISO-8859-1").unwrap();
        assert_eq!(chain.default_encoding(), "UTF-8");
        assert_eq!(backend.calls(), 1);
    }

    #[cfg(feature = "whatwg")]
    #[test]
    fn test_create_caches_per_default_encoding() {
        let first = create("UTF-8").unwrap();
        let again = create("UTF-8").unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let other = create("ISO-8859-1").unwrap();
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[cfg(feature = "whatwg")]
    #[test]
    fn test_round_trip_latin1() {
        let chain = create_default().unwrap();

        let latin1 = chain
            .transcode("café".as_bytes(), "UTF-8", "ISO-8859-1")
            .unwrap();
        assert_eq!(latin1, b"caf\xe9");

        let utf8 = chain.transcode(&latin1, "ISO-8859-1", "UTF-8").unwrap();
        assert_eq!(utf8, "café".as_bytes());
    }

    #[cfg(feature = "whatwg")]
    #[test]
    fn test_alias_path_end_to_end() {
        // "ansi-1251" is in no backend's label table; only the alias table
        // knows it means windows-1251.
        let chain = create_default().unwrap();

        let cp1251 = &[0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]; // "Привет"
        let utf8 = chain.transcode(cp1251, "ansi-1251", "UTF-8").unwrap();
        assert_eq!(std::str::from_utf8(&utf8).unwrap(), "Привет");
    }

    #[cfg(all(feature = "whatwg", feature = "legacy"))]
    #[test]
    fn test_utf16_target_falls_through_to_legacy_backend() {
        // The WHATWG backend refuses UTF-16 output (its output encoding for
        // UTF-16 is UTF-8), so the chain must reach the second backend.
        let chain = create_default().unwrap();

        let utf16 = chain.transcode(b"hi", "UTF-8", "UTF-16LE").unwrap();
        assert_eq!(utf16, &[b'h', 0x00, b'i', 0x00]);
    }

    #[cfg(feature = "whatwg")]
    #[test]
    fn test_real_malformed_input_propagates() {
        let chain = create_default().unwrap();

        let err = chain
            .transcode(b"\xff\xff\xff", "UTF-8", "ISO-8859-1")
            .unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[cfg(feature = "whatwg")]
    #[test]
    fn test_create_rejects_unknown_default_encoding() {
        let err = create("not-a-charset").unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedEncoding("not-a-charset".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnsupportedEncoding("latin1".to_string()).to_string(),
            "Unsupported encoding: latin1"
        );
        assert_eq!(
            Error::NoTranscoder.to_string(),
            "Transcoder chain contains no backends"
        );
    }
}
