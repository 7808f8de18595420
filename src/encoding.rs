//! Candidate text encodings and the ordered fallback chain used to
//! decode source files of unknown encoding.
//!
//! Decoding is all-or-nothing per candidate: a failed attempt discards
//! any partial result and the next candidate sees the original bytes.
//! Both preset chains end with [`Encoding::Latin1`], which maps every
//! byte value to a code point and therefore cannot fail, so decoding
//! through a preset chain always succeeds.

use serde::{Deserialize, Serialize};

/// A candidate text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Little-endian 16-bit code units. Fails on an odd byte count or
    /// unpaired surrogates. A leading BOM decodes to U+FEFF and is
    /// kept in the output.
    Utf16Le,
    /// Strict UTF-8.
    Utf8,
    /// Each byte 0-255 becomes the code point of the same value.
    /// Total: accepts any byte sequence.
    Latin1,
}

impl Encoding {
    /// Attempts to decode `bytes` with this encoding alone.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf16Le => decode_utf16le(bytes),
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Encoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf16Le => "utf-16-le",
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }
}

fn decode_utf16le(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

/// The text produced by a successful chain decode, tagged with the
/// candidate that accepted the bytes. The tag is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: Encoding,
}

/// An ordered list of candidate encodings tried in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingChain {
    candidates: Vec<Encoding>,
}

impl EncodingChain {
    /// A custom candidate order. Chains that do not end with
    /// [`Encoding::Latin1`] can fail to decode some inputs.
    pub fn new(candidates: Vec<Encoding>) -> Self {
        Self { candidates }
    }

    /// UTF-8 then Latin-1.
    pub fn utf8_first() -> Self {
        Self::new(vec![Encoding::Utf8, Encoding::Latin1])
    }

    /// UTF-16LE (common for Visual Studio sources), then UTF-8, then
    /// Latin-1.
    pub fn utf16le_first() -> Self {
        Self::new(vec![Encoding::Utf16Le, Encoding::Utf8, Encoding::Latin1])
    }

    pub fn candidates(&self) -> &[Encoding] {
        &self.candidates
    }

    /// Tries each candidate in order and returns the first success.
    ///
    /// Returns `None` only when every candidate rejects the bytes,
    /// which cannot happen if the chain contains [`Encoding::Latin1`].
    pub fn decode(&self, bytes: &[u8]) -> Option<Decoded> {
        for candidate in &self.candidates {
            if let Some(text) = candidate.decode(bytes) {
                return Some(Decoded {
                    text,
                    encoding: *candidate,
                });
            }
        }
        None
    }
}

impl Default for EncodingChain {
    fn default() -> Self {
        Self::utf8_first()
    }
}
