//! Text decoding with an ordered list of candidate encodings.
//!
//! Chat exports are usually UTF-8, but some Windows tools save them as
//! UTF-16. [`decode_with_fallback`] tries each candidate in order and returns
//! the first successful decoding.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChatstatsError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// A text encoding the decoder can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Strict UTF-8; a leading byte-order mark is dropped.
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,

    /// UTF-16 with byte order taken from the BOM, little-endian without one.
    #[serde(rename = "utf-16", alias = "utf16")]
    Utf16,
}

impl Encoding {
    /// Default candidate order: UTF-8, then UTF-16.
    pub fn default_candidates() -> Vec<Encoding> {
        vec![Encoding::Utf8, Encoding::Utf16]
    }

    /// Human-readable encoding name.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
        }
    }

    /// Decodes `bytes`, or returns `None` if they aren't valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            Encoding::Utf16 => decode_utf16(bytes),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (big_endian, payload) = if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        (false, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        (true, rest)
    } else {
        (false, bytes)
    };

    if payload.len() % 2 != 0 {
        return None;
    }

    let units = payload.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });

    char::decode_utf16(units).collect::<std::result::Result<String, _>>().ok()
}

/// Decodes `bytes` with the first candidate that succeeds.
///
/// Returns the text together with the encoding that produced it.
///
/// # Errors
///
/// [`ChatstatsError::Encoding`] naming every candidate when all of them fail.
///
/// ```
/// use chatstats::parsing::encoding::{Encoding, decode_with_fallback};
///
/// let utf16: Vec<u8> = [0xFF, 0xFE, b'h', 0, b'i', 0].to_vec();
/// let (text, used) = decode_with_fallback(&utf16, &Encoding::default_candidates())?;
/// assert_eq!(text, "hi");
/// assert_eq!(used, Encoding::Utf16);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn decode_with_fallback(bytes: &[u8], candidates: &[Encoding]) -> Result<(String, Encoding)> {
    for &encoding in candidates {
        if let Some(text) = encoding.decode(bytes) {
            return Ok((text, encoding));
        }
        debug!(encoding = encoding.name(), "decoding failed, trying next candidate");
    }

    Err(ChatstatsError::encoding(
        candidates.iter().map(|e| e.name()).collect(),
    ))
}
