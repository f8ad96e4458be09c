//! Low-level parsing utilities.
//!
//! - [`encoding`] - byte decoding with UTF-8 → UTF-16 fallback
//! - [`transcript`] - block splitting and header grammar of the export format

pub mod encoding;
pub mod transcript;

// Re-export commonly used items
pub use encoding::{Encoding, decode_with_fallback};
pub use transcript::{
    BlockHeader, MEDIA_MARKERS, SYSTEM_NOTICE, is_media_body, is_system_notice, parse_header,
    parse_timestamp, split_blocks,
};
