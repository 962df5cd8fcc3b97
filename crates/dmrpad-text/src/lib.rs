//! Text transcoding for short data messages.
//!
//! Message text rides inside packet-data fragments as bytes in the
//! character encoding named by the data header's DD format field. This
//! crate is a thin adapter between `&str` and those payload bytes: pick a
//! [`TextFormat`], optionally terminate with the double-zero marker, and
//! go through [`encode_text`] / [`decode_text`].
//!
//! Decoding follows the WHATWG rules of `encoding_rs`: malformed input
//! turns into replacement characters rather than an error, matching how
//! radios display whatever arrived. Encoding is strict and rejects text
//! the target encoding cannot represent.

pub mod error;
pub mod format;

pub use error::{Result, TextError};
pub use format::{TextFormat, ALL_FORMATS};

use crate::format::Codec;

/// Marker appended after the message text when null termination is on.
pub const MESSAGE_TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Encode message text into payload bytes.
pub fn encode_text(text: &str, format: TextFormat, null_terminated: bool) -> Result<Vec<u8>> {
    let mut data = match format.codec() {
        Codec::Identity => text.as_bytes().to_vec(),
        Codec::Utf16 { big_endian } => utf16_bytes(text, big_endian),
        Codec::Whatwg(encoding) => {
            let (bytes, _, unmappable) = encoding.encode(text);
            if unmappable {
                return Err(TextError::Unmappable { format });
            }
            bytes.into_owned()
        }
    };
    if null_terminated {
        data.extend_from_slice(&MESSAGE_TERMINATOR);
    }
    Ok(data)
}

/// Decode payload bytes into message text.
///
/// When `null_terminated` is set, everything from the first zero byte on
/// is discarded before decoding.
// TODO: the terminator scan is byte-wise, so the low byte of an ASCII
// UTF-16 code unit false-triggers it; scanning for an aligned zero pair
// would fix UTF-16 payloads.
pub fn decode_text(data: &[u8], format: TextFormat, null_terminated: bool) -> String {
    let data = if null_terminated {
        match data.iter().position(|&b| b == 0x00) {
            Some(end) => &data[..end],
            None => data,
        }
    } else {
        data
    };

    match format.codec() {
        Codec::Identity => String::from_utf8_lossy(data).into_owned(),
        Codec::Utf16 { big_endian: false } => encoding_rs::UTF_16LE
            .decode_without_bom_handling(data)
            .0
            .into_owned(),
        Codec::Utf16 { big_endian: true } => encoding_rs::UTF_16BE
            .decode_without_bom_handling(data)
            .0
            .into_owned(),
        Codec::Whatwg(encoding) => encoding.decode_without_bom_handling(data).0.into_owned(),
    }
}

fn utf16_bytes(text: &str, big_endian: bool) -> Vec<u8> {
    let mut data = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        let bytes = if big_endian {
            unit.to_be_bytes()
        } else {
            unit.to_le_bytes()
        };
        data.extend_from_slice(&bytes);
    }
    data
}
