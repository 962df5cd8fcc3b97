//! DD information-content formats.
//!
//! The data header's DD format field (ETSI TS 102 361-1) names the
//! character encoding of a text payload. Only the formats that map onto a
//! real codec are represented; the remaining codes (BCD, 7-bit packed,
//! UTF-32, and the ISO 8859 parts without a standard mapping) decode to
//! [`TextError::UnsupportedFormat`](crate::TextError::UnsupportedFormat).

use std::fmt;

use encoding_rs::Encoding;

use crate::error::{Result, TextError};

/// Supported DD text formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// Raw bytes, passed through untouched.
    Binary,
    Iso8859_2,
    Iso8859_3,
    Iso8859_4,
    Iso8859_5,
    Iso8859_6,
    Iso8859_7,
    Iso8859_8,
    Iso8859_10,
    Iso8859_13,
    Iso8859_14,
    Iso8859_15,
    Iso8859_16,
    Utf8,
    /// UTF-16 without a byte-order mark, little endian on the wire.
    Utf16,
    Utf16Be,
    Utf16Le,
}

/// Every supported format, in DD-code order.
pub const ALL_FORMATS: [TextFormat; 17] = [
    TextFormat::Binary,
    TextFormat::Iso8859_2,
    TextFormat::Iso8859_3,
    TextFormat::Iso8859_4,
    TextFormat::Iso8859_5,
    TextFormat::Iso8859_6,
    TextFormat::Iso8859_7,
    TextFormat::Iso8859_8,
    TextFormat::Iso8859_10,
    TextFormat::Iso8859_13,
    TextFormat::Iso8859_14,
    TextFormat::Iso8859_15,
    TextFormat::Iso8859_16,
    TextFormat::Utf8,
    TextFormat::Utf16,
    TextFormat::Utf16Be,
    TextFormat::Utf16Le,
];

/// How a format maps onto a concrete transcoder.
pub(crate) enum Codec {
    /// Bytes pass through untouched.
    Identity,
    /// Hand-packed UTF-16 code units.
    Utf16 { big_endian: bool },
    /// A WHATWG encoding from `encoding_rs`.
    Whatwg(&'static Encoding),
}

impl TextFormat {
    /// Resolve a DD format code from the data header.
    pub fn from_code(code: u8) -> Result<Self> {
        let format = match code {
            0x00 => TextFormat::Binary,
            0x04 => TextFormat::Iso8859_2,
            0x05 => TextFormat::Iso8859_3,
            0x06 => TextFormat::Iso8859_4,
            0x07 => TextFormat::Iso8859_5,
            0x08 => TextFormat::Iso8859_6,
            0x09 => TextFormat::Iso8859_7,
            0x0a => TextFormat::Iso8859_8,
            0x0c => TextFormat::Iso8859_10,
            0x0e => TextFormat::Iso8859_13,
            0x0f => TextFormat::Iso8859_14,
            0x10 => TextFormat::Iso8859_15,
            0x11 => TextFormat::Iso8859_16,
            0x12 => TextFormat::Utf8,
            0x13 => TextFormat::Utf16,
            0x14 => TextFormat::Utf16Be,
            0x15 => TextFormat::Utf16Le,
            _ => return Err(TextError::UnsupportedFormat { code }),
        };
        Ok(format)
    }

    /// The DD format code carried in the data header.
    pub const fn code(self) -> u8 {
        match self {
            TextFormat::Binary => 0x00,
            TextFormat::Iso8859_2 => 0x04,
            TextFormat::Iso8859_3 => 0x05,
            TextFormat::Iso8859_4 => 0x06,
            TextFormat::Iso8859_5 => 0x07,
            TextFormat::Iso8859_6 => 0x08,
            TextFormat::Iso8859_7 => 0x09,
            TextFormat::Iso8859_8 => 0x0a,
            TextFormat::Iso8859_10 => 0x0c,
            TextFormat::Iso8859_13 => 0x0e,
            TextFormat::Iso8859_14 => 0x0f,
            TextFormat::Iso8859_15 => 0x10,
            TextFormat::Iso8859_16 => 0x11,
            TextFormat::Utf8 => 0x12,
            TextFormat::Utf16 => 0x13,
            TextFormat::Utf16Be => 0x14,
            TextFormat::Utf16Le => 0x15,
        }
    }

    /// Resolve a format from its display name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.to_ascii_lowercase();
        ALL_FORMATS
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| TextError::UnsupportedFormatName {
                name: name.to_string(),
            })
    }

    /// Display name, also accepted by [`TextFormat::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            TextFormat::Binary => "binary",
            TextFormat::Iso8859_2 => "iso-8859-2",
            TextFormat::Iso8859_3 => "iso-8859-3",
            TextFormat::Iso8859_4 => "iso-8859-4",
            TextFormat::Iso8859_5 => "iso-8859-5",
            TextFormat::Iso8859_6 => "iso-8859-6",
            TextFormat::Iso8859_7 => "iso-8859-7",
            TextFormat::Iso8859_8 => "iso-8859-8",
            TextFormat::Iso8859_10 => "iso-8859-10",
            TextFormat::Iso8859_13 => "iso-8859-13",
            TextFormat::Iso8859_14 => "iso-8859-14",
            TextFormat::Iso8859_15 => "iso-8859-15",
            TextFormat::Iso8859_16 => "iso-8859-16",
            TextFormat::Utf8 => "utf-8",
            TextFormat::Utf16 => "utf-16",
            TextFormat::Utf16Be => "utf-16be",
            TextFormat::Utf16Le => "utf-16le",
        }
    }

    pub(crate) fn codec(self) -> Codec {
        match self {
            TextFormat::Binary => Codec::Identity,
            TextFormat::Utf16 | TextFormat::Utf16Le => Codec::Utf16 { big_endian: false },
            TextFormat::Utf16Be => Codec::Utf16 { big_endian: true },
            TextFormat::Iso8859_2 => Codec::Whatwg(encoding_rs::ISO_8859_2),
            TextFormat::Iso8859_3 => Codec::Whatwg(encoding_rs::ISO_8859_3),
            TextFormat::Iso8859_4 => Codec::Whatwg(encoding_rs::ISO_8859_4),
            TextFormat::Iso8859_5 => Codec::Whatwg(encoding_rs::ISO_8859_5),
            TextFormat::Iso8859_6 => Codec::Whatwg(encoding_rs::ISO_8859_6),
            TextFormat::Iso8859_7 => Codec::Whatwg(encoding_rs::ISO_8859_7),
            TextFormat::Iso8859_8 => Codec::Whatwg(encoding_rs::ISO_8859_8),
            TextFormat::Iso8859_10 => Codec::Whatwg(encoding_rs::ISO_8859_10),
            TextFormat::Iso8859_13 => Codec::Whatwg(encoding_rs::ISO_8859_13),
            TextFormat::Iso8859_14 => Codec::Whatwg(encoding_rs::ISO_8859_14),
            TextFormat::Iso8859_15 => Codec::Whatwg(encoding_rs::ISO_8859_15),
            TextFormat::Iso8859_16 => Codec::Whatwg(encoding_rs::ISO_8859_16),
            TextFormat::Utf8 => Codec::Whatwg(encoding_rs::UTF_8),
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for format in ALL_FORMATS {
            assert_eq!(TextFormat::from_code(format.code()).unwrap(), format);
        }
    }

    #[test]
    fn names_roundtrip() {
        for format in ALL_FORMATS {
            assert_eq!(TextFormat::from_name(format.name()).unwrap(), format);
        }
        assert_eq!(
            TextFormat::from_name("UTF-16BE").unwrap(),
            TextFormat::Utf16Be
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        // BCD, 7-bit packed, and the UTF-32 family have no codec here.
        for code in [0x01u8, 0x02, 0x03, 0x0b, 0x0d, 0x16, 0x17, 0x18, 0xff] {
            assert!(matches!(
                TextFormat::from_code(code),
                Err(TextError::UnsupportedFormat { .. })
            ));
        }
        assert!(matches!(
            TextFormat::from_name("klingon"),
            Err(TextError::UnsupportedFormatName { .. })
        ));
    }
}
