use crate::format::TextFormat;

/// Errors that can occur while transcoding message text.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The DD format code has no codec.
    #[error("text format {code:#04x} is not supported")]
    UnsupportedFormat { code: u8 },

    /// The format name has no codec.
    #[error("text format {name:?} is not supported")]
    UnsupportedFormatName { name: String },

    /// The text contains characters the target encoding cannot represent.
    #[error("text is not representable in {format}")]
    Unmappable { format: TextFormat },
}

pub type Result<T> = std::result::Result<T, TextError>;
