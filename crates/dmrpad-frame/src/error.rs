/// Errors that can occur while framing or reassembling packet data.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The input buffer is too short for the declared block layout.
    #[error("block too short ({got} bytes, need {need})")]
    ShortBlock { need: usize, got: usize },

    /// A confirmed block's CRC-9 does not match its serial and payload.
    #[error("block CRC error ({computed:#05x} != {stored:#05x})")]
    BlockCrc { computed: u16, stored: u16 },

    /// The reassembled fragment's CRC-32 does not match the embedded value.
    #[error("fragment CRC error ({computed:#010x} != {stored:#010x})")]
    FragmentCrc { computed: u32, stored: u32 },

    /// Reassembly was invoked without any blocks.
    #[error("no data blocks to combine")]
    NoBlocks,

    /// The block sequence exceeds the maximum assembled fragment size.
    #[error("fragment overflow ({stored} bytes, capacity {capacity})")]
    FragmentOverflow { stored: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
