//! DMR packet-data framing: blocks, fragments, and their checksums.
//!
//! This is the core value-add layer of dmrpad. A user payload ("fragment",
//! up to 1500 bytes) is split into fixed-size data blocks sized by the
//! active data rate; every confirmed block carries a 7-bit serial number
//! and a CRC-9, and the whole fragment is protected by a CRC-32 embedded
//! in the final block. The inverse direction reassembles a received block
//! sequence and validates both checksums.
//!
//! No I/O happens here — every operation is a pure function over
//! caller-owned buffers, so independent fragments can be processed
//! concurrently without coordination.

pub mod block;
pub mod crc;
pub mod error;
pub mod fragment;
pub mod rate;

pub use block::DataBlock;
pub use crc::{crc32_fragment, crc9};
pub use error::{FrameError, Result};
pub use fragment::{combine, fragment, DataFragment, MAX_FRAGMENT_SIZE};
pub use rate::RateType;
