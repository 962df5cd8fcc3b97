use bytes::{BufMut, Bytes, BytesMut};

use crate::crc::crc9;
use crate::error::{FrameError, Result};
use crate::rate::RateType;

/// One packet-data block.
///
/// Wire layout of a confirmed block:
/// ```text
/// ┌────────────────────────┬────────────────┬──────────────────────┐
/// │ serial<<1 | crc bit 8  │ crc bits 7..0  │ payload               │
/// │ (1B)                   │ (1B)           │ (block length − 2)    │
/// └────────────────────────┴────────────────┴──────────────────────┘
/// ```
/// Unconfirmed blocks carry payload only and have no per-block checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBlock {
    /// Block sequence number, 0..=127, wrapping across one fragment.
    /// Meaningful only for confirmed blocks.
    pub serial: u8,
    /// Block CRC-9. Meaningful only for confirmed blocks.
    pub crc: u16,
    /// Whether checksum validation succeeded on decode. Unconfirmed
    /// blocks have nothing to validate and are always verified.
    pub verified: bool,
    /// User payload bytes.
    pub data: Bytes,
    /// Declared payload length, fixed by (rate, confirmed).
    pub length: u8,
}

impl DataBlock {
    /// Decode one block from its on-air bytes.
    ///
    /// A confirmed block whose CRC-9 disagrees with its serial and payload
    /// is unusable and rejected with [`FrameError::BlockCrc`].
    pub fn decode(bytes: &[u8], rate: RateType, confirmed: bool) -> Result<Self> {
        let need = rate.block_len();
        if bytes.len() < need {
            return Err(FrameError::ShortBlock {
                need,
                got: bytes.len(),
            });
        }

        let length = rate.payload_len(confirmed);
        if confirmed {
            let serial = bytes[0] >> 1;
            let stored = u16::from(bytes[0] & 0x01) << 8 | u16::from(bytes[1]);
            let data = Bytes::copy_from_slice(&bytes[2..2 + length]);

            let computed = crc9(serial, &data, rate);
            if computed != stored {
                return Err(FrameError::BlockCrc { computed, stored });
            }

            Ok(Self {
                serial,
                crc: stored,
                verified: true,
                data,
                length: length as u8,
            })
        } else {
            Ok(Self {
                serial: 0,
                crc: 0,
                verified: true,
                data: Bytes::copy_from_slice(&bytes[..length]),
                length: length as u8,
            })
        }
    }

    /// Encode into on-air bytes.
    ///
    /// The confirmed form recomputes the CRC-9 from the current serial and
    /// payload, so a block edited after construction stays consistent.
    pub fn encode(&self, rate: RateType, confirmed: bool) -> Bytes {
        let mut wire = BytesMut::with_capacity(rate.block_len());
        if confirmed {
            let crc = crc9(self.serial, &self.data, rate);
            wire.put_u8((self.serial << 1) | ((crc >> 8) as u8 & 0x01));
            wire.put_u8(crc as u8);
        }
        wire.put_slice(&self.data);
        wire.resize(rate.block_len(), 0);
        wire.freeze()
    }
}
