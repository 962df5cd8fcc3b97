use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::block::DataBlock;
use crate::crc::{crc32_fragment, crc9};
use crate::error::{FrameError, Result};
use crate::rate::RateType;

/// Largest user payload one fragment may carry (n_DFragMax, ETSI TS
/// 102 361-1).
pub const MAX_FRAGMENT_SIZE: usize = 1500;

/// One logical unit of user data, spanning one or more blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFragment {
    /// Payload bytes. On the reassembly side this is the whole padded
    /// block region, trailing checksum included, because the block layer
    /// has no record of the pre-padding payload length.
    pub data: Bytes,
    /// Number of blocks the payload needs at the chosen rate. Zero until
    /// [`DataFragment::blocks`] has run.
    pub needed: usize,
    /// Fragment CRC-32.
    pub crc: u32,
}

impl DataFragment {
    /// Wrap caller data, truncating anything past [`MAX_FRAGMENT_SIZE`].
    pub fn new(data: impl Into<Bytes>) -> Self {
        let mut data: Bytes = data.into();
        if data.len() > MAX_FRAGMENT_SIZE {
            data.truncate(MAX_FRAGMENT_SIZE);
        }
        Self {
            data,
            needed: 0,
            crc: 0,
        }
    }

    /// Meaningful bytes present.
    pub fn stored(&self) -> usize {
        self.data.len()
    }

    /// Split into on-air blocks at the given rate.
    ///
    /// Computes the fragment CRC-32 over the zero-padded block region and
    /// embeds it in the final block's last four bytes, least significant
    /// byte first; every block gets its serial number and CRC-9. An empty
    /// payload still yields one block so the checksum has somewhere to
    /// live.
    pub fn blocks(&mut self, rate: RateType, confirmed: bool) -> Vec<DataBlock> {
        let cap = rate.payload_len(confirmed);
        self.needed = needed_blocks(self.data.len(), cap);
        self.crc = crc32_fragment(&self.data, self.needed * cap);

        debug!(
            stored = self.data.len(),
            needed = self.needed,
            rate = rate.name(),
            confirmed,
            "fragmenting"
        );

        let mut blocks = Vec::with_capacity(self.needed);
        for i in 0..self.needed {
            let serial = (i % 128) as u8;
            let offset = i * cap;

            let mut payload = BytesMut::zeroed(cap);
            if offset < self.data.len() {
                let end = self.data.len().min(offset + cap);
                payload[..end - offset].copy_from_slice(&self.data[offset..end]);
            }
            if i == self.needed - 1 {
                payload[cap - 4..].copy_from_slice(&self.crc.to_le_bytes());
            }

            let payload = payload.freeze();
            let crc = crc9(serial, &payload, rate);
            blocks.push(DataBlock {
                serial,
                crc,
                verified: true,
                data: payload,
                length: cap as u8,
            });
        }
        blocks
    }
}

/// Split `data` into on-air blocks. Convenience over
/// [`DataFragment::blocks`].
pub fn fragment(data: &[u8], rate: RateType, confirmed: bool) -> Vec<DataBlock> {
    let mut frag = DataFragment::new(Bytes::copy_from_slice(data));
    frag.blocks(rate, confirmed)
}

/// Blocks required to carry `stored` payload bytes at `cap` bytes per
/// block, keeping at least four trailing bytes free for the fragment
/// checksum.
pub(crate) fn needed_blocks(stored: usize, cap: usize) -> usize {
    let mut needed = stored.div_ceil(cap);
    if needed * cap - stored < 4 {
        needed += 1;
    }
    needed
}

/// Reassemble a block sequence into a validated fragment.
///
/// Blocks with a zero declared length are skipped. The final block must
/// carry at least the four trailing checksum bytes. A sequence whose
/// payload exceeds the padded size of a maximum-length fragment is
/// rejected with [`FrameError::FragmentOverflow`] rather than silently
/// truncated, and a CRC-32 mismatch rejects the whole fragment.
pub fn combine(blocks: &[DataBlock]) -> Result<DataFragment> {
    if blocks.is_empty() {
        return Err(FrameError::NoBlocks);
    }

    let tail = &blocks[blocks.len() - 1].data;
    if tail.len() < 4 {
        return Err(FrameError::ShortBlock {
            need: 4,
            got: tail.len(),
        });
    }

    // Every block of one fragment shares a capacity; the padded size of a
    // maximum-length fragment bounds what a well-formed sequence can
    // assemble to.
    let cap = blocks.iter().map(|b| b.data.len()).max().unwrap_or(4);
    let capacity = needed_blocks(MAX_FRAGMENT_SIZE, cap) * cap;

    let mut assembled = BytesMut::with_capacity(capacity);
    for block in blocks {
        if block.length == 0 {
            continue;
        }
        if assembled.len() + block.data.len() > capacity {
            return Err(FrameError::FragmentOverflow {
                stored: assembled.len() + block.data.len(),
                capacity,
            });
        }
        assembled.extend_from_slice(&block.data);
    }

    let expected = u32::from_le_bytes(tail[tail.len() - 4..].try_into().unwrap());

    let stored = assembled.len();
    let computed = crc32_fragment(&assembled, stored);
    if computed != expected {
        return Err(FrameError::FragmentCrc {
            computed,
            stored: expected,
        });
    }

    debug!(stored, blocks = blocks.len(), "combined fragment");

    Ok(DataFragment {
        data: assembled.freeze(),
        needed: blocks.len(),
        crc: expected,
    })
}
