//! Data-rate block geometry.
//!
//! The air interface fixes the data-block byte size per coding rate, and a
//! per-rate mask folded into the block CRC-9 (ETSI TS 102 361-1, Table
//! B.21). Confirmed blocks give up two bytes of payload to the serial
//! number and checksum header.

/// Packet-data coding rates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RateType {
    /// Rate ½ coded data, 12-byte blocks.
    Rate12,
    /// Rate ¾ coded data, 18-byte blocks.
    Rate34,
    /// Rate 1 (uncoded) data, 22-byte blocks.
    Rate1,
}

/// All rates, in ascending block size.
pub const ALL_RATES: [RateType; 3] = [RateType::Rate12, RateType::Rate34, RateType::Rate1];

impl RateType {
    /// Total on-air block length in bytes.
    pub const fn block_len(self) -> usize {
        match self {
            RateType::Rate12 => 12,
            RateType::Rate34 => 18,
            RateType::Rate1 => 22,
        }
    }

    /// User payload bytes carried per block.
    pub const fn payload_len(self, confirmed: bool) -> usize {
        if confirmed {
            self.block_len() - 2
        } else {
            self.block_len()
        }
    }

    /// Mask XORed into the finished block CRC-9.
    pub const fn crc9_mask(self) -> u16 {
        match self {
            RateType::Rate12 => 0x00f0,
            RateType::Rate34 => 0x01ff,
            RateType::Rate1 => 0x010f,
        }
    }

    /// Human-readable rate name.
    pub fn name(self) -> &'static str {
        match self {
            RateType::Rate12 => "rate 1/2",
            RateType::Rate34 => "rate 3/4",
            RateType::Rate1 => "rate 1",
        }
    }
}
