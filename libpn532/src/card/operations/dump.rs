use log::warn;

use crate::constants::BLOCK_COUNT_1K;
use crate::device::{Device, Initialized};
use crate::types::{BlockData, DeviceStatus, Key, KeySlot};
use crate::{Error, Result};

/// Outcome of a card dump: every block read before the first failure, and
/// the failure itself if one occurred.
#[derive(Debug, Clone)]
pub struct CardDump {
    pub blocks: Vec<BlockData>,
    pub failed: Option<BlockFailure>,
}

/// The block a dump stopped at and the status the controller reported.
#[derive(Debug, Clone, Copy)]
pub struct BlockFailure {
    pub block: u8,
    pub status: DeviceStatus,
}

impl CardDump {
    /// True when every requested block was read.
    pub fn is_complete(&self) -> bool {
        self.failed.is_none()
    }
}

/// Read blocks `0..block_count`, authenticating each one with the same key.
/// Sector trailers are read like any other block. The dump stops at the
/// first authentication or read failure and keeps what was read so far.
pub fn dump(
    tag: &crate::card::Tag,
    device: &mut Device<Initialized>,
    slot: KeySlot,
    key: &Key,
    block_count: u8,
) -> Result<CardDump> {
    // Reject a range that would walk off the card before any traffic.
    if block_count > BLOCK_COUNT_1K {
        return Err(Error::BlockOutOfRange {
            block: BLOCK_COUNT_1K,
        });
    }

    let mut blocks = Vec::with_capacity(block_count as usize);
    for block in 0..block_count {
        match super::read_block_with_key(tag, device, block, slot, key)? {
            Ok(data) => blocks.push(data),
            Err(status) => {
                warn!("dump stopped at block {}: {}", block, status);
                return Ok(CardDump {
                    blocks,
                    failed: Some(BlockFailure { block, status }),
                });
            }
        }
    }

    Ok(CardDump {
        blocks,
        failed: None,
    })
}
