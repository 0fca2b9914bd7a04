// libpn532/src/card/mod.rs

use crate::device::{Device, Initialized};
use crate::types::{BlockData, DeviceStatus, ExchangeResult, Key, KeySlot, PassiveTarget, Uid};
use crate::Result;

pub mod operations;

pub use operations::{dump, wait_for_target, BlockFailure, CardDump};

/// Every fourth block holds the sector's keys and access bits. (Geometry
/// of a MIFARE Classic 1K card: 16 sectors of 4 blocks.)
pub fn is_trailer(block: u8) -> bool {
    block % 4 == 3
}

/// A passive target acquired by detection. Carries what the controller
/// reported about the card; the target number is how the data-exchange
/// commands address it while it stays in the field.
#[derive(Debug, Clone)]
pub struct Tag {
    target: u8,
    sens_res: [u8; 2],
    sel_res: u8,
    uid: Uid,
}

impl Tag {
    pub fn new(info: PassiveTarget) -> Self {
        Self {
            target: info.target,
            sens_res: info.sens_res,
            sel_res: info.sel_res,
            uid: info.uid,
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// ATQA bytes from detection, for diagnostics.
    pub fn sens_res(&self) -> [u8; 2] {
        self.sens_res
    }

    /// SAK byte from detection (0x08 for a MIFARE Classic 1K).
    pub fn sel_res(&self) -> u8 {
        self.sel_res
    }

    /// Authenticate one block. The controller's status byte comes back
    /// verbatim; the session drops authentication state on failure, so
    /// callers authenticate again per block.
    pub fn authenticate_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        slot: KeySlot,
        key: &Key,
    ) -> Result<DeviceStatus> {
        operations::authenticate_block(self, device, block, slot, key)
    }

    /// Read one block. Assumes the block was authenticated.
    pub fn read_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
    ) -> Result<ExchangeResult<BlockData>> {
        operations::read_block(self, device, block)
    }

    /// Write one block. Assumes the block was authenticated.
    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        data: &BlockData,
    ) -> Result<DeviceStatus> {
        operations::write_block(self, device, block, data)
    }

    /// Authenticate-then-read; a dirty authentication status short-circuits
    /// and no read command is issued.
    pub fn read_block_with_key(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        slot: KeySlot,
        key: &Key,
    ) -> Result<ExchangeResult<BlockData>> {
        operations::read_block_with_key(self, device, block, slot, key)
    }

    /// Authenticate-then-write with the same short-circuit rule.
    pub fn write_block_with_key(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        slot: KeySlot,
        key: &Key,
        data: &BlockData,
    ) -> Result<ExchangeResult<()>> {
        operations::write_block_with_key(self, device, block, slot, key, data)
    }

    /// Dump the card block by block, stopping at the first failure while
    /// keeping everything read so far.
    pub fn dump(
        &self,
        device: &mut Device<Initialized>,
        slot: KeySlot,
        key: &Key,
        block_count: u8,
    ) -> Result<CardDump> {
        operations::dump(self, device, slot, key, block_count)
    }
}
