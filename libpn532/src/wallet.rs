// libpn532/src/wallet.rs
//! Stored-value helper: a signed balance kept in one MIFARE data block.
//!
//! The balance is a big-endian `i32` in bytes 0..4 of a single data block
//! (block 6 by default, the first data block of sector 1); the remaining
//! twelve bytes are written as zero. Every operation waits for a card with
//! a bounded detection loop, then authenticates and touches only the
//! balance block, so the card needs to be in the field just for the length
//! of one call.

use log::debug;

use crate::card::{self, Tag};
use crate::constants::BLOCK_LEN;
use crate::device::{Device, Initialized};
use crate::types::{BlockData, CardBaud, ExchangeResult, Key, KeySlot};
use crate::utils::DEFAULT_TIMEOUT_MS;
use crate::Result;

/// First data block of sector 1. Sector 0 is avoided because it starts
/// with the read-only manufacturer block.
pub const DEFAULT_BALANCE_BLOCK: u8 = 6;

// Overall detection budget per operation when the caller doesn't set one.
const DEFAULT_DETECT_BUDGET_MS: u64 = 5000;

/// Render a balance as block content: big-endian value, zero padding.
pub fn encode_balance(value: i32) -> BlockData {
    let mut bytes = [0u8; BLOCK_LEN];
    bytes[..4].copy_from_slice(&value.to_be_bytes());
    BlockData::from_bytes(bytes)
}

/// Read the balance back out of block content. Bytes 4..16 are ignored.
pub fn decode_balance(block: &BlockData) -> i32 {
    let bytes = block.as_bytes();
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Balance operations over one fixed block of a MIFARE Classic card.
///
/// Holds only configuration; the device handle is passed into each call,
/// matching the exclusive-ownership model of the rest of the crate.
#[derive(Debug, Clone)]
pub struct Wallet {
    block: u8,
    slot: KeySlot,
    key: Key,
    detect_budget_ms: u64,
}

impl Wallet {
    /// Wallet on [`DEFAULT_BALANCE_BLOCK`] with the factory transport key
    /// in slot A.
    pub fn new() -> Self {
        Self {
            block: DEFAULT_BALANCE_BLOCK,
            slot: KeySlot::A,
            key: Key::DEFAULT,
            detect_budget_ms: DEFAULT_DETECT_BUDGET_MS,
        }
    }

    /// Use a different data block. Bounds and trailer protection are
    /// enforced by the block operations when the wallet is used.
    pub fn with_block(mut self, block: u8) -> Self {
        self.block = block;
        self
    }

    pub fn with_key(mut self, slot: KeySlot, key: Key) -> Self {
        self.slot = slot;
        self.key = key;
        self
    }

    /// Cap how long each operation waits for a card to enter the field.
    pub fn with_detection_budget(mut self, budget_ms: u64) -> Self {
        self.detect_budget_ms = budget_ms;
        self
    }

    /// The block this wallet stores its balance in.
    pub fn block(&self) -> u8 {
        self.block
    }

    /// Wait for a card and read the balance.
    pub fn balance(&self, device: &mut Device<Initialized>) -> Result<ExchangeResult<i32>> {
        let tag = self.acquire(device)?;
        match tag.read_block_with_key(device, self.block, self.slot, &self.key)? {
            Ok(block) => Ok(Ok(decode_balance(&block))),
            Err(status) => Ok(Err(status)),
        }
    }

    /// Wait for a card and overwrite the balance.
    pub fn set_balance(
        &self,
        device: &mut Device<Initialized>,
        value: i32,
    ) -> Result<ExchangeResult<()>> {
        let tag = self.acquire(device)?;
        tag.write_block_with_key(device, self.block, self.slot, &self.key, &encode_balance(value))
    }

    /// Credit the balance by `amount` and return the new balance.
    pub fn charge(
        &self,
        device: &mut Device<Initialized>,
        amount: i32,
    ) -> Result<ExchangeResult<i32>> {
        self.adjust(device, amount)
    }

    /// Debit the balance by `amount` and return the new balance. Nothing
    /// stops the balance going negative; the block stores a signed value.
    pub fn pay(
        &self,
        device: &mut Device<Initialized>,
        amount: i32,
    ) -> Result<ExchangeResult<i32>> {
        self.adjust(device, amount.saturating_neg())
    }

    /// Read-modify-write against one acquired target. Arithmetic saturates
    /// at the i32 limits rather than wrapping.
    fn adjust(&self, device: &mut Device<Initialized>, delta: i32) -> Result<ExchangeResult<i32>> {
        let tag = self.acquire(device)?;
        let current = match tag.read_block_with_key(device, self.block, self.slot, &self.key)? {
            Ok(block) => decode_balance(&block),
            Err(status) => return Ok(Err(status)),
        };
        let updated = current.saturating_add(delta);
        match tag.write_block_with_key(
            device,
            self.block,
            self.slot,
            &self.key,
            &encode_balance(updated),
        )? {
            Ok(()) => {
                debug!("balance {} -> {} on block {}", current, updated, self.block);
                Ok(Ok(updated))
            }
            Err(status) => Ok(Err(status)),
        }
    }

    // MIFARE Classic only answers 106 kbps type A, so the baud is fixed.
    fn acquire(&self, device: &mut Device<Initialized>) -> Result<Tag> {
        card::wait_for_target(
            device,
            CardBaud::Iso14443a,
            DEFAULT_TIMEOUT_MS,
            self.detect_budget_ms,
        )
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
