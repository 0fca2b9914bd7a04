use crate::device::{Device, Initialized};
use crate::protocol::{parser, Command, Response};
use crate::types::{BlockData, ExchangeResult, Key, KeySlot};
use crate::utils::DEFAULT_TIMEOUT_MS;
use crate::{Error, Result};

/// Read one 16-byte block. Assumes the block was authenticated.
///
/// The status byte decides whether the data bytes mean anything: on a
/// non-zero status they are dropped and the status is handed back instead
/// of block content.
pub fn read_block(
    tag: &crate::card::Tag,
    device: &mut Device<Initialized>,
    block: u8,
) -> Result<ExchangeResult<BlockData>> {
    super::ensure_block_in_range(block)?;

    let cmd = Command::ReadBlock {
        target: tag.target(),
        block,
    };

    match device.execute(cmd, DEFAULT_TIMEOUT_MS)? {
        Response::Exchange { status, data } => {
            if !status.is_ok() {
                return Ok(Err(status));
            }
            Ok(Ok(parser::block_at(&data, 0)?))
        }
        other => Err(Error::UnexpectedResponse {
            expected: 0x41,
            actual: other.response_code(),
        }),
    }
}

/// Authenticate, then read only if the authentication status is clean. A
/// dirty status short-circuits — the read command is never issued.
pub fn read_block_with_key(
    tag: &crate::card::Tag,
    device: &mut Device<Initialized>,
    block: u8,
    slot: KeySlot,
    key: &Key,
) -> Result<ExchangeResult<BlockData>> {
    let status = super::authenticate_block(tag, device, block, slot, key)?;
    if !status.is_ok() {
        return Ok(Err(status));
    }
    read_block(tag, device, block)
}
