use crate::device::{Device, Initialized};
use crate::protocol::{Command, Response};
use crate::types::{BlockData, DeviceStatus, ExchangeResult, Key, KeySlot};
use crate::utils::DEFAULT_TIMEOUT_MS;
use crate::{Error, Result};

/// Write one 16-byte block. Assumes the block was authenticated.
///
/// The manufacturer block and sector trailers are refused outright; the
/// controller's status byte is returned verbatim for everything else.
pub fn write_block(
    tag: &crate::card::Tag,
    device: &mut Device<Initialized>,
    block: u8,
    data: &BlockData,
) -> Result<DeviceStatus> {
    super::ensure_block_in_range(block)?;
    super::ensure_block_writable(block)?;

    let cmd = Command::WriteBlock {
        target: tag.target(),
        block,
        data: *data,
    };

    match device.execute(cmd, DEFAULT_TIMEOUT_MS)? {
        Response::Exchange { status, .. } => Ok(status),
        other => Err(Error::UnexpectedResponse {
            expected: 0x41,
            actual: other.response_code(),
        }),
    }
}

/// Authenticate, then write only if the authentication status is clean.
/// Bounds are checked before authenticating: a protected block never even
/// starts the exchange.
pub fn write_block_with_key(
    tag: &crate::card::Tag,
    device: &mut Device<Initialized>,
    block: u8,
    slot: KeySlot,
    key: &Key,
    data: &BlockData,
) -> Result<ExchangeResult<()>> {
    super::ensure_block_in_range(block)?;
    super::ensure_block_writable(block)?;

    let status = super::authenticate_block(tag, device, block, slot, key)?;
    if !status.is_ok() {
        return Ok(Err(status));
    }

    let status = write_block(tag, device, block, data)?;
    if status.is_ok() {
        Ok(Ok(()))
    } else {
        Ok(Err(status))
    }
}
