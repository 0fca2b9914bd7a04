use crate::device::{Device, Initialized};
use crate::protocol::{Command, Response};
use crate::types::{DeviceStatus, Key, KeySlot};
use crate::utils::DEFAULT_TIMEOUT_MS;
use crate::{Error, Result};

/// Authenticate one block with the given key slot and key bytes.
///
/// The controller's status byte is the result: `0x00` on success, `0x14`
/// when the card rejects the key. A non-zero status is data for the caller
/// to inspect, not a transport error — the dialogue itself succeeded.
pub fn authenticate_block(
    tag: &crate::card::Tag,
    device: &mut Device<Initialized>,
    block: u8,
    slot: KeySlot,
    key: &Key,
) -> Result<DeviceStatus> {
    super::ensure_block_in_range(block)?;

    let cmd = Command::AuthenticateBlock {
        target: tag.target(),
        block,
        slot,
        key: *key,
        uid: *tag.uid(),
    };

    match device.execute(cmd, DEFAULT_TIMEOUT_MS)? {
        Response::Exchange { status, .. } => Ok(status),
        other => Err(Error::UnexpectedResponse {
            expected: 0x41,
            actual: other.response_code(),
        }),
    }
}
