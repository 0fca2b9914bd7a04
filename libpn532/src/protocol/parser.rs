// libpn532/src/protocol/parser.rs

use crate::types::{BlockData, DeviceStatus, Uid};
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse a UID of `len` bytes at `start` with bounds and size checking.
pub fn uid_at(data: &[u8], start: usize, len: usize) -> Result<Uid> {
    let s = slice_at(data, start, len)?;
    Uid::try_from(s)
}

/// Parse the controller status byte at `idx`.
pub fn status_at(data: &[u8], idx: usize) -> Result<DeviceStatus> {
    Ok(DeviceStatus::new(byte_at(data, idx)?))
}

/// Parse a 16-byte MIFARE block at `start` with bounds checking.
pub fn block_at(data: &[u8], start: usize) -> Result<BlockData> {
    let s = slice_at(data, start, 16)?;
    BlockData::try_from(s)
}
