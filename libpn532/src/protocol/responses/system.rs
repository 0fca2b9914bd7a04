// libpn532/src/protocol/responses/system.rs

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Decode a GetFirmwareVersion response body (response code = 0x03).
/// Layout after the frame markers: ic(1) + ver(1) + rev(1) + support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    const LEN: usize = 4;
    parser::ensure_len(data, LEN)?;

    Ok(FirmwareVersion {
        ic: parser::byte_at(data, 0)?,
        version: parser::byte_at(data, 1)?,
        revision: parser::byte_at(data, 2)?,
        support: parser::byte_at(data, 3)?,
    })
}

/// Decode a SAMConfiguration response body (response code = 0x15).
/// The device acknowledges with no data bytes at all.
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    if !data.is_empty() {
        return Err(Error::InvalidLength {
            expected: 0,
            actual: data.len(),
        });
    }
    Ok(())
}
