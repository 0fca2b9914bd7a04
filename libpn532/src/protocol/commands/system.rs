// libpn532/src/protocol/commands/system.rs

use crate::constants::{CMD_GET_FIRMWARE_VERSION, CMD_SAM_CONFIGURATION};
use crate::types::SamMode;

/// Encode GetFirmwareVersion (command code 0x02). No parameters.
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![CMD_GET_FIRMWARE_VERSION]
}

/// Encode SAMConfiguration (command code 0x14).
///
/// `timeout` is in 50 ms units (0x14 = one second) and only matters for the
/// virtual-card mode; `use_irq` keeps the IRQ pin active.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![CMD_SAM_CONFIGURATION, mode as u8, timeout, use_irq as u8]
}
