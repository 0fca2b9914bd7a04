// libpn532/src/protocol/responses/mod.rs

pub mod detect;
pub mod exchange;
pub mod system;

pub use detect::decode_passive_target;
pub use exchange::decode_exchange;
pub use system::{decode_firmware_version, decode_sam_configuration};

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION,
};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    FirmwareVersion {
        info: crate::types::FirmwareVersion,
    },
    SamConfigured,
    PassiveTarget {
        tag: crate::types::PassiveTarget,
    },
    /// InDataExchange answer: the card-level status byte plus whatever
    /// data bytes the card operation produced.
    Exchange {
        status: crate::types::DeviceStatus,
        data: Vec<u8>,
    },
}

impl Response {
    /// Decode a response body for the given expected command code. The
    /// codec has already stripped the direction marker and the echoed
    /// response code, so `data` holds pure payload bytes.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        match expected_cmd {
            CMD_GET_FIRMWARE_VERSION => {
                let info = system::decode_firmware_version(data)?;
                Ok(Self::FirmwareVersion { info })
            }
            CMD_SAM_CONFIGURATION => {
                system::decode_sam_configuration(data)?;
                Ok(Self::SamConfigured)
            }
            CMD_IN_LIST_PASSIVE_TARGET => {
                let tag = detect::decode_passive_target(data)?;
                Ok(Self::PassiveTarget { tag })
            }
            CMD_IN_DATA_EXCHANGE => {
                let (status, data) = exchange::decode_exchange(data)?;
                Ok(Self::Exchange { status, data })
            }
            _ => {
                // Unknown command: report unexpected response using the first
                // byte of the payload if available.
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_cmd.wrapping_add(1),
                    actual,
                })
            }
        }
    }

    /// Return the response code byte associated with this response variant.
    /// This is useful when surfacing `UnexpectedResponse` errors at higher
    /// layers without needing to re-decode the raw payload.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::FirmwareVersion { .. } => 0x03,
            Response::SamConfigured => 0x15,
            Response::PassiveTarget { .. } => 0x4B,
            Response::Exchange { .. } => 0x41,
        }
    }
}
