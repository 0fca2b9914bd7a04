// libpn532/src/protocol/commands/mod.rs

pub mod detect;
pub mod exchange;
pub mod system;

pub use detect::encode_list_passive_target;
pub use exchange::{encode_authenticate, encode_read_block, encode_write_block};
pub use system::{encode_get_firmware_version, encode_sam_configuration};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: crate::types::SamMode,
        timeout: u8,
        use_irq: bool,
    },
    ListPassiveTarget {
        max_targets: u8,
        baud: crate::types::CardBaud,
    },
    /// MIFARE Classic sector authentication via InDataExchange.
    AuthenticateBlock {
        target: u8,
        block: u8,
        slot: crate::types::KeySlot,
        key: crate::types::Key,
        uid: crate::types::Uid,
    },
    ReadBlock {
        target: u8,
        block: u8,
    },
    WriteBlock {
        target: u8,
        block: u8,
        data: crate::types::BlockData,
    },
}

impl Command {
    /// Return the command code as defined by the PN532 user manual.
    /// The three MIFARE operations all ride InDataExchange.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => crate::constants::CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => crate::constants::CMD_SAM_CONFIGURATION,
            Self::ListPassiveTarget { .. } => crate::constants::CMD_IN_LIST_PASSIVE_TARGET,
            Self::AuthenticateBlock { .. } => crate::constants::CMD_IN_DATA_EXCHANGE,
            Self::ReadBlock { .. } => crate::constants::CMD_IN_DATA_EXCHANGE,
            Self::WriteBlock { .. } => crate::constants::CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::ListPassiveTarget { max_targets, baud } => {
                encode_list_passive_target(*max_targets, *baud)
            }
            Self::AuthenticateBlock {
                target,
                block,
                slot,
                key,
                uid,
            } => encode_authenticate(*target, *block, *slot, key, uid),
            Self::ReadBlock { target, block } => encode_read_block(*target, *block),
            Self::WriteBlock {
                target,
                block,
                data,
            } => encode_write_block(*target, *block, data),
        }
    }

    /// Response data bytes to budget for when reading the answer frame.
    /// Generous is harmless; the decoder takes the real length from the
    /// frame header.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => 4,
            Self::SamConfiguration { .. } => 0,
            // count + target + SENS_RES(2) + SEL_RES + uid_len + uid, with
            // slack for cards that append an ATS.
            Self::ListPassiveTarget { .. } => 19,
            Self::AuthenticateBlock { .. } | Self::WriteBlock { .. } => 1,
            // status byte + one 16-byte block
            Self::ReadBlock { .. } => 17,
        }
    }
}
