// libpn532/src/prelude.rs

pub use crate::card::{CardDump, Tag};
pub use crate::device::DeviceBuilder;
pub use crate::device::{Device, Initialized, Uninitialized};
pub use crate::protocol::{Command, Response};
pub use crate::wallet::Wallet;
pub use crate::{
    BlockData, CardBaud, DeviceStatus, Error, ExchangeResult, FirmwareVersion, Key, KeySlot,
    Result, SamMode, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_grid, ms, parse_hex};
