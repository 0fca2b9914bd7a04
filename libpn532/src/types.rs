// libpn532/src/types.rs

use crate::Error;
use crate::constants::{KEY_LEN, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B};
use derive_more::Display;
use std::convert::TryFrom;
use std::fmt;

/// UID - Newtype holding a 4, 7 or 10 byte MIFARE identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; 10],
    len: u8,
}

impl Uid {
    /// View the identifier as a slice of its actual length.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Lowercase hex rendering, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl From<[u8; 4]> for Uid {
    fn from(bytes: [u8; 4]) -> Self {
        let mut arr = [0u8; 10];
        arr[..4].copy_from_slice(&bytes);
        Self { bytes: arr, len: 4 }
    }
}

impl From<[u8; 7]> for Uid {
    fn from(bytes: [u8; 7]) -> Self {
        let mut arr = [0u8; 10];
        arr[..7].copy_from_slice(&bytes);
        Self { bytes: arr, len: 7 }
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 | 10 => {
                let mut arr = [0u8; 10];
                arr[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: arr,
                    len: bytes.len() as u8,
                })
            }
            other => Err(Error::InvalidLength {
                expected: 4,
                actual: other,
            }),
        }
    }
}

/// MIFARE Classic authentication key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Transport key programmed into cards at the factory: six 0xFF bytes.
    pub const DEFAULT: Self = Self([0xFF; KEY_LEN]);

    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != KEY_LEN {
            return Err(Error::InvalidLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_LEN];
        arr.copy_from_slice(&bytes[..KEY_LEN]);
        Ok(Self(arr))
    }
}

/// Key slot selector. On the wire the slot is the MIFARE authentication
/// command byte itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeySlot {
    #[display(fmt = "key A")]
    A,
    #[display(fmt = "key B")]
    B,
}

impl KeySlot {
    /// MIFARE command byte for this slot (0x60 for A, 0x61 for B).
    pub fn command_byte(self) -> u8 {
        match self {
            KeySlot::A => MIFARE_CMD_AUTH_A,
            KeySlot::B => MIFARE_CMD_AUTH_B,
        }
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// Status byte reported by the controller in the first data byte of an
/// InDataExchange response. Zero means success; anything else is a
/// controller-side condition the caller decides how to handle. Status
/// bytes are data, not transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceStatus(u8);

impl DeviceStatus {
    /// Successful exchange.
    pub const OK: Self = Self(0x00);
    /// MIFARE authentication rejected (wrong key for the sector).
    pub const AUTH_FAILED: Self = Self(0x14);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    pub fn is_ok(&self) -> bool {
        self.0 == 0x00
    }

    /// Short description of the known controller status codes (PN532 user
    /// manual, error handling table).
    pub fn describe(&self) -> &'static str {
        match self.0 {
            0x00 => "success",
            0x01 => "target response timeout",
            0x02 => "crc error",
            0x03 => "parity error",
            0x05 => "framing error",
            0x07 => "buffer size insufficient",
            0x0B => "rf protocol error",
            0x10 => "invalid parameter",
            0x13 => "data format mismatch",
            0x14 => "mifare authentication failed",
            0x23 => "wrong uid check byte",
            0x25 => "invalid device state",
            0x27 => "command not acceptable",
            0x29 => "target released",
            0x2A => "card id mismatch",
            0x2B => "card disappeared",
            _ => "unknown controller status",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x} ({})", self.0, self.describe())
    }
}

/// Result of an exchange whose failure mode is a controller status byte
/// rather than a link error. `Ok` carries the decoded data, `Err` the
/// non-zero status.
pub type ExchangeResult<T> = std::result::Result<T, DeviceStatus>;

/// Firmware identification returned by GetFirmwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "v{}.{} (ic {:#04x}, support {:#04x})", version, revision, ic, support)]
pub struct FirmwareVersion {
    /// IC identifier, 0x32 for the PN532.
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    /// Feature support bitmask (ISO14443A/B, ISO18092).
    pub support: u8,
}

/// Baud rate / modulation selector for InListPassiveTarget.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBaud {
    /// 106 kbps ISO/IEC 14443 type A (MIFARE)
    Iso14443a = 0x00,
    /// 212 kbps FeliCa
    Felica212 = 0x01,
    /// 424 kbps FeliCa
    Felica424 = 0x02,
    /// 106 kbps ISO/IEC 14443-3 type B
    Iso14443b = 0x03,
    /// 106 kbps Innovision Jewel
    Jewel = 0x04,
}

impl Default for CardBaud {
    fn default() -> Self {
        // MIFARE Classic is the target card family of this driver.
        CardBaud::Iso14443a
    }
}

/// SAM operating mode for SAMConfiguration.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    /// No security access module in the data path.
    Normal = 0x01,
    VirtualCard = 0x02,
    WiredCard = 0x03,
    DualCard = 0x04,
}

/// One target reported by InListPassiveTarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveTarget {
    /// Logical target number assigned by the controller (1-based).
    pub target: u8,
    /// SENS_RES / ATQA bytes as sent by the card.
    pub sens_res: [u8; 2],
    /// SEL_RES / SAK byte.
    pub sel_res: u8,
    pub uid: Uid,
}
