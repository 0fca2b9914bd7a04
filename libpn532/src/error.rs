// libpn532/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    // Hardware access stays behind the `spi` feature so the protocol stack
    // builds and tests off-target.
    #[cfg(feature = "spi")]
    #[error("spi error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[cfg(feature = "spi")]
    #[error("gpio error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("payload must be 1..=255 bytes, got {actual}")]
    PayloadSize { actual: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("device did not acknowledge the command frame")]
    NoAck,

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("expected exactly one target, detection reported {targets}")]
    NoCard { targets: u8 },

    #[error("operation timed out")]
    Timeout,

    #[error("block {block} out of range for a MIFARE Classic 1K card (0..=63)")]
    BlockOutOfRange { block: u8 },

    #[error("block {block} is a manufacturer or trailer block, refusing plain write")]
    ProtectedBlock { block: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
