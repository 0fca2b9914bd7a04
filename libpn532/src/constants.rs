// libpn532/src/constants.rs
//! Wire-level protocol constants used across the crate

/// PN532 wire frame preamble + start code: 0x00 0x00 0xFF
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Maximum payload length carried by a normal information frame
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Bytes an encoded frame adds around its payload: preamble, start code,
/// length pair, data checksum and postamble
pub const FRAME_OVERHEAD: usize = 7;

/// Worst-case encoded frame length
pub const MAX_FRAME_LEN: usize = MAX_PAYLOAD_LEN + FRAME_OVERHEAD;

/// Fixed ACK frame sent by the controller after every accepted command
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Direction marker for host-to-device payloads (TFI byte)
pub const TFI_HOST_TO_DEVICE: u8 = 0xD4;
/// Direction marker for device-to-host payloads
pub const TFI_DEVICE_TO_HOST: u8 = 0xD5;

// SPI link control bytes. The PN532 SPI interface multiplexes three
// operations over one bus; the first byte of every exchange selects one.
/// Status-register probe prefix
pub const SPI_STATUS_READ: u8 = 0x02;
/// Host-to-device data write prefix
pub const SPI_DATA_WRITE: u8 = 0x01;
/// Device-to-host data read prefix
pub const SPI_DATA_READ: u8 = 0x03;
/// Value of the status byte once the controller has data ready
pub const SPI_READY: u8 = 0x01;

// Command opcodes (subset used by this driver)
/// GetFirmwareVersion
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// SAMConfiguration
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// InListPassiveTarget
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
/// InDataExchange
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;

// MIFARE Classic sub-commands carried inside InDataExchange
/// Authenticate with key slot A
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
/// Authenticate with key slot B
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
/// Read one 16-byte block
pub const MIFARE_CMD_READ: u8 = 0x30;
/// Write one 16-byte block
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

// MIFARE Classic geometry
/// Bytes per data block
pub const BLOCK_LEN: usize = 16;
/// Bytes per authentication key
pub const KEY_LEN: usize = 6;
/// Blocks on a MIFARE Classic 1K card
pub const BLOCK_COUNT_1K: u8 = 64;
/// Longest UID this link-layer variant accepts from detection
pub const MAX_DETECTED_UID_LEN: usize = 7;

/// SAMConfiguration timeout parameter in 50 ms units; 0x14 is one second
pub const SAM_DEFAULT_TIMEOUT: u8 = 0x14;

// Link timing
/// Interval between readiness probes while waiting for the controller
pub const READY_POLL_INTERVAL_MS: u64 = 10;
/// Oscillator start-up wait after asserting chip select during wake-up
pub const WAKEUP_OSC_START_MS: u64 = 2;
/// Settle delay before and after the wake-up byte
pub const WAKEUP_SETTLE_MS: u64 = 1000;
