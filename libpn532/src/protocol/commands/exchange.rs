// libpn532/src/protocol/commands/exchange.rs

use crate::constants::{
    BLOCK_LEN, CMD_IN_DATA_EXCHANGE, KEY_LEN, MIFARE_CMD_READ, MIFARE_CMD_WRITE,
};
use crate::types::{BlockData, Key, KeySlot, Uid};

/// Encode an InDataExchange MIFARE authentication.
///
/// Layout: `[0x40, target, key_cmd, block, key(6), uid(4|7|10)]`. The
/// controller needs the card UID again here even though it selected the
/// target itself.
pub fn encode_authenticate(target: u8, block: u8, slot: KeySlot, key: &Key, uid: &Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + KEY_LEN + uid.as_bytes().len());
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.push(slot.command_byte());
    buf.push(block);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode an InDataExchange MIFARE block read: `[0x40, target, 0x30, block]`.
pub fn encode_read_block(target: u8, block: u8) -> Vec<u8> {
    vec![CMD_IN_DATA_EXCHANGE, target, MIFARE_CMD_READ, block]
}

/// Encode an InDataExchange MIFARE block write:
/// `[0x40, target, 0xA0, block, data(16)]`.
pub fn encode_write_block(target: u8, block: u8, data: &BlockData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + BLOCK_LEN);
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.push(MIFARE_CMD_WRITE);
    buf.push(block);
    buf.extend_from_slice(data.as_bytes());
    buf
}
