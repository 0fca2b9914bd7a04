// fixtures.rs — canned wire payloads and frames shared by the tests

use libpn532::constants::{
    ACK_FRAME, CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    TFI_DEVICE_TO_HOST,
};
use libpn532::protocol::Frame;
use libpn532::types::{BlockData, Key};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0xde, 0xad, 0xbe, 0xef]
}

pub fn sample_key() -> Key {
    Key::from_bytes([0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5])
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

pub fn ack() -> Vec<u8> {
    ACK_FRAME.to_vec()
}

/// Frame a device→host answer for `cmd`: direction marker, echoed response
/// code, then the data bytes.
pub fn response_frame(cmd: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![TFI_DEVICE_TO_HOST, cmd.wrapping_add(1)];
    payload.extend_from_slice(data);
    Frame::encode(&payload).unwrap()
}

/// GetFirmwareVersion answer: IC 0x32, version 1.6, full support mask.
pub fn firmware_frame() -> Vec<u8> {
    response_frame(CMD_GET_FIRMWARE_VERSION, &[0x32, 0x01, 0x06, 0x07])
}

/// InListPassiveTarget answer reporting one MIFARE Classic 1K target with
/// the given UID.
pub fn target_frame(uid: &[u8]) -> Vec<u8> {
    // nb_tg + tg + SENS_RES + SEL_RES + uid_len + uid
    let mut data = vec![0x01, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
    data.extend_from_slice(uid);
    response_frame(CMD_IN_LIST_PASSIVE_TARGET, &data)
}

/// InListPassiveTarget answer reporting an empty field.
pub fn no_target_frame() -> Vec<u8> {
    response_frame(CMD_IN_LIST_PASSIVE_TARGET, &[0x00])
}

/// InDataExchange answer: status byte, then any trailing data.
pub fn exchange_frame(status: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![status];
    payload.extend_from_slice(data);
    response_frame(CMD_IN_DATA_EXCHANGE, &payload)
}

/// InDataExchange answer carrying one 16-byte block.
pub fn read_block_frame(status: u8, block: &BlockData) -> Vec<u8> {
    exchange_frame(status, block.as_bytes())
}

/// InDataExchange answer carrying only a status byte (auth and write).
pub fn status_frame(status: u8) -> Vec<u8> {
    exchange_frame(status, &[])
}
