// libpn532/src/protocol/codec.rs

use crate::constants::{TFI_DEVICE_TO_HOST, TFI_HOST_TO_DEVICE};
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;
use super::parser;
use super::responses::Response;

/// Encode `[0xD4, opcode, params...]` into a full wire frame.
pub fn encode_raw_frame(opcode: u8, params: &[u8]) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(2 + params.len());
    payload.push(TFI_HOST_TO_DEVICE);
    payload.push(opcode);
    payload.extend_from_slice(params);
    Frame::encode(&payload)
}

/// Encode a typed Command into a full wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(1 + 2);
    payload.push(TFI_HOST_TO_DEVICE);
    payload.extend_from_slice(&cmd.encode());
    Frame::encode(&payload)
}

/// Validate the response envelope and strip it: data byte 0 must be the
/// device-to-host marker 0xD5 and data byte 1 the command opcode plus one.
/// Returns the data bytes after the two markers.
pub fn unwrap_response_data(expected_opcode: u8, payload: &[u8]) -> Result<Vec<u8>> {
    parser::ensure_len(payload, 2)?;
    if payload[0] != TFI_DEVICE_TO_HOST {
        return Err(Error::UnexpectedResponse {
            expected: TFI_DEVICE_TO_HOST,
            actual: payload[0],
        });
    }
    let expected_code = expected_opcode.wrapping_add(1);
    if payload[1] != expected_code {
        return Err(Error::UnexpectedResponse {
            expected: expected_code,
            actual: payload[1],
        });
    }
    Ok(payload[2..].to_vec())
}

/// Decode a full wire frame and parse the contained response for the
/// expected command opcode.
pub fn decode_response_frame(expected_opcode: u8, raw: &[u8]) -> Result<Response> {
    let payload = Frame::decode(raw)?;
    let data = unwrap_response_data(expected_opcode, &payload)?;
    Response::decode(expected_opcode, &data)
}
