// libpn532/src/protocol/responses/exchange.rs

use crate::protocol::parser;
use crate::types::DeviceStatus;
use crate::Result;

/// Decode an InDataExchange response body (response code = 0x41).
/// Layout after the frame markers: status(1) + card_data(N)
///
/// The status byte is returned verbatim; interpreting it (auth failure,
/// RF errors) is the card layer's job. A MIFARE read carries 16 data
/// bytes when the status is OK, writes and authentications carry none.
pub fn decode_exchange(data: &[u8]) -> Result<(DeviceStatus, Vec<u8>)> {
    parser::ensure_len(data, 1)?;

    let status = parser::status_at(data, 0)?;
    Ok((status, data[1..].to_vec()))
}
