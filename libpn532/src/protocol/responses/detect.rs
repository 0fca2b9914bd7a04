// libpn532/src/protocol/responses/detect.rs

use crate::constants::MAX_DETECTED_UID_LEN;
use crate::protocol::parser;
use crate::types::PassiveTarget;
use crate::{Error, Result};

/// Decode an InListPassiveTarget response body (response code = 0x4B).
/// Layout after the frame markers:
/// nb_tg(1) + tg(1) + SENS_RES(2) + SEL_RES(1) + uid_len(1) + uid(N)
pub fn decode_passive_target(data: &[u8]) -> Result<PassiveTarget> {
    const MIN_LEN: usize = 1 + 1 + 2 + 1 + 1; // 6, before the UID bytes
    parser::ensure_len(data, 1)?;

    // The driver always lists with MaxTg=1, so anything other than exactly
    // one tag is reported as "no card" with the count the device gave us.
    let targets = parser::byte_at(data, 0)?;
    if targets != 1 {
        return Err(Error::NoCard { targets });
    }

    parser::ensure_len(data, MIN_LEN)?;
    let target = parser::byte_at(data, 1)?;
    let sens_res = [parser::byte_at(data, 2)?, parser::byte_at(data, 3)?];
    let sel_res = parser::byte_at(data, 4)?;

    let uid_len = parser::byte_at(data, 5)? as usize;
    if uid_len > MAX_DETECTED_UID_LEN {
        return Err(Error::InvalidLength {
            expected: MAX_DETECTED_UID_LEN,
            actual: uid_len,
        });
    }
    let uid = parser::uid_at(data, MIN_LEN, uid_len)?;

    Ok(PassiveTarget {
        target,
        sens_res,
        sel_res,
        uid,
    })
}
