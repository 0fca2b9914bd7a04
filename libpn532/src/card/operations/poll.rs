use log::debug;

use crate::device::{Device, Initialized};
use crate::types::CardBaud;
use crate::utils::Deadline;
use crate::{Error, Result};

// Pause between detection attempts while no card is in the field.
const RETRY_INTERVAL_MS: u64 = 100;

/// Poll detection until a card shows up or `overall_timeout_ms` passes on
/// the transport clock. An empty field and a slow answer both mean "keep
/// polling"; every other error is propagated immediately.
pub fn wait_for_target(
    device: &mut Device<Initialized>,
    baud: CardBaud,
    poll_timeout_ms: u64,
    overall_timeout_ms: u64,
) -> Result<crate::card::Tag> {
    let deadline = Deadline::starting_at(device.elapsed_ms(), overall_timeout_ms);
    loop {
        match device.detect_target(baud, poll_timeout_ms) {
            Ok(tag) => return Ok(tag),
            Err(Error::NoCard { targets }) => {
                debug!("detection saw {} targets, retrying", targets);
            }
            Err(Error::Timeout) => {}
            Err(err) => return Err(err),
        }
        if deadline.expired(device.elapsed_ms()) {
            return Err(Error::Timeout);
        }
        device.delay_ms(RETRY_INTERVAL_MS);
    }
}
