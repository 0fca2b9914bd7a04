// libpn532/src/protocol/commands/detect.rs

use crate::constants::CMD_IN_LIST_PASSIVE_TARGET;
use crate::types::CardBaud;

/// Encode InListPassiveTarget (command code 0x4A).
///
/// The controller blocks until it finds up to `max_targets` cards at the
/// requested baud/modulation or its internal retry budget runs out. This
/// driver always asks for a single target.
pub fn encode_list_passive_target(max_targets: u8, baud: CardBaud) -> Vec<u8> {
    vec![CMD_IN_LIST_PASSIVE_TARGET, max_targets, baud as u8]
}
