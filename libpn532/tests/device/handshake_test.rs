#[path = "../common/mod.rs"]
mod common;

use libpn532::test_support::initialized_mock_device;
use libpn532::utils::FIRMWARE_TIMEOUT_MS;

#[test]
fn rejected_command_surfaces_no_ack() {
    // A NACK-shaped answer where the ACK should be.
    let (mut device, _inner) =
        initialized_mock_device(vec![vec![0x00, 0x00, 0xff, 0xff, 0x00, 0x00]]).unwrap();

    match device.firmware_version() {
        Err(libpn532::Error::NoAck) => {}
        other => panic!("expected NoAck, got {:?}", other),
    }
}

#[test]
fn stray_ack_instead_of_response_is_a_checksum_error() {
    // If the controller repeats the ACK where the response frame should
    // be, decoding trips on the ack packet code: 0x00/0xFF is not a valid
    // length/checksum pair.
    let (mut device, _inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::ack(),
    ])
    .unwrap();

    match device.firmware_version() {
        Err(libpn532::Error::ChecksumMismatch { .. }) => {}
        other => panic!("expected ChecksumMismatch, got {:?}", other),
    }
}

#[test]
fn busy_controller_timeout_consumes_the_deadline() {
    let (mut device, inner) = initialized_mock_device(vec![]).unwrap();
    inner.borrow_mut().ready = false;

    let before = device.elapsed_ms();
    match device.firmware_version() {
        Err(libpn532::Error::Timeout) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }

    // The poll gave the controller the whole firmware budget, then quit.
    assert_eq!(device.elapsed_ms() - before, FIRMWARE_TIMEOUT_MS);
}
