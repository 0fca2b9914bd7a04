#[path = "../common/mod.rs"]
mod common;

use libpn532::card;
use libpn532::test_support::initialized_mock_device;
use libpn532::types::{CardBaud, DeviceStatus, KeySlot};

#[test]
fn authenticate_then_read_round_trip() {
    let uid = common::fixtures::sample_uid_bytes();
    let block = common::fixtures::sample_blockdata(0x5a);
    let (mut device, _inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::read_block_frame(0x00, &block),
    ])
    .unwrap();

    let tag = device.detect_target(CardBaud::Iso14443a, 1000).unwrap();
    let data = tag
        .read_block_with_key(&mut device, 6, KeySlot::A, &common::fixtures::sample_key())
        .unwrap()
        .expect("clean status");
    assert_eq!(data, block);
}

#[test]
fn failed_authentication_never_issues_the_read() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x14),
    ])
    .unwrap();

    let tag = device.detect_target(CardBaud::Iso14443a, 1000).unwrap();
    let writes_before = inner.borrow().written_frames().len();

    let status = tag
        .read_block_with_key(&mut device, 6, KeySlot::A, &common::fixtures::sample_key())
        .unwrap()
        .expect_err("authentication should be rejected");
    assert_eq!(status, DeviceStatus::AUTH_FAILED);

    // Exactly one more frame went out: the authentication itself. The
    // queue is drained, so no read dialogue followed the rejection.
    let inner = inner.borrow();
    assert_eq!(inner.written_frames().len(), writes_before + 1);
    assert!(inner.responses.is_empty());
}

#[test]
fn guarded_blocks_never_reach_the_bus() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
    ])
    .unwrap();

    let tag = device.detect_target(CardBaud::Iso14443a, 1000).unwrap();
    let key = common::fixtures::sample_key();
    let data = common::fixtures::sample_blockdata(0xaa);
    let exchanges_before = inner.borrow().sent.len();

    // Manufacturer block and sector trailers refuse plain writes.
    match tag.write_block_with_key(&mut device, 0, KeySlot::A, &key, &data) {
        Err(libpn532::Error::ProtectedBlock { block: 0 }) => {}
        other => panic!("expected ProtectedBlock, got {:?}", other),
    }
    match tag.write_block_with_key(&mut device, 7, KeySlot::A, &key, &data) {
        Err(libpn532::Error::ProtectedBlock { block: 7 }) => {}
        other => panic!("expected ProtectedBlock, got {:?}", other),
    }

    // Block numbers past the 1K geometry are refused for reads too.
    match tag.write_block_with_key(&mut device, 64, KeySlot::A, &key, &data) {
        Err(libpn532::Error::BlockOutOfRange { block: 64 }) => {}
        other => panic!("expected BlockOutOfRange, got {:?}", other),
    }
    match tag.read_block(&mut device, 255) {
        Err(libpn532::Error::BlockOutOfRange { block: 255 }) => {}
        other => panic!("expected BlockOutOfRange, got {:?}", other),
    }

    assert_eq!(inner.borrow().sent.len(), exchanges_before);
}

#[test]
fn write_then_read_block_six() {
    let uid = common::fixtures::sample_uid_bytes();
    let payload = libpn532::types::BlockData::from_bytes(*b"hello nfc wallet");
    let (mut device, inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::read_block_frame(0x00, &payload),
    ])
    .unwrap();

    let tag = device.detect_target(CardBaud::Iso14443a, 1000).unwrap();
    let key = common::fixtures::sample_key();

    tag.write_block_with_key(&mut device, 6, KeySlot::A, &key, &payload)
        .unwrap()
        .expect("clean write");
    let got = tag
        .read_block_with_key(&mut device, 6, KeySlot::A, &key)
        .unwrap()
        .expect("clean read");
    assert_eq!(got, payload);

    // The write dialogue carried the block number and the payload bytes.
    let frames = inner.borrow().written_frames();
    let write_frame = &frames[3]; // SAM, list, auth, write, auth, read
    assert_eq!(write_frame[5..10], [0xd4, 0x40, 0x01, 0xa0, 0x06]);
    assert_eq!(&write_frame[10..26], payload.as_bytes());
}

#[test]
fn wait_for_target_retries_past_an_empty_field() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, _inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::no_target_frame(),
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
    ])
    .unwrap();

    let before = device.elapsed_ms();
    let tag = card::wait_for_target(&mut device, CardBaud::Iso14443a, 1000, 5000).unwrap();
    assert_eq!(tag.uid().as_bytes(), &uid);

    // One retry pause between the two detection attempts.
    assert_eq!(device.elapsed_ms() - before, 100);
}

#[test]
fn wait_for_target_is_deadline_bounded() {
    let (mut device, _inner) = initialized_mock_device(vec![]).unwrap();

    let before = device.elapsed_ms();
    match card::wait_for_target(&mut device, CardBaud::Iso14443a, 1000, 1000) {
        Err(libpn532::Error::Timeout) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }

    // The whole budget is consumed in retry pauses, then the loop stops.
    assert_eq!(device.elapsed_ms() - before, 1000);
}
