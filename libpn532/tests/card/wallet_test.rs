#[path = "../common/mod.rs"]
mod common;

use libpn532::test_support::initialized_mock_device;
use libpn532::types::{DeviceStatus, KeySlot};
use libpn532::wallet::{encode_balance, Wallet};

#[test]
fn balance_round_trip() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, inner) = initialized_mock_device(vec![
        // set_balance: detection, authentication, write.
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        // balance: detection, authentication, read.
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::read_block_frame(0x00, &encode_balance(100)),
    ])
    .unwrap();

    let wallet = Wallet::new().with_key(KeySlot::A, common::fixtures::sample_key());
    wallet
        .set_balance(&mut device, 100)
        .unwrap()
        .expect("clean status");
    let balance = wallet
        .balance(&mut device)
        .unwrap()
        .expect("clean status");
    assert_eq!(balance, 100);

    // The write dialogue carried the amount as a big-endian i32 in the
    // first four bytes of block 6, the rest zeroed.
    let inner = inner.borrow();
    let frames = inner.written_frames();
    // SAM configuration, then list/auth/write, then list/auth/read.
    assert_eq!(frames.len(), 7);
    assert_eq!(frames[3][5..10], [0xd4, 0x40, 0x01, 0xa0, 0x06]);
    assert_eq!(frames[3][10..14], [0x00, 0x00, 0x00, 0x64]);
    assert!(frames[3][14..26].iter().all(|&b| b == 0x00));
}

#[test]
fn charge_and_pay_move_the_balance() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, inner) = initialized_mock_device(vec![
        // charge: detection, auth, read the stored 100, auth, write.
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::read_block_frame(0x00, &encode_balance(100)),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        // pay: same shape, reading back the 150.
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::read_block_frame(0x00, &encode_balance(150)),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x00),
    ])
    .unwrap();

    let wallet = Wallet::new().with_key(KeySlot::A, common::fixtures::sample_key());

    let after_charge = wallet
        .charge(&mut device, 50)
        .unwrap()
        .expect("clean status");
    assert_eq!(after_charge, 150);
    {
        let inner = inner.borrow();
        let written = inner.written_frames();
        let frame = written.last().expect("charge wrote a frame");
        assert_eq!(frame[10..14], [0x00, 0x00, 0x00, 0x96]);
    }

    let after_pay = wallet.pay(&mut device, 75).unwrap().expect("clean status");
    assert_eq!(after_pay, 75);
    let inner = inner.borrow();
    let written = inner.written_frames();
    let frame = written.last().expect("pay wrote a frame");
    assert_eq!(frame[10..14], [0x00, 0x00, 0x00, 0x4b]);
}

#[test]
fn wallet_surfaces_auth_rejection_as_status() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, inner) = initialized_mock_device(vec![
        common::fixtures::ack(),
        common::fixtures::target_frame(&uid),
        common::fixtures::ack(),
        common::fixtures::status_frame(0x14),
    ])
    .unwrap();

    let wallet = Wallet::new().with_key(KeySlot::A, common::fixtures::sample_key());
    let status = wallet
        .balance(&mut device)
        .unwrap()
        .expect_err("authentication should be rejected");
    assert_eq!(status, DeviceStatus::AUTH_FAILED);

    // No read dialogue followed the rejection.
    assert!(inner.borrow().responses.is_empty());
}

#[test]
fn wallet_detection_is_bounded() {
    let (mut device, _inner) = initialized_mock_device(vec![]).unwrap();
    let wallet = Wallet::new().with_detection_budget(500);

    let before = device.elapsed_ms();
    match wallet.balance(&mut device) {
        Err(libpn532::Error::Timeout) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }
    // The detection loop runs until its budget is spent, no further.
    assert_eq!(device.elapsed_ms() - before, 500);
}
