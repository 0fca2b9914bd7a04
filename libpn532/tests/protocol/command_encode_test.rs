#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::Command;
use libpn532::types::{CardBaud, Key, KeySlot, SamMode, Uid};

#[test]
fn system_commands_encode() {
    let fw = Command::GetFirmwareVersion;
    assert_eq!(fw.command_code(), 0x02);
    assert_eq!(fw.encode(), vec![0x02]);

    let sam = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x14,
        use_irq: true,
    };
    assert_eq!(sam.encode(), vec![0x14, 0x01, 0x14, 0x01]);
}

#[test]
fn detection_command_encodes() {
    let cmd = Command::ListPassiveTarget {
        max_targets: 1,
        baud: CardBaud::Iso14443a,
    };
    assert_eq!(cmd.command_code(), 0x4a);
    assert_eq!(cmd.encode(), vec![0x4a, 0x01, 0x00]);
}

#[test]
fn authenticate_carries_key_and_uid() {
    let uid = Uid::from(common::fixtures::sample_uid_bytes());
    let cmd = Command::AuthenticateBlock {
        target: 1,
        block: 6,
        slot: KeySlot::B,
        key: common::fixtures::sample_key(),
        uid,
    };

    let payload = cmd.encode();
    assert_eq!(&payload[..4], &[0x40, 0x01, 0x61, 0x06]);
    assert_eq!(&payload[4..10], common::fixtures::sample_key().as_bytes());
    assert_eq!(&payload[10..], uid.as_bytes());
}

#[test]
fn block_io_rides_data_exchange() {
    let read = Command::ReadBlock {
        target: 1,
        block: 62,
    };
    assert_eq!(read.command_code(), 0x40);
    assert_eq!(read.encode(), vec![0x40, 0x01, 0x30, 0x3e]);

    let data = common::fixtures::sample_blockdata(0x11);
    let write = Command::WriteBlock {
        target: 1,
        block: 6,
        data,
    };
    let payload = write.encode();
    assert_eq!(&payload[..4], &[0x40, 0x01, 0xa0, 0x06]);
    assert_eq!(&payload[4..], data.as_bytes());
}
