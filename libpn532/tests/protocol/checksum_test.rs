#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    // The firmware query frame carries DCS 0x2a for [0xd4, 0x02].
    assert_eq!(dcs(&[0xd4, 0x02]), 0x2a);
    assert_eq!(dcs(&[]), 0x00);
}

#[test]
fn length_checksum_cancels_for_every_byte() {
    for len in 0..=255u8 {
        assert_eq!(len.wrapping_add(lcs(len)), 0);
    }
}

#[test]
fn data_checksum_cancels_the_payload_sum() {
    let payload: Vec<u8> = (0..=255u8).collect();
    let sum = payload
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
        .wrapping_add(dcs(&payload));
    assert_eq!(sum, 0);
}
