#![cfg(feature = "spi")]

#[path = "common.rs"]
mod common;

use libpn532::Result;
use serial_test::serial;

// These integration tests require a PN532 breakout wired to SPI0. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p libpn532 --test hardware --features spi -- --ignored
//
// The tests share one physical bus, hence `#[serial]`.

#[test]
#[ignore]
#[serial]
fn open_and_initialize_reader() -> Result<()> {
    match common::open_and_initialize_reader()? {
        Some(_) => Ok(()),
        None => Ok(()),
    }
}

#[test]
#[ignore]
#[serial]
fn firmware_version_reads_back() -> Result<()> {
    let Some(mut device) = common::open_and_initialize_reader()? else {
        return Ok(());
    };
    let version = device.firmware_version()?;
    println!("firmware: {}", version);
    assert_eq!(version.ic, 0x32);
    Ok(())
}
