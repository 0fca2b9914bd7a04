//! Bring-up probe for a PN532 breakout on SPI0.
//!
//! Resets and wakes the controller, reports the firmware version, then
//! waits for a card and dumps its first sector with the transport key.
//!
//! Usage:
//!   cargo run -p libpn532 --example firmware_probe --features spi --release

use libpn532::card;
use libpn532::device::DeviceBuilder;
use libpn532::utils::hex_grid;
use libpn532::{CardBaud, Key, KeySlot, Result};

// Default wiring: NSS on CE0, RSTPD_N on GPIO 25.
const CS_PIN: u8 = 8;
const RESET_PIN: u8 = 25;

fn main() -> Result<()> {
    env_logger::init();

    println!("Opening PN532 on SPI0 (cs={}, reset={})...", CS_PIN, RESET_PIN);
    let device = DeviceBuilder::new()
        .with_spi_pins(CS_PIN, RESET_PIN)?
        .build_uninitialized()?;

    println!("Resetting and waking the controller...");
    let mut device = device.initialize()?;

    let version = device.firmware_version()?;
    println!("Firmware: {}", version);

    println!("\nPresent a MIFARE Classic card (10 s)...");
    let tag = card::wait_for_target(&mut device, CardBaud::Iso14443a, 1000, 10_000)?;
    println!(
        "Found tag: uid={} sens_res={:02x?} sel_res={:#04x}",
        tag.uid().to_hex(),
        tag.sens_res(),
        tag.sel_res()
    );

    println!("\nDumping sector 0 with the transport key...");
    let dump = tag.dump(&mut device, KeySlot::A, &Key::DEFAULT, 4)?;
    let bytes: Vec<u8> = dump
        .blocks
        .iter()
        .flat_map(|b| b.as_bytes().iter().copied())
        .collect();
    println!("{}", hex_grid(&bytes));
    for (block, data) in dump.blocks.iter().enumerate() {
        println!("{:02} |{}|", block, data.to_ascii_safe());
    }

    if let Some(failure) = dump.failed {
        println!("Stopped at block {}: {}", failure.block, failure.status);
    }

    Ok(())
}
