//! Toy stored-value demo on a MIFARE Classic card.
//!
//! Keeps a signed balance in block 6 and moves it with charge/pay. Each
//! operation waits for a card, so the flow works as a tap sequence: tap to
//! check, tap to charge, tap to pay.
//!
//! Usage:
//!   cargo run -p libpn532 --example tag_wallet --features spi --release

use libpn532::device::DeviceBuilder;
use libpn532::utils::parse_hex;
use libpn532::wallet::Wallet;
use libpn532::{DeviceStatus, Key, KeySlot, Result};

const CS_PIN: u8 = 8;
const RESET_PIN: u8 = 25;

// Cards in the field usually still carry the factory key; set WALLET_KEY
// (twelve hex digits) when the balance sector was rekeyed.
fn wallet_from_env() -> Wallet {
    match std::env::var("WALLET_KEY") {
        Ok(hex) => match parse_hex(&hex).ok().and_then(|b| Key::try_from(&b[..]).ok()) {
            Some(key) => Wallet::new().with_key(KeySlot::A, key),
            None => {
                eprintln!("WALLET_KEY must be 12 hex digits");
                std::process::exit(2);
            }
        },
        Err(_) => Wallet::new(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let device = DeviceBuilder::new()
        .with_spi_pins(CS_PIN, RESET_PIN)?
        .build_uninitialized()?;
    let mut device = device.initialize()?;
    println!("Reader up: {}", device.firmware_version()?);

    let wallet = wallet_from_env();
    println!("Balance lives in block {}.", wallet.block());

    println!("\nTap a card to check the balance...");
    match wallet.balance(&mut device)? {
        Ok(balance) => println!("Balance: {}", balance),
        Err(status) => return report(status),
    }

    println!("\nTap again to charge 500...");
    match wallet.charge(&mut device, 500)? {
        Ok(balance) => println!("Charged. New balance: {}", balance),
        Err(status) => return report(status),
    }

    println!("\nTap again to pay 120...");
    match wallet.pay(&mut device, 120)? {
        Ok(balance) => println!("Paid. New balance: {}", balance),
        Err(status) => return report(status),
    }

    Ok(())
}

// A dirty status usually means the card still carries its factory keys on
// some sectors but not the one the wallet uses.
fn report(status: DeviceStatus) -> Result<()> {
    println!("Card refused the operation: {}", status);
    Ok(())
}
