//! Builds a payment payload, prints it and reads it back
//!
//! Usage: cargo run -p emv-qr-core --example generate_payload -- "Shop" "Dakar" 1500.00

use emv_qr_core::{Decimal, PaymentDefaults, PaymentPayload};
use std::env;
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let name = args.first().map(String::as_str).unwrap_or("Test Shop");
    let city = args.get(1).map(String::as_str).unwrap_or("Dakar");
    let amount = match args.get(2).map(|a| Decimal::from_str(a)) {
        Some(Ok(amount)) => amount,
        Some(Err(e)) => {
            eprintln!("Invalid amount: {}", e);
            process::exit(2);
        }
        None => Decimal::new(100000, 2),
    };

    let payload = PaymentDefaults::default().retail(name, city, amount);
    let raw = match payload.encode_checked() {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Cannot encode: {}", e);
            process::exit(1);
        }
    };

    println!("{}", raw);

    match PaymentPayload::parse(&raw) {
        Ok(decoded) => println!("{}", decoded.summary()),
        Err(e) => eprintln!("Round trip failed: {}", e),
    }
}
