// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the typedcfg crate.
//!
//! This example demonstrates:
//! - Building a store from in-code values
//! - Typed lookups for integers, floats, booleans and strings
//! - Telling a missing key apart from a malformed value
//! - Lookup tracing, printed at trace level
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use typedcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== typedcfg: Basic Usage ===\n");

    let store = ConfigStore::builder()
        .with_value("app.name", "MyApplication")
        .with_value("database.port", "5432")
        .with_value("enable.debug", "yes")
        .with_value("api.timeout", "30.5")
        .with_value("retries", "three")
        .build();

    // Example 1: The requested type picks the converter
    println!("--- Example 1: Typed Values ---");
    let name: String = store.get("app.name")?;
    let port: u16 = store.get("database.port")?;
    let debug: bool = store.get("enable.debug")?;
    let timeout: f64 = store.get("api.timeout")?;
    println!("✓ app.name = {}", name);
    println!("✓ database.port = {} (as u16)", port);
    println!("✓ enable.debug = {} (as bool)", debug);
    println!("✓ api.timeout = {} seconds (as f64)", timeout);

    // Example 2: The same raw value read as different types
    println!("\n--- Example 2: One Value, Several Types ---");
    println!("✓ database.port as String = {:?}", store.get::<String>("database.port")?);
    println!("✓ database.port as i64 = {}", store.get::<i64>("database.port")?);

    // Example 3: Missing keys
    println!("\n--- Example 3: Missing Keys ---");
    match store.get::<String>("log.level") {
        Ok(level) => println!("✓ log.level = {}", level),
        Err(e) => println!("✗ {}", e),
    }
    let level = store.get_optional::<String>("log.level")?;
    println!("✓ log.level via get_optional = {:?}", level);

    // Example 4: Malformed values are errors, even through get_optional
    println!("\n--- Example 4: Malformed Values ---");
    match store.get_optional::<u32>("retries") {
        Ok(value) => println!("✓ retries = {:?}", value),
        Err(e) => println!("✗ {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
