// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composite values example for the typedcfg crate.
//!
//! This example demonstrates:
//! - Loading a store from YAML through serde (the crate itself never parses files)
//! - Sequences, optional values and mappings of any registered type
//! - Error paths pointing at the failing element
//! - Explicit converters for values packed into a single string
//!
//! To run this example:
//! ```bash
//! cargo run --example composite_values
//! ```

use std::collections::BTreeMap;
use typedcfg::prelude::*;

const DOCUMENT: &str = r#"
retries: 3
timeouts: [10, 20, bad]
mirrors: [eu.example.org, us.example.org]
proxy: ~
limits:
  cpu: 2
  memory: 512
peers: "10.0.0.1:7000,10.0.0.2:7000"
"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== typedcfg: Composite Values ===\n");

    let store: ConfigStore = serde_yaml::from_str(DOCUMENT)?;
    println!("Loaded {} keys.\n", store.len());

    // Example 1: Sequences
    println!("--- Example 1: Sequences ---");
    let mirrors: Vec<String> = store.get("mirrors")?;
    println!("✓ mirrors = {:?}", mirrors);

    match store.get::<Vec<u32>>("timeouts") {
        Ok(timeouts) => println!("✓ timeouts = {:?}", timeouts),
        Err(e) => println!("✗ {} (failing index: {:?})", e, e.index()),
    }

    // Example 2: Optional values
    println!("\n--- Example 2: Optional Values ---");
    let proxy: Option<String> = store.get("proxy")?;
    println!("✓ proxy = {:?}", proxy);

    // Example 3: Mappings
    println!("\n--- Example 3: Mappings ---");
    let limits: BTreeMap<String, u32> = store.get("limits")?;
    println!("✓ limits = {:?}", limits);

    // Example 4: Explicit converters
    println!("\n--- Example 4: Explicit Converters ---");
    let peers: Vec<std::net::SocketAddr> =
        store.get_with("peers", &Delimited::new(resolve::<std::net::SocketAddr>()))?;
    println!("✓ peers = {:?}", peers);

    println!("\n=== Example Complete ===");
    Ok(())
}
