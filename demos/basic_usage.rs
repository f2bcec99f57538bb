// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the nanoconf crate.
//!
//! This example demonstrates:
//! - Loading a YAML configuration file
//! - Reading values by delimited path
//! - Overlays and fallback values
//! - Switching the path separator
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//!
//! # Override the port as if it came from a command-line flag
//! PORT=9090 cargo run --example basic_usage
//! ```

use nanoconf::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== nanoconf: Basic Usage ===\n");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/example.conf");
    let mut config = Config::load(path)?;

    // Example 1: Values at different depths
    println!("--- Example 1: Nested Sections ---");
    println!("key                          = {}", config.root().as_string("key", ""));
    println!("section/key                  = {}", config.find("section").as_string("key", ""));
    println!(
        "section/inner-section/key    = {}",
        config.find("section:inner-section").as_string("key", "")
    );

    // Example 2: Typed values with overlays
    println!("\n--- Example 2: Typed Values ---");
    let overlay = std::env::var("PORT").unwrap_or_default();
    let server = config.find("server");
    println!("host    = {}", server.as_string("host", ""));
    println!("port    = {}", server.as_int_or("port", &overlay, 80));
    println!("workers = {}", server.as_int_or("workers", "", 1));
    println!("verbose = {}", server.as_bool_or("verbose", "", false));
    println!("timeout = {}", server.as_float_or("timeout", "", 30.0));

    // Example 3: Missing values
    println!("\n--- Example 3: Missing Values ---");
    let missing = config.find("database");
    println!("database present?   {}", missing.is_present());
    println!("database/host       = {:?}", missing.as_string("host", ""));
    match missing.as_int("port", "") {
        Ok(port) => println!("database/port       = {}", port),
        Err(e) => println!("database/port       ✗ {}", e),
    }
    println!("database/port or 5432 = {}", missing.as_int_or("port", "", 5432));

    // Example 4: Another separator
    println!("\n--- Example 4: Custom Separator ---");
    config.set_separator(".");
    println!(
        "section.inner-section/key    = {}",
        config.find("section.inner-section").as_string("key", "")
    );

    // Example 5: Raw access
    println!("\n--- Example 5: Raw Access ---");
    if let Some(listeners) = config.root().get("listeners").and_then(ConfigValue::as_sequence) {
        for listener in listeners {
            println!("listener: {}", listener);
        }
    }

    Ok(())
}
