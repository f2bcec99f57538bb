// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file discovery example.
//!
//! Shows where `ConfigFinder` looks for an application's configuration and which
//! file `Config::discover` ends up loading.
//!
//! To run this example:
//! ```bash
//! cp demos/example.conf ./demo.conf
//! RUST_LOG=debug cargo run --example discovery -- demo
//! ```

use nanoconf::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let app = std::env::args().nth(1).unwrap_or_else(|| "demo".to_string());
    let finder = ConfigFinder::new(app.as_str()).default_setup();

    println!("=== nanoconf: Discovery for '{}' ===\n", app);
    println!("Searched directories:");
    for path in finder.paths() {
        println!("  {}", path.display());
    }
    println!("Searched names:");
    for name in finder.names() {
        println!("  {}", name);
    }

    println!("\nExisting candidates:");
    for path in finder.find_all() {
        println!("  ✓ {}", path.display());
    }

    let config = Config::discover(&finder)?;
    match config.source_path() {
        Some(path) => println!("\nLoaded {}", path.display()),
        None => println!(
            "\nNothing loaded (default would be {}), using an empty configuration",
            finder.default_path().display()
        ),
    }
    println!("Top-level keys: {:?}", config.root().keys());

    Ok(())
}
