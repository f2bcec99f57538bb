// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line lookup into an application's configuration.
//!
//! ```bash
//! # Print section:inner-section/key from ./demo.conf
//! nanoconf --file demo.conf section:inner-section key
//!
//! # Discover myapp's configuration and dump the server section as YAML
//! nanoconf --app myapp server
//!
//! # Show which candidate files exist
//! RUST_LOG=debug nanoconf --app myapp --list
//! ```

use clap::Parser;
use nanoconf::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "nanoconf",
    version,
    about = "Read values from an application's configuration file"
)]
struct Cli {
    /// Application name used to discover the configuration file
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    app: Option<String>,

    /// Configuration file to read instead of discovering one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path segment separator
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Value printed instead of the stored one when non-empty
    #[arg(short, long, default_value = "")]
    overlay: String,

    /// Print every existing candidate file and exit
    #[arg(long, requires = "app")]
    list: bool,

    /// Path of the section to read; empty for the whole document
    #[arg(default_value = "")]
    path: String,

    /// Key to print from the section; the whole section is printed when omitted
    key: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("nanoconf: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> std::result::Result<ExitCode, Box<dyn std::error::Error>> {
    let finder = cli
        .app
        .as_deref()
        .map(|app| ConfigFinder::new(app).default_setup());

    if cli.list {
        if let Some(finder) = &finder {
            for path in finder.find_all() {
                println!("{}", path.display());
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match (&cli.file, &finder) {
        (Some(file), _) => Config::load(file)?,
        (None, Some(finder)) => Config::discover(finder)?,
        (None, None) => Config::empty(),
    };
    config.set_separator(cli.separator.as_str());

    if let Some(source) = config.source_path() {
        tracing::info!("Using configuration {}", source.display());
    }

    match lookup(&config, &cli.path, cli.key.as_deref(), &cli.overlay)? {
        Lookup::Found(text) => {
            print!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Lookup::MissingPath => {
            eprintln!("nanoconf: path '{}' not found", cli.path);
            Ok(ExitCode::FAILURE)
        }
        Lookup::MissingKey => {
            eprintln!(
                "nanoconf: key '{}' not found",
                cli.key.as_deref().unwrap_or_default()
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Result of resolving the command-line path and key.
#[derive(Debug, PartialEq)]
enum Lookup {
    /// Text to print, newline included
    Found(String),
    MissingPath,
    MissingKey,
}

/// Resolves `path` and `key` against `config`.
///
/// A key that is absent is only a failure when no overlay stands in for it.
/// Without a key the whole section is rendered as YAML.
fn lookup(
    config: &Config,
    path: &str,
    key: Option<&str>,
    overlay: &str,
) -> std::result::Result<Lookup, serde_yaml::Error> {
    let view = config.find(path);
    if !view.is_present() {
        return Ok(Lookup::MissingPath);
    }

    match key {
        Some(key) => {
            if overlay.is_empty() && !view.contains_key(key) {
                return Ok(Lookup::MissingKey);
            }
            Ok(Lookup::Found(format!("{}\n", view.as_string(key, overlay))))
        }
        None => Ok(Lookup::Found(serde_yaml::to_string(&view.raw())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_yaml_str("key: root-value\nsection:\n  port: 8080\n").unwrap()
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(
            lookup(&config(), "section", Some("port"), "").unwrap(),
            Lookup::Found("8080\n".to_string())
        );
        assert_eq!(
            lookup(&config(), "", Some("key"), "").unwrap(),
            Lookup::Found("root-value\n".to_string())
        );
    }

    #[test]
    fn test_lookup_missing_path() {
        assert_eq!(
            lookup(&config(), "nowhere", Some("key"), "x").unwrap(),
            Lookup::MissingPath
        );
    }

    #[test]
    fn test_lookup_missing_key_unless_overlay() {
        assert_eq!(
            lookup(&config(), "section", Some("host"), "").unwrap(),
            Lookup::MissingKey
        );
        assert_eq!(
            lookup(&config(), "section", Some("host"), "localhost").unwrap(),
            Lookup::Found("localhost\n".to_string())
        );
    }

    #[test]
    fn test_lookup_section_as_yaml() {
        assert_eq!(
            lookup(&config(), "section", None, "").unwrap(),
            Lookup::Found("port: 8080\n".to_string())
        );
    }
}
