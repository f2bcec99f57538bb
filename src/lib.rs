// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small configuration lookup crate.
//!
//! `nanoconf` finds an application's configuration file in the usual places,
//! decodes it as a nested YAML mapping, and reads values from it by delimited
//! path (`"section:inner-section"`) with typed accessors.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: the document tree (`ConfigValue`), lookup paths
//!   (`ConfigPath`), the path navigator, typed views (`ConfigView`) and errors
//! - **Ports**: trait definitions for decoding documents (`ConfigParser`) and
//!   locating files (`ConfigLocator`)
//! - **Adapters**: the YAML parser, the guarded file reader and the
//!   conventional-location `ConfigFinder`
//! - **Service**: `Config`, which owns a loaded document and hands out views
//!
//! # Lookups
//!
//! - A missing configuration file is not an error: the document is empty.
//! - A file that exists but cannot be read or decoded is an error.
//! - A path that does not resolve gives an absent view, not an error.
//! - String accessors treat missing keys as `""`. Integer, float and boolean
//!   accessors return an error, and their `_or` forms return a fallback.
//! - Every accessor takes an overlay string which, when non-empty, wins over the
//!   stored value.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser and the file-loading constructors (default)
//! - `cli`: Build the `nanoconf` command-line tool
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nanoconf::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let finder = ConfigFinder::new("myapp").default_setup();
//! let config = Config::discover(&finder)?;
//!
//! let server = config.find("server");
//! let host = server.as_string("host", "");
//! let port = server.as_int_or("port", "", 8080);
//! println!("listening on {}:{}", host, port);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::ConfigFinder;
    pub use crate::domain::{
        ConfigError, ConfigMap, ConfigPath, ConfigValue, ConfigView, Result, DEFAULT_SEPARATOR,
    };
    pub use crate::ports::{ConfigLocator, ConfigParser};
    pub use crate::service::{Config, ConfigBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
