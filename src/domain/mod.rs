// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the configuration tree, lookup paths, the path navigator and
//! the typed views. It does no I/O and knows nothing about file formats.

pub mod config_path;
pub mod config_value;
pub mod errors;
pub mod navigator;
pub mod view;

// Re-export commonly used types
pub use config_path::{ConfigPath, DEFAULT_SEPARATOR};
pub use config_value::{ConfigMap, ConfigValue};
pub use errors::{ConfigError, Result};
pub use view::ConfigView;
