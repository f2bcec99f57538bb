// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the concrete file reader, the YAML parser and the
//! conventional-location file finder.

pub mod file;
pub mod finder;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use file::read_config_file;
pub use finder::ConfigFinder;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
