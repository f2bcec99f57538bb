// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration document holder.
//!
//! [`Config`] ties the adapters together: it reads a file, decodes it and serves
//! views into the resulting document.

pub mod config;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder};
