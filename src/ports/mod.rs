// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces the document holder depends on: decoding a
//! document and locating the file to decode. Adapters implement them.

pub mod locator;
pub mod parser;

// Re-export commonly used types
pub use locator::ConfigLocator;
pub use parser::ConfigParser;
