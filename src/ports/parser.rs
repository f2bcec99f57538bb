// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the raw text of a
//! configuration file into a [`ConfigValue`] tree.

use crate::domain::{ConfigValue, Result};

/// A trait for parsing configuration documents.
///
/// Implementations decode the whole document at once and return its root node.
/// The root of a well-formed document is a mapping; an empty document should
/// decode to an empty mapping. Mapping keys must be normalized to strings.
///
/// # Examples
///
/// ```rust
/// use nanoconf::domain::{ConfigValue, Result};
/// use nanoconf::ports::ConfigParser;
///
/// struct KeyEqualsValue;
///
/// impl ConfigParser for KeyEqualsValue {
///     fn parse(&self, content: &str) -> Result<ConfigValue> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim(), v.trim()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let doc = KeyEqualsValue.parse("host = localhost").unwrap();
/// assert_eq!(doc.get("host").and_then(ConfigValue::as_str), Some("localhost"));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into a document tree.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigValue)` - The root of the decoded document
    /// * `Err(ConfigError)` - The content is not a valid document
    fn parse(&self, content: &str) -> Result<ConfigValue>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}
