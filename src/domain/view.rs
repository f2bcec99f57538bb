// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only views over a configuration tree.
//!
//! A [`ConfigView`] borrows one node of a loaded document, or nothing at all when
//! the lookup that produced it missed. Its accessors read keys of that node and
//! coerce them to the requested type.
//!
//! Every accessor takes an `overlay`: a caller-supplied string (typically from a
//! command-line flag) that wins over the stored value whenever it is non-empty.
//! The empty string means "no overlay", not "empty value".

use crate::domain::errors::{ConfigError, Result};
use crate::domain::{navigator, ConfigPath, ConfigValue, DEFAULT_SEPARATOR};

/// A read-only handle over a document node.
///
/// Views are cheap to copy and cannot outlive the document they borrow from.
/// A view over a missed lookup is still usable: string accessors return `""`
/// and typed accessors return [`ConfigError::ConfigKeyNotFound`].
///
/// # Examples
///
/// ```
/// use nanoconf::domain::{ConfigValue, ConfigView};
///
/// let section: ConfigValue = [("host", "localhost")].into_iter().collect();
/// let doc: ConfigValue = [("db", section)].into_iter().collect();
///
/// let view = ConfigView::new(Some(&doc), ":").find("db");
/// assert_eq!(view.as_string("host", ""), "localhost");
/// assert_eq!(view.as_string("host", "db.internal"), "db.internal");
/// assert_eq!(view.as_int_or("port", "", 5432), 5432);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConfigView<'a> {
    node: Option<&'a ConfigValue>,
    separator: &'a str,
}

impl<'a> ConfigView<'a> {
    /// Creates a view over `node`, resolving further paths with `separator`.
    pub fn new(node: Option<&'a ConfigValue>, separator: &'a str) -> Self {
        Self { node, separator }
    }

    /// Creates a view that points at nothing.
    pub fn absent() -> Self {
        Self {
            node: None,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Returns the underlying node for direct structural access.
    pub fn raw(&self) -> Option<&'a ConfigValue> {
        self.node
    }

    /// Returns `true` if the lookup that produced this view found a node.
    pub fn is_present(&self) -> bool {
        self.node.is_some()
    }

    /// Returns the separator used by [`find`](Self::find).
    pub fn separator(&self) -> &'a str {
        self.separator
    }

    /// Returns the value stored under `key`, if this view is a mapping that has it.
    pub fn get(&self, key: &str) -> Option<&'a ConfigValue> {
        self.node.and_then(|node| node.get(key))
    }

    /// Returns `true` if `key` is present in this view.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys of this view in order, or nothing if it is not a mapping.
    pub fn keys(&self) -> Vec<&'a str> {
        self.node
            .and_then(ConfigValue::as_mapping)
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Descends further from this view.
    ///
    /// `path` is split with this view's separator, so
    /// `config.find("a:b")` and `config.find("a").find("b")` address the same node.
    pub fn find(&self, path: &str) -> ConfigView<'a> {
        self.find_path(&ConfigPath::parse(path, self.separator))
    }

    /// Descends further from this view along an already split path.
    pub fn find_path(&self, path: &ConfigPath) -> ConfigView<'a> {
        Self {
            node: self.node.and_then(|node| navigator::resolve(node, path)),
            separator: self.separator,
        }
    }

    /// Returns the value under `key` as text.
    ///
    /// A non-empty `overlay` is returned verbatim. Otherwise the stored value is
    /// formatted with its [`Display`](std::fmt::Display) form, and a missing key
    /// gives the empty string.
    pub fn as_string(&self, key: &str, overlay: &str) -> String {
        if !overlay.is_empty() {
            return overlay.to_string();
        }
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }

    /// Returns the value under `key` as an integer.
    ///
    /// A non-empty `overlay` is parsed instead of the stored value. Integers are
    /// returned as is and strings are parsed as decimal integers.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConfigKeyNotFound`] when the key is missing or null, and
    /// [`ConfigError::TypeConversionError`] when the value is not integer-shaped.
    pub fn as_int(&self, key: &str, overlay: &str) -> Result<i64> {
        if !overlay.is_empty() {
            return parse_int(key, overlay);
        }
        match self.stored(key)? {
            ConfigValue::Integer(n) => Ok(*n),
            ConfigValue::String(s) => parse_int(key, s),
            other => Err(ConfigError::unexpected_kind(
                key.to_string(),
                "integer",
                other.kind_name(),
            )),
        }
    }

    /// Like [`as_int`](Self::as_int), but any failure yields `fallback`.
    pub fn as_int_or(&self, key: &str, overlay: &str, fallback: i64) -> i64 {
        self.as_int(key, overlay).unwrap_or(fallback)
    }

    /// Returns the value under `key` as a float.
    ///
    /// Integers widen to floats and strings are parsed.
    pub fn as_float(&self, key: &str, overlay: &str) -> Result<f64> {
        if !overlay.is_empty() {
            return parse_float(key, overlay);
        }
        match self.stored(key)? {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Integer(n) => Ok(*n as f64),
            ConfigValue::String(s) => parse_float(key, s),
            other => Err(ConfigError::unexpected_kind(
                key.to_string(),
                "float",
                other.kind_name(),
            )),
        }
    }

    /// Like [`as_float`](Self::as_float), but any failure yields `fallback`.
    pub fn as_float_or(&self, key: &str, overlay: &str, fallback: f64) -> f64 {
        self.as_float(key, overlay).unwrap_or(fallback)
    }

    /// Returns the value under `key` as a boolean.
    ///
    /// Strings and overlays accept (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// The integers `1` and `0` are accepted as well.
    pub fn as_bool(&self, key: &str, overlay: &str) -> Result<bool> {
        if !overlay.is_empty() {
            return parse_bool(key, overlay);
        }
        match self.stored(key)? {
            ConfigValue::Bool(b) => Ok(*b),
            ConfigValue::String(s) => parse_bool(key, s),
            ConfigValue::Integer(1) => Ok(true),
            ConfigValue::Integer(0) => Ok(false),
            other => Err(ConfigError::unexpected_kind(
                key.to_string(),
                "boolean",
                other.kind_name(),
            )),
        }
    }

    /// Like [`as_bool`](Self::as_bool), but any failure yields `fallback`.
    pub fn as_bool_or(&self, key: &str, overlay: &str, fallback: bool) -> bool {
        self.as_bool(key, overlay).unwrap_or(fallback)
    }

    /// Stored non-null value under `key`, or a not-found error.
    fn stored(&self, key: &str) -> Result<&'a ConfigValue> {
        match self.get(key) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }
}

impl Default for ConfigView<'_> {
    fn default() -> Self {
        Self::absent()
    }
}

fn parse_int(key: &str, text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
}

fn parse_float(key: &str, text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
}

fn parse_bool(key: &str, text: &str) -> Result<bool> {
    match text.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => text
            .parse::<bool>()
            .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
    }
}
