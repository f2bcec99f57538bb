// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration tree value.
//!
//! This module provides the `ConfigValue` type, a tagged variant holding one node
//! of a decoded configuration document. Mappings nest further `ConfigValue`s under
//! string keys, so a whole document is just a `ConfigValue::Mapping`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A mapping node: string keys to nested values, kept in key order.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// One node of a configuration document.
///
/// Keys of [`ConfigValue::Mapping`] are always strings. Decoders that produce
/// numeric or boolean keys normalize them to their textual form, so any node
/// can be reached with a string path.
///
/// # Examples
///
/// ```
/// use nanoconf::domain::{ConfigMap, ConfigValue};
///
/// let mut map = ConfigMap::new();
/// map.insert("port".to_string(), ConfigValue::from(8080));
/// let doc = ConfigValue::from(map);
///
/// assert_eq!(doc.get("port").and_then(ConfigValue::as_i64), Some(8080));
/// assert!(doc.get("host").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A text scalar
    String(String),
    /// An integer scalar
    Integer(i64),
    /// A floating point scalar
    Float(f64),
    /// A boolean scalar
    Bool(bool),
    /// A nested mapping
    Mapping(ConfigMap),
    /// A sequence of values
    Sequence(Vec<ConfigValue>),
    /// An explicit null or an empty node
    #[default]
    Null,
}

impl ConfigValue {
    /// Creates an empty mapping, the shape of a document with no settings.
    pub fn empty_mapping() -> Self {
        ConfigValue::Mapping(ConfigMap::new())
    }

    /// Returns a short name for the kind of this node, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Mapping(_) => "mapping",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Null => "null",
        }
    }

    /// Looks up `key` if this node is a mapping.
    ///
    /// Returns `None` for missing keys and for every non-mapping node.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the inner mapping, if this node is one.
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the inner sequence, if this node is one.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the text of a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value of an integer node.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value of a float or integer node.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the value of a boolean node.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` for mapping nodes.
    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    /// Returns `true` for null nodes.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Integer(i64::from(n))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Mapping(map)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(seq: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(seq)
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ConfigValue::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Text form used by the string accessors.
///
/// Scalars print bare, null prints as nothing, and containers print in a YAML-like
/// flow style: `{key: value, other: [1, 2]}`.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => fmt_float(*x, f),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Null => Ok(()),
            ConfigValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            ConfigValue::Sequence(seq) => {
                f.write_str("[")?;
                for (i, value) in seq.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Floats keep a fraction or exponent so their text never reads as an integer.
/// Non-finite values use the YAML spellings.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        f.write_str(".nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { ".inf" } else { "-.inf" })
    } else {
        write!(f, "{:?}", x)
    }
}
