// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! Decodes YAML text with `serde_yaml` and converts the generic value into a
//! [`ConfigValue`] tree, normalizing mapping keys to strings on the way.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigParser;
use serde_yaml::Value;

/// YAML parser implementation.
///
/// Scalar keys are normalized to text (`1: a` becomes key `"1"`, `true: b` becomes
/// key `"true"`, `~: c` becomes key `"null"`). Keys that are themselves mappings
/// or sequences cannot be addressed by a path and are dropped. Tags are stripped
/// and their inner value kept.
///
/// # Examples
///
/// ```rust
/// use nanoconf::adapters::YamlParser;
/// use nanoconf::domain::ConfigValue;
/// use nanoconf::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let doc = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// let database = doc.get("database").unwrap();
/// assert_eq!(database.get("port").and_then(ConfigValue::as_i64), Some(5432));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a decoded YAML value into a configuration tree.
    fn convert(value: Value) -> ConfigValue {
        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => Self::convert_number(&n),
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(seq) => {
                ConfigValue::Sequence(seq.into_iter().map(Self::convert).collect())
            }
            Value::Mapping(map) => {
                let mut result = ConfigMap::new();
                for (key, val) in map {
                    let Some(key) = Self::key_to_string(&key) else {
                        tracing::warn!(
                            "Dropping configuration entry with a non-scalar key: {:?}",
                            key
                        );
                        continue;
                    };
                    if result.insert(key.clone(), Self::convert(val)).is_some() {
                        tracing::warn!("Duplicate configuration key after normalization: {}", key);
                    }
                }
                ConfigValue::Mapping(result)
            }
            Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }

    /// Integers that fit in `i64` stay integers. Larger unsigned values keep
    /// their exact digits as text.
    fn convert_number(n: &serde_yaml::Number) -> ConfigValue {
        if let Some(i) = n.as_i64() {
            return ConfigValue::Integer(i);
        }
        if n.is_f64() {
            if let Some(f) = n.as_f64() {
                return ConfigValue::Float(f);
            }
        }
        ConfigValue::String(n.to_string())
    }

    fn key_to_string(key: &Value) -> Option<String> {
        match key {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some("null".to_string()),
            Value::Tagged(tagged) => Self::key_to_string(&tagged.value),
            Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;
        Ok(Self::convert(value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml", "conf"]
    }
}
