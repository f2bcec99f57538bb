// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path resolution over a configuration tree.

use crate::domain::{ConfigPath, ConfigValue};

/// Walks `root` one segment at a time and returns the node at `path`.
///
/// Every step must start from a mapping that contains the segment as a key.
/// Descending into a scalar, a sequence or a missing key is a miss and yields
/// `None`; callers decide what a miss means. The node reached after the last
/// segment is returned whatever its kind, and the root path returns `root`.
///
/// # Examples
///
/// ```
/// use nanoconf::domain::{navigator, ConfigPath, ConfigValue};
///
/// let inner: ConfigValue = [("key", "inner-value")].into_iter().collect();
/// let doc: ConfigValue = [("section", inner)].into_iter().collect();
///
/// let found = navigator::resolve(&doc, &ConfigPath::parse("section:key", ":"));
/// assert_eq!(found.and_then(ConfigValue::as_str), Some("inner-value"));
///
/// let missed = navigator::resolve(&doc, &ConfigPath::parse("section:key:deeper", ":"));
/// assert!(missed.is_none());
/// ```
pub fn resolve<'a>(root: &'a ConfigValue, path: &ConfigPath) -> Option<&'a ConfigValue> {
    let mut current = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        current = match current {
            ConfigValue::Mapping(map) => match map.get(segment) {
                Some(next) => next,
                None => {
                    tracing::trace!(path = %path, depth, segment = %segment, "key not present");
                    return None;
                }
            },
            other => {
                tracing::trace!(
                    path = %path,
                    depth,
                    kind = other.kind_name(),
                    "cannot descend into non-mapping node"
                );
                return None;
            }
        };
    }
    Some(current)
}
