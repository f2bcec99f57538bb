// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delimited lookup paths.
//!
//! This module provides the `ConfigPath` type: a lookup string such as
//! `"section:inner-section"` split by a separator into ordered segments, one per
//! level of nesting.

use std::fmt;

/// The separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = ":";

/// An ordered list of segment keys, each naming one level of descent.
///
/// An empty path has no segments and addresses the document root.
///
/// # Examples
///
/// ```
/// use nanoconf::domain::ConfigPath;
///
/// let path = ConfigPath::parse("server:tls:cert", ":");
/// assert_eq!(path.segments(), ["server", "tls", "cert"]);
///
/// let dotted = ConfigPath::parse("server.tls.cert", ".");
/// assert_eq!(path, dotted);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConfigPath(Vec<String>);

impl ConfigPath {
    /// Splits `path` on `separator`.
    ///
    /// The empty string yields the root path. An empty separator does not split
    /// at all, so the whole string becomes a single segment. Empty segments
    /// (`"a::b"`) are kept and simply never match a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoconf::domain::ConfigPath;
    ///
    /// assert!(ConfigPath::parse("", ":").is_root());
    /// assert_eq!(ConfigPath::parse("a:b", "").segments(), ["a:b"]);
    /// ```
    pub fn parse(path: &str, separator: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        if separator.is_empty() {
            return ConfigPath(vec![path.to_string()]);
        }
        ConfigPath(path.split(separator).map(str::to_string).collect())
    }

    /// The path with no segments.
    pub fn root() -> Self {
        ConfigPath(Vec::new())
    }

    /// Returns `true` if the path has no segments.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the segments in descent order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with the segments of `other` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoconf::domain::ConfigPath;
    ///
    /// let base = ConfigPath::parse("server", ":");
    /// let full = base.join(&ConfigPath::parse("tls:cert", ":"));
    /// assert_eq!(full, ConfigPath::parse("server:tls:cert", ":"));
    /// ```
    pub fn join(&self, other: &ConfigPath) -> ConfigPath {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        ConfigPath(segments)
    }

    /// Renders the path with the given separator.
    pub fn to_string_with(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for ConfigPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ConfigPath(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for ConfigPath {
    fn from(segments: Vec<String>) -> Self {
        ConfigPath(segments)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(DEFAULT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_separator() {
        let path = ConfigPath::parse("section:inner-section", DEFAULT_SEPARATOR);
        assert_eq!(path.segments(), ["section", "inner-section"]);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_parse_single_segment() {
        let path = ConfigPath::parse("section", ":");
        assert_eq!(path.segments(), ["section"]);
    }

    #[test]
    fn test_parse_custom_separator() {
        let path = ConfigPath::parse("section.inner-section", ".");
        assert_eq!(path, ConfigPath::parse("section:inner-section", ":"));
    }

    #[test]
    fn test_parse_multichar_separator() {
        let path = ConfigPath::parse("a::b", "::");
        assert_eq!(path.segments(), ["a", "b"]);
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let path = ConfigPath::parse("a::b", ":");
        assert_eq!(path.segments(), ["a", "", "b"]);
    }

    #[test]
    fn test_empty_string_is_root() {
        let path = ConfigPath::parse("", ":");
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path, ConfigPath::root());
    }

    #[test]
    fn test_empty_separator_does_not_split() {
        let path = ConfigPath::parse("a:b.c", "");
        assert_eq!(path.segments(), ["a:b.c"]);
    }

    #[test]
    fn test_join() {
        let joined = ConfigPath::parse("a", ":").join(&ConfigPath::parse("b:c", ":"));
        assert_eq!(joined.segments(), ["a", "b", "c"]);
        assert_eq!(ConfigPath::root().join(&joined), joined);
    }

    #[test]
    fn test_display_and_render() {
        let path: ConfigPath = ["a", "b"].into_iter().collect();
        assert_eq!(path.to_string(), "a:b");
        assert_eq!(path.to_string_with("/"), "a/b");
    }
}
