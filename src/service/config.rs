// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration document holder.
//!
//! [`Config`] owns one decoded document for its whole lifetime and hands out
//! [`ConfigView`]s into it. The document is never mutated after construction, so
//! a `Config` can be shared freely between threads.

use crate::adapters::read_config_file;
use crate::domain::{ConfigError, ConfigPath, ConfigValue, ConfigView, Result, DEFAULT_SEPARATOR};
use crate::ports::{ConfigLocator, ConfigParser};
use std::path::{Path, PathBuf};

/// A loaded configuration document.
///
/// # Examples
///
/// ```rust
/// use nanoconf::service::Config;
///
/// # fn main() -> nanoconf::domain::Result<()> {
/// let config = Config::from_yaml_str(
///     "key: root-value\nsection:\n  key: section-value\n  inner-section:\n    key: inner-section-value\n",
/// )?;
///
/// assert_eq!(config.root().as_string("key", ""), "root-value");
/// assert_eq!(config.find("section").as_string("key", ""), "section-value");
/// assert_eq!(
///     config.find("section:inner-section").as_string("key", ""),
///     "inner-section-value"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the document, always a mapping
    data: ConfigValue,
    /// Path segment delimiter used by `find`
    separator: String,
    /// File the document was read from, if any
    source_path: Option<PathBuf>,
}

impl Config {
    /// Creates a configuration with an empty document.
    pub fn empty() -> Self {
        Self {
            data: ConfigValue::empty_mapping(),
            separator: DEFAULT_SEPARATOR.to_string(),
            source_path: None,
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Wraps an already decoded document.
    ///
    /// A null document is treated as empty.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ParseError`] if the root is neither a mapping nor null.
    pub fn from_document(document: ConfigValue) -> Result<Self> {
        let data = match document {
            ConfigValue::Null => ConfigValue::empty_mapping(),
            mapping @ ConfigValue::Mapping(_) => mapping,
            other => {
                return Err(ConfigError::ParseError {
                    message: format!(
                        "Configuration root must be a mapping, found {}",
                        other.kind_name()
                    ),
                    source: None,
                })
            }
        };
        Ok(Self {
            data,
            ..Self::empty()
        })
    }

    /// Loads a YAML configuration file.
    ///
    /// A file that cannot be opened yields an empty configuration. A file that
    /// opens but cannot be read or parsed is an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nanoconf::service::Config;
    ///
    /// let config = Config::load("/nonexistent/demo.conf").unwrap();
    /// assert_eq!(config.root().as_string("key", ""), "");
    /// assert!(config.source_path().is_none());
    /// ```
    #[cfg(feature = "yaml")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().file(path).build()
    }

    /// Parses a configuration from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::builder().text(content).build()
    }

    /// Loads the nearest file reported by `locator`, or its default path when no
    /// candidate exists.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use nanoconf::adapters::ConfigFinder;
    /// use nanoconf::service::Config;
    ///
    /// let finder = ConfigFinder::new("myapp").default_setup();
    /// let config = Config::discover(&finder).unwrap();
    /// ```
    #[cfg(feature = "yaml")]
    pub fn discover(locator: &dyn ConfigLocator) -> Result<Self> {
        Self::builder().locate(locator).build()
    }

    /// Sets the delimiter used to split paths passed to [`find`](Self::find).
    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    /// Builder-style variant of [`set_separator`](Self::set_separator).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns the path delimiter.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the file the document was read from.
    ///
    /// `None` when the document came from text, or when the file could not be
    /// opened and the configuration is empty.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns a view over the entire document.
    pub fn root(&self) -> ConfigView<'_> {
        ConfigView::new(Some(&self.data), &self.separator)
    }

    /// Returns a view over the node at `path`.
    ///
    /// A path that does not resolve gives an absent view rather than an error;
    /// use [`ConfigView::is_present`] to tell the difference.
    pub fn find(&self, path: &str) -> ConfigView<'_> {
        self.root().find_path(&ConfigPath::parse(path, &self.separator))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

enum DocumentSource {
    File(PathBuf),
    Text(String),
}

/// Builder for constructing a [`Config`].
///
/// # Examples
///
/// ```rust
/// use nanoconf::service::ConfigBuilder;
///
/// # fn main() -> nanoconf::domain::Result<()> {
/// let config = ConfigBuilder::new()
///     .separator(".")
///     .text("server:\n  port: 8080\n")
///     .build()?;
/// assert_eq!(config.find("server").as_int("port", "")?, 8080);
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder {
    separator: String,
    parser: Option<Box<dyn ConfigParser>>,
    source: Option<DocumentSource>,
}

impl ConfigBuilder {
    /// Creates a new builder that produces an empty configuration.
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            parser: None,
            source: None,
        }
    }

    /// Sets the path delimiter.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the document parser. Defaults to YAML.
    pub fn parser(mut self, parser: Box<dyn ConfigParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Reads the document from a file.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.source = Some(DocumentSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Reads the document from the file chosen by `locator`.
    pub fn locate(self, locator: &dyn ConfigLocator) -> Self {
        let path = locator.find_first().unwrap_or_else(|| {
            let fallback = locator.default_path();
            tracing::debug!(
                "No configuration file found, trying default {}",
                fallback.display()
            );
            fallback
        });
        self.file(path)
    }

    /// Parses the document from in-memory text.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.source = Some(DocumentSource::Text(content.into()));
        self
    }

    /// Reads and parses the document.
    ///
    /// # Errors
    ///
    /// Read and parse failures of an opened file, and documents whose root is not
    /// a mapping. A missing file is not an error.
    pub fn build(self) -> Result<Config> {
        let (document, source_path) = match self.source {
            None => (ConfigValue::Null, None),
            Some(DocumentSource::Text(content)) => {
                (resolve_parser(self.parser)?.parse(&content)?, None)
            }
            Some(DocumentSource::File(path)) => match read_config_file(&path)? {
                None => (ConfigValue::Null, None),
                Some(content) => {
                    let document = resolve_parser(self.parser)?
                        .parse(&content)
                        .map_err(|e| ConfigError::ParseError {
                            message: format!("{}: {}", path.display(), e),
                            source: Some(Box::new(e)),
                        })?;
                    tracing::debug!("Loaded configuration from {}", path.display());
                    (document, Some(path))
                }
            },
        };

        let mut config = Config::from_document(document)?;
        config.separator = self.separator;
        config.source_path = source_path;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_parser(parser: Option<Box<dyn ConfigParser>>) -> Result<Box<dyn ConfigParser>> {
    match parser {
        Some(parser) => Ok(parser),
        None => default_parser(),
    }
}

#[cfg(feature = "yaml")]
fn default_parser() -> Result<Box<dyn ConfigParser>> {
    Ok(Box::new(crate::adapters::YamlParser::new()))
}

#[cfg(not(feature = "yaml"))]
fn default_parser() -> Result<Box<dyn ConfigParser>> {
    Err(ConfigError::ParseError {
        message: "No configuration parser available; enable the `yaml` feature or set one with `ConfigBuilder::parser`".to_string(),
        source: None,
    })
}
