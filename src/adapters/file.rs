// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guarded reads of configuration files.

use crate::domain::{ConfigError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maximum allowed size of a configuration file (10MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "config-file";

/// Reads a configuration file into a string.
///
/// A file that cannot be opened is not an error: the caller gets `Ok(None)` and
/// is expected to carry on with an empty document. Once the file is open, any
/// failure (oversized file, read error, invalid UTF-8) is returned as an error.
///
/// # Examples
///
/// ```rust
/// use nanoconf::adapters::file::read_config_file;
///
/// let content = read_config_file("/nonexistent/demo.conf").unwrap();
/// assert!(content.is_none());
/// ```
pub fn read_config_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(
                "Configuration file {} not opened ({}), using an empty document",
                path.display(),
                e
            );
            return Ok(None);
        }
    };

    let metadata = file.metadata().map_err(|e| ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(too_large(metadata.len()));
    }

    // Pipes and device files report a zero length, so the read is bounded too.
    let mut bytes = Vec::new();
    file.take(MAX_CONFIG_FILE_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Failed to read configuration file: {}", path.display()),
            source: Some(Box::new(e)),
        })?;
    if bytes.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(too_large(bytes.len() as u64));
    }

    let content = String::from_utf8(bytes).map_err(|e| ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Configuration file is not valid UTF-8: {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    tracing::debug!(
        "Read configuration file {} ({} bytes)",
        path.display(),
        content.len()
    );
    Ok(Some(content))
}

fn too_large(len: u64) -> ConfigError {
    ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "Configuration file too large: {} bytes (max {} bytes)",
            len, MAX_CONFIG_FILE_SIZE
        ),
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "key: value").unwrap();

        let content = read_config_file(temp_file.path()).unwrap();
        assert_eq!(content.as_deref(), Some("key: value\n"));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let content = read_config_file(dir.path().join("missing.conf")).unwrap();
        assert!(content.is_none());
    }

    // Opening a directory succeeds on unix and reading it fails, so this covers
    // the read path. The metadata path is not reachable from a test.
    #[test]
    #[cfg(unix)]
    fn test_read_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let result = read_config_file(dir.path());
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_read_invalid_utf8_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let result = read_config_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_read_oversized_file_is_error() {
        let temp_file = NamedTempFile::new().unwrap();
        temp_file
            .as_file()
            .set_len(MAX_CONFIG_FILE_SIZE + 1)
            .unwrap();

        let err = read_config_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_read_unbounded_device_is_error() {
        // Reports a zero length but never runs dry.
        let err = read_config_file("/dev/zero").unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_read_file_at_limit() {
        let temp_file = NamedTempFile::new().unwrap();
        temp_file.as_file().set_len(MAX_CONFIG_FILE_SIZE).unwrap();

        let content = read_config_file(temp_file.path()).unwrap();
        assert_eq!(content.map(|c| c.len() as u64), Some(MAX_CONFIG_FILE_SIZE));
    }
}
