// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// The document used across tests: one value at each of three depths.
#[allow(dead_code)]
pub const EXAMPLE_CONF: &str = r#"
key: root-value
section:
  key: section-value
  inner-section:
    key: inner-section-value
limits:
  connections: 128
  quoted: "64"
  ratio: 0.5
  label: unlimited
  enabled: on
"#;

/// Writes `contents` to a fresh temporary file.
#[allow(dead_code)]
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// Creates `<dir>/<name>` with `contents` inside a fresh temporary directory.
#[allow(dead_code)]
pub fn dir_with_file(name: &str, contents: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    std::fs::write(dir.path().join(name), contents).expect("write config");
    dir
}
