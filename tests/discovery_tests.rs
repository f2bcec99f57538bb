// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for locating configuration files.
//!
//! These tests verify that the nearest candidate wins, that a missing file
//! falls back to the default path, and that discovery feeds `Config`.

#![cfg(feature = "yaml")]

mod common;

use common::dir_with_file;
use nanoconf::adapters::ConfigFinder;
use nanoconf::ports::ConfigLocator;
use nanoconf::service::{Config, ConfigBuilder};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_nearest_candidate_wins() {
    let system = dir_with_file("demo.conf", "origin: system\nshared: system\n");
    let user = dir_with_file("demo.conf", "origin: user\n");

    let finder = ConfigFinder::new("demo")
        .add_path(system.path())
        .add_path(user.path())
        .add_name("demo.conf");

    let config = Config::discover(&finder).unwrap();
    assert_eq!(config.source_path(), Some(user.path().join("demo.conf").as_path()));
    assert_eq!(config.root().as_string("origin", ""), "user");
    // Files are not merged: only the nearest one is read.
    assert_eq!(config.root().as_string("shared", ""), "");
}

#[test]
fn test_later_name_wins_within_directory() {
    let dir = dir_with_file("demo.conf", "origin: conf\n");
    std::fs::write(dir.path().join(".demo"), "origin: dotfile\n").unwrap();

    let finder = ConfigFinder::new("demo")
        .add_path(dir.path())
        .add_name("demo.conf")
        .add_name(".demo");

    assert_eq!(finder.find_all().len(), 2);
    let config = Config::discover(&finder).unwrap();
    assert_eq!(config.root().as_string("origin", ""), "dotfile");
}

#[test]
fn test_default_setup_for_home_finds_user_config() {
    let home = TempDir::new().unwrap();
    let app_dir = home.path().join(".config").join("nanoconf-test-app");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("nanoconf-test-app.conf"), "origin: xdg\n").unwrap();

    let finder = ConfigFinder::new("nanoconf-test-app").default_setup_for_home(home.path());
    let found = finder.find_all();
    assert_eq!(found, vec![app_dir.join("nanoconf-test-app.conf")]);

    let config = Config::discover(&finder).unwrap();
    assert_eq!(config.root().as_string("origin", ""), "xdg");
}

#[test]
fn test_home_dotfile_found() {
    let home = dir_with_file(".nanoconf-dot-app", "origin: dotfile\n");

    let finder = ConfigFinder::new("nanoconf-dot-app").default_setup_for_home(home.path());
    assert_eq!(
        finder.find_first(),
        Some(home.path().join(".nanoconf-dot-app"))
    );
}

#[test]
fn test_no_candidate_uses_default_path() {
    let fallback = dir_with_file("fallback.conf", "origin: default\n");
    let empty = TempDir::new().unwrap();

    let finder = ConfigFinder::new("demo")
        .add_path(empty.path())
        .add_name("demo.conf")
        .with_default_config(fallback.path().join("fallback.conf"));

    assert!(finder.find_first().is_none());
    let config = Config::discover(&finder).unwrap();
    assert_eq!(config.root().as_string("origin", ""), "default");
}

#[test]
fn test_no_candidate_and_no_default_is_empty() {
    let empty = TempDir::new().unwrap();
    let finder = ConfigFinder::new("demo")
        .add_path(empty.path())
        .add_name("demo.conf")
        .with_default_config(empty.path().join("missing.conf"));

    let config = Config::discover(&finder).unwrap();
    assert!(config.source_path().is_none());
    assert!(config.root().keys().is_empty());
}

#[test]
fn test_malformed_nearest_candidate_is_error() {
    let good = dir_with_file("demo.conf", "origin: good\n");
    let bad = dir_with_file("demo.conf", "origin: [broken\n");

    let finder = ConfigFinder::new("demo")
        .add_path(good.path())
        .add_path(bad.path())
        .add_name("demo.conf");

    assert!(Config::discover(&finder).is_err());
}

#[test]
fn test_builder_locate_with_separator() {
    let dir = dir_with_file("demo.conf", "section:\n  inner:\n    key: value\n");
    let finder = ConfigFinder::new("demo")
        .add_path(dir.path())
        .add_name("demo.conf");

    let config = ConfigBuilder::new()
        .separator("/")
        .locate(&finder)
        .build()
        .unwrap();
    assert_eq!(config.find("section/inner").as_string("key", ""), "value");
}

#[test]
fn test_default_path_without_preset() {
    let finder = ConfigFinder::new("demo");
    assert_eq!(finder.default_path(), PathBuf::from("/etc/demo.conf"));
}
