// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file locator trait definition.
//!
//! A locator knows where an application's configuration file may live and reports
//! which of those candidates exist.

use std::path::PathBuf;

/// A trait for discovering configuration files on disk.
///
/// # Ordering
///
/// [`find_all`](ConfigLocator::find_all) returns candidates from the most general
/// location to the most specific one, so the last entry is the nearest match.
///
/// # Examples
///
/// ```rust
/// use nanoconf::ports::ConfigLocator;
/// use std::path::PathBuf;
///
/// struct Fixed(Vec<PathBuf>);
///
/// impl ConfigLocator for Fixed {
///     fn find_all(&self) -> Vec<PathBuf> {
///         self.0.clone()
///     }
///
///     fn default_path(&self) -> PathBuf {
///         PathBuf::from("/etc/demo.conf")
///     }
/// }
///
/// let locator = Fixed(vec!["/etc/demo.conf".into(), "./demo.conf".into()]);
/// assert_eq!(locator.find_first(), Some(PathBuf::from("./demo.conf")));
/// ```
pub trait ConfigLocator {
    /// Returns every candidate file that exists, general to specific.
    fn find_all(&self) -> Vec<PathBuf>;

    /// Returns the path assumed when no candidate exists.
    fn default_path(&self) -> PathBuf;

    /// Returns the nearest existing candidate, if any.
    fn find_first(&self) -> Option<PathBuf> {
        self.find_all().pop()
    }
}
