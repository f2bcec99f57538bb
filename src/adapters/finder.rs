// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file discovery in conventional locations.
//!
//! An application's configuration may live in `/etc/<app>.conf`, `~/.<app>`,
//! `~/.config/<app>/<app>.conf`, the working directory, and so on. The
//! [`ConfigFinder`] checks every combination of candidate directory and candidate
//! file name and reports the ones that exist.

use crate::ports::ConfigLocator;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Locates an application's configuration file.
///
/// Candidate directories are searched in the order they were added, which by
/// convention runs from system-wide to user- and directory-specific locations.
/// The nearest match is therefore the last one found.
///
/// # Examples
///
/// ```rust,no_run
/// use nanoconf::adapters::ConfigFinder;
/// use nanoconf::ports::ConfigLocator;
///
/// let finder = ConfigFinder::new("myapp").default_setup();
/// match finder.find_first() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("no configuration, assuming {}", finder.default_path().display()),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFinder {
    /// Application name used to derive default directories and file names
    app_name: String,
    /// Path returned by `default_path` when set
    default_config: Option<PathBuf>,
    /// Candidate file names
    names: Vec<String>,
    /// Candidate directories
    paths: Vec<PathBuf>,
}

impl ConfigFinder {
    /// Creates a finder with no candidate directories or names.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            default_config: None,
            names: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Adds the conventional locations for the current user.
    ///
    /// Directories: `/etc`, `/etc/<app>`, the home directory,
    /// `<user config dir>/<app>` and `./`. Names: `<app>.conf` and `.<app>`.
    /// The user config dir comes from the `directories` crate (`$XDG_CONFIG_HOME`
    /// or `~/.config` on Linux). When no home directory can be determined, the
    /// user-specific directories are skipped.
    pub fn default_setup(self) -> Self {
        match BaseDirs::new() {
            Some(dirs) => {
                let home = dirs.home_dir().to_path_buf();
                let config = dirs.config_dir().to_path_buf();
                self.push_defaults(Some((home, config)))
            }
            None => {
                tracing::warn!(
                    "No home directory for the current user, skipping user configuration paths for {}",
                    self.app_name
                );
                self.push_defaults(None)
            }
        }
    }

    /// Adds the conventional locations for a given home directory.
    ///
    /// Same as [`default_setup`](Self::default_setup), with the user config dir
    /// taken as `<home>/.config`.
    pub fn default_setup_for_home(self, home_dir: impl AsRef<Path>) -> Self {
        let home = home_dir.as_ref().to_path_buf();
        let config = home.join(".config");
        self.push_defaults(Some((home, config)))
    }

    fn push_defaults(mut self, user_dirs: Option<(PathBuf, PathBuf)>) -> Self {
        self.paths.push(PathBuf::from("/etc"));
        self.paths.push(Path::new("/etc").join(&self.app_name));
        if let Some((home, config)) = user_dirs {
            self.paths.push(home);
            self.paths.push(config.join(&self.app_name));
        }
        self.paths.push(PathBuf::from("./"));

        self.names.push(format!("{}.conf", self.app_name));
        self.names.push(format!(".{}", self.app_name));
        self
    }

    /// Sets the path returned by [`default_path`](ConfigLocator::default_path).
    pub fn with_default_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_config = Some(path.into());
        self
    }

    /// Appends a candidate directory.
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Appends a candidate file name.
    pub fn add_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Removes all candidate directories.
    pub fn clean_paths(mut self) -> Self {
        self.paths.clear();
        self
    }

    /// Removes all candidate file names.
    pub fn clean_names(mut self) -> Self {
        self.names.clear();
        self
    }

    /// Returns the application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the candidate directories in search order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the candidate file names in search order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl ConfigLocator for ConfigFinder {
    fn find_all(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for dir in &self.paths {
            for name in &self.names {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    tracing::trace!("Found configuration candidate {}", candidate.display());
                    found.push(candidate);
                }
            }
        }
        found
    }

    fn default_path(&self) -> PathBuf {
        self.default_config
            .clone()
            .unwrap_or_else(|| Path::new("/etc").join(format!("{}.conf", self.app_name)))
    }
}
